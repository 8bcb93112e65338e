//! `localStorage` binding for the session store.

use fg_session::storage::KeyValueStore;
use web_sys::Storage;

/// The browser's `localStorage`.
///
/// Reads that fail (storage disabled, private mode) behave like a missing
/// key, so the session simply starts unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> anyhow::Result<Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        window
            .local_storage()
            .map_err(|_| anyhow::anyhow!("localStorage error"))?
            .ok_or_else(|| anyhow::anyhow!("no localStorage"))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage().ok()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("failed to set localStorage item {}: {:?}", key, e))
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| anyhow::anyhow!("failed to remove localStorage item {}: {:?}", key, e))
    }
}
