//! Sign in, sign out and inspect the session kept in a JSON file.
//!
//! Login goes through the same page state as the web form, including the
//! simulated latency, with tokio timers doing the waiting.

use crate::file_store::FileStore;
use crate::tokio_scheduler::TokioScheduler;
use fg_pages::{LoginPage, LoginStatus, PageContext, LOGIN_FAILED_MESSAGE};
use fg_runtime::SystemClock;
use fg_session::credentials::DemoCredentials;
use fg_session::SessionStore;
use log::info;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

type FileSession = SessionStore<FileStore, DemoCredentials>;

fn open(store: &Path) -> FileSession {
    SessionStore::restore(FileStore::new(store), DemoCredentials::default())
}

/// One-line description of whoever is signed in.
fn describe(session: &FileSession) -> String {
    match session.current_user() {
        Some(user) => format!(
            "{} <{}> ({}), {}",
            user.name, user.email, user.role, user.organization
        ),
        None => "Not signed in".to_string(),
    }
}

pub async fn run_login(store: &Path, email: &str, password: &str) -> anyhow::Result<()> {
    let session = Rc::new(RefCell::new(open(store)));
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let local = tokio::task::LocalSet::new();
    let status = local
        .run_until(async {
            let ctx = PageContext::new(Rc::new(TokioScheduler), Rc::new(SystemClock)).with_notify(move || {
                let _ = tx.send(());
            });
            let mut page = LoginPage::mount(&ctx);
            page.email = email.to_string();
            page.password = password.to_string();
            page.submit(&session);
            rx.recv().await;
            page.status()
        })
        .await;

    if status != LoginStatus::SignedIn {
        anyhow::bail!(LOGIN_FAILED_MESSAGE);
    }
    info!("[FlowGuard] cli: session written to {}", store.display());
    println!("Signed in as {}", describe(&session.borrow()));
    Ok(())
}

pub fn run_logout(store: &Path) -> anyhow::Result<()> {
    open(store).logout();
    println!("Signed out");
    Ok(())
}

pub fn run_whoami(store: &Path) -> anyhow::Result<()> {
    let session = open(store);
    println!("{}", describe(&session));
    if let Some(token) = session.token() {
        println!("token: {}", token);
    }
    Ok(())
}
