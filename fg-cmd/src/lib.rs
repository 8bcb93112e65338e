//! Command implementations for the FlowGuard CLI.
//!
//! Provides subcommands for running the sensor and alert simulation and for
//! signing in and out against a session kept in a JSON file.

use clap::Subcommand;
use std::path::PathBuf;

pub mod account;
pub mod file_store;
pub mod simulate;
pub mod tokio_scheduler;

/// Default session file, relative to the working directory.
pub const DEFAULT_STORE: &str = "flowguard-session.json";

#[derive(Subcommand)]
pub enum Command {
    /// Run the dashboard and alert refresh loops and print each tick
    Simulate {
        /// Number of dashboard refreshes to run
        #[arg(short = 'n', long, default_value_t = 6)]
        ticks: u32,

        /// Seed for the random walk (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file overriding refresh periods and latencies
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Wait out each period on the wall clock instead of virtual time
        #[arg(long)]
        realtime: bool,
    },

    /// Sign in with a demo account and persist the session
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Session file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },

    /// Remove the persisted session
    Logout {
        /// Session file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },

    /// Show the signed-in user, if any
    Whoami {
        /// Session file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Simulate {
            ticks,
            seed,
            config,
            realtime,
        } => {
            let config = simulate::load_config(config.as_deref())?;
            if realtime {
                simulate::run_realtime(ticks, seed, config).await
            } else {
                simulate::run_virtual(ticks, seed, config)
            }
        }
        Command::Login {
            email,
            password,
            store,
        } => account::run_login(&store, &email, &password).await,
        Command::Logout { store } => account::run_logout(&store),
        Command::Whoami { store } => account::run_whoami(&store),
    }
}
