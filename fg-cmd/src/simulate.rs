//! Headless run of the dashboard and alert refresh loops.
//!
//! The default run drives a [`ManualScheduler`] in virtual time, so any
//! number of ticks finishes instantly. `--realtime` swaps in the tokio
//! scheduler and the wall clock and waits out every period.

use crate::tokio_scheduler::TokioScheduler;
use anyhow::Context;
use chrono::{DateTime, Utc};
use fg_core::view::percent_label;
use fg_pages::{AlertsPage, DashboardPage, PageContext, RefreshConfig};
use fg_runtime::{Clock, ManualClock, ManualScheduler, SystemClock};
use fg_utils::dates::format_clock;
use log::info;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

/// How long after a period boundary the real-time report is taken.
const REPORT_LAG: Duration = Duration::from_millis(100);

/// Defaults, or the JSON overrides in `path`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<RefreshConfig> {
    let Some(path) = path else {
        return Ok(RefreshConfig::default());
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config = RefreshConfig::from_json(&raw).with_context(|| format!("loading {}", path.display()))?;
    info!("[FlowGuard] simulate: loaded refresh config from {}", path.display());
    Ok(config)
}

fn page_rng(seed: Option<u64>, stream: u64) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed.wrapping_add(stream))),
        None => Box::new(ChaCha8Rng::from_entropy()),
    }
}

/// The two live pages of a simulation run.
struct Simulation {
    dashboard: DashboardPage,
    alerts: AlertsPage,
}

impl Simulation {
    fn mount(ctx: &PageContext, seed: Option<u64>) -> anyhow::Result<Self> {
        Ok(Self {
            dashboard: DashboardPage::mount(ctx, page_rng(seed, 0))?,
            alerts: AlertsPage::mount(ctx, page_rng(seed, 1))?,
        })
    }

    fn header() -> &'static str {
        "time   tick  safe warn crit  top risk      alerts"
    }

    /// One line summarizing the current snapshots.
    fn report(&self, now: &DateTime<Utc>) -> String {
        let counts = self.dashboard.status_counts();
        let top = self
            .dashboard
            .sensors_by_risk()
            .first()
            .map(|s| format!("{} {}", s.id, percent_label(s.risk_percentage)))
            .unwrap_or_default();
        let summary = self.alerts.summary();
        format!(
            "{}  {:>4}  {:>4} {:>4} {:>4}  {:<12}  {} active / {} critical / {} total",
            format_clock(now),
            self.dashboard.ticks(),
            counts.safe,
            counts.warning,
            counts.critical,
            top,
            summary.active,
            summary.critical,
            summary.total,
        )
    }
}

/// Run `ticks` dashboard periods in virtual time starting at `start`.
fn virtual_report(
    start: DateTime<Utc>,
    ticks: u32,
    seed: Option<u64>,
    config: RefreshConfig,
) -> anyhow::Result<Vec<String>> {
    let clock = ManualClock::new(start);
    let scheduler = Rc::new(ManualScheduler::with_clock(clock.clone()));
    let period = config.dashboard();
    let ctx = PageContext::new(scheduler.clone(), Rc::new(clock.clone())).with_config(config);
    let simulation = Simulation::mount(&ctx, seed)?;

    let mut lines = Vec::with_capacity(ticks as usize + 1);
    lines.push(simulation.report(&clock.now()));
    for _ in 0..ticks {
        scheduler.advance(period);
        lines.push(simulation.report(&clock.now()));
    }
    Ok(lines)
}

pub fn run_virtual(ticks: u32, seed: Option<u64>, config: RefreshConfig) -> anyhow::Result<()> {
    info!("[FlowGuard] simulate: {} ticks in virtual time", ticks);
    let lines = virtual_report(Utc::now(), ticks, seed, config)?;
    println!("{}", Simulation::header());
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

pub async fn run_realtime(ticks: u32, seed: Option<u64>, config: RefreshConfig) -> anyhow::Result<()> {
    let period = config.dashboard();
    info!(
        "[FlowGuard] simulate: {} ticks every {:?} on the wall clock",
        ticks, period
    );
    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let clock = SystemClock;
            let ctx = PageContext::new(Rc::new(TokioScheduler), Rc::new(clock)).with_config(config);
            let simulation = Simulation::mount(&ctx, seed)?;
            let started = tokio::time::Instant::now();

            println!("{}", Simulation::header());
            println!("{}", simulation.report(&clock.now()));
            for tick in 1..=ticks {
                tokio::time::sleep_until(started + period * tick + REPORT_LAG).await;
                println!("{}", simulation.report(&clock.now()));
            }
            Ok(())
        })
        .await
}
