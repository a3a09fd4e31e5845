// src/simulation/mod.rs
//! Background threads that keep the listing board looking busy.
//!
//! Four tasks run on their own threads. Each draws its period once at start,
//! then sleeps on a shared stop signal between runs. All store mutations go
//! through `SharedStore::with_store_mut`.

pub mod tasks;

use chrono::Utc;
use parking_lot::{Condvar, Mutex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::config::{PeriodRange, SimulationConfig};
use crate::notifications::NotificationKind;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Views,
    NewListing,
    SoldNotice,
    PriceChange,
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Views,
        TaskKind::NewListing,
        TaskKind::SoldNotice,
        TaskKind::PriceChange,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TaskKind::Views => "views",
            TaskKind::NewListing => "new-listing",
            TaskKind::SoldNotice => "sold-notice",
            TaskKind::PriceChange => "price-change",
        }
    }

    pub fn period(self, cfg: &SimulationConfig) -> PeriodRange {
        match self {
            TaskKind::Views => cfg.views,
            TaskKind::NewListing => cfg.new_listing,
            TaskKind::SoldNotice => cfg.sold_notice,
            TaskKind::PriceChange => cfg.price_change,
        }
    }
}

/// Run one tick of `kind` against the shared state.
pub fn run_task<R: Rng + ?Sized>(
    kind: TaskKind,
    state: &AppState,
    rng: &mut R,
) -> Result<(), StoreError> {
    match kind {
        TaskKind::Views => {
            let bumps = state
                .store
                .with_store_mut(|store| tasks::increment_random_views(store, rng));
            for bump in bumps {
                tracing::trace!(listing_id = bump.id, views = bump.views, "views bumped");
            }
        }
        TaskKind::NewListing => {
            let today = Utc::now().date_naive();
            let listing = state
                .store
                .with_store_mut(|store| tasks::add_new_listing(store, rng, today))?;

            tracing::info!(listing_id = listing.id, title = %listing.title, "listing added");
            state.notifications.lock().push(
                NotificationKind::Success,
                vec!["🏠 새 매물이 등록되었습니다!".to_string(), listing.title],
            );
        }
        TaskKind::SoldNotice => {
            let notice = tasks::sold_notice(rng);
            state
                .notifications
                .lock()
                .push(NotificationKind::Sold, vec![notice.message()]);
        }
        TaskKind::PriceChange => {
            let change = state
                .store
                .with_store_mut(|store| tasks::simulate_price_change(store, rng))?;

            if let Some(change) = change {
                tracing::info!(
                    listing_id = change.id,
                    old = change.old,
                    new = change.new,
                    "price changed"
                );
                let kind = if change.is_increase() {
                    NotificationKind::Warning
                } else {
                    NotificationKind::Info
                };
                state.notifications.lock().push(kind, change.message_lines());
            }
        }
    }
    Ok(())
}

/// Wakes sleeping task threads when the simulation is stopped.
#[derive(Default)]
struct StopSignal {
    stopped: Mutex<bool>,
    cv: Condvar,
}

impl StopSignal {
    fn stop(&self) {
        *self.stopped.lock() = true;
        self.cv.notify_all();
    }

    /// Sleep for up to `timeout`. Returns `true` once stop has been requested.
    fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut stopped = self.stopped.lock();
        while !*stopped {
            if self.cv.wait_until(&mut stopped, deadline).timed_out() {
                break;
            }
        }
        *stopped
    }
}

pub struct Simulation {
    signal: Arc<StopSignal>,
    handles: Vec<JoinHandle<()>>,
}

impl Simulation {
    pub fn start(state: Arc<AppState>, cfg: &SimulationConfig) -> Self {
        let signal = Arc::new(StopSignal::default());
        let start_delay = Duration::from_millis(cfg.start_delay_ms);
        let mut handles = Vec::with_capacity(TaskKind::ALL.len());

        for kind in TaskKind::ALL {
            let state = Arc::clone(&state);
            let signal = Arc::clone(&signal);
            let range = kind.period(cfg);

            let spawned = thread::Builder::new()
                .name(format!("sim-{}", kind.name()))
                .spawn(move || {
                    let mut rng = StdRng::from_entropy();
                    let period = range.sample(&mut rng);
                    tracing::debug!(task = kind.name(), ?period, "simulation task scheduled");

                    if signal.wait(start_delay) {
                        return;
                    }
                    while !signal.wait(period) {
                        if let Err(e) = run_task(kind, &state, &mut rng) {
                            tracing::warn!(task = kind.name(), error = %e, "simulation task failed");
                        }
                    }
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => tracing::error!(task = kind.name(), error = %e, "failed to spawn simulation task"),
            }
        }

        tracing::info!(tasks = handles.len(), "simulation started");
        Self { signal, handles }
    }

    /// Signal every task and wait for in-flight runs to finish.
    pub fn stop(self) {
        self.signal.stop();
        for handle in self.handles {
            if handle.join().is_err() {
                tracing::warn!("simulation task panicked");
            }
        }
        tracing::info!("simulation stopped");
    }
}
