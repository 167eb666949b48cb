//! Pager engine with statum state machine for carousel lifecycle
//!
//! Each carousel view owns one engine running in its own tokio task. The
//! engine serializes every mutation of its pager core: commands from the
//! UI, ticks from the auto-advance schedule, and the deferred return to
//! Idle all resolve inside one select loop, so no two transitions can be
//! in flight at once and no timer can outlive its engine.
//!
//! # State Machine
//!
//! ```text
//! Initializing ──► Configured ──► Active ──► Deactivating ──► Deactivated
//!                     │              │           ▲
//!                     └──────────────┘           │
//!                       (activate)           (shutdown)
//! ```
//!
//! # Architecture
//!
//! ```text
//! PagerCommand ──► [PagerCore] ──► PagerSnapshot
//!       ▲              │               │
//!       │        [AutoAdvance]         ▼
//!  Command Channel              Snapshot Channel
//! ```

use crate::pager::auto_advance::AutoAdvance;
use crate::pager::core::{PagerCore, Step};
use crate::pager::error::PagerError;
use crate::pager::{PagerCommand, PagerSettings, PagerSnapshot};
use statum::{machine, state};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::{debug, error, info, warn};

/// Idle deadline handed to disabled timer branches of the select loop.
const FAR_IDLE: Duration = Duration::from_secs(3600);

/// States for pager engine lifecycle using statum
#[state]
#[derive(Debug, Clone)]
pub enum PagerEngineState {
    Initializing, // Setting up engine structure
    Configured,   // Core validated against the item sequence
    Active,       // Processing commands in main loop
    Deactivating, // Shutting down gracefully
    Deactivated,  // Fully stopped, ready for cleanup
}

/// What woke the select loop; resolved outside the macro so command
/// handling can borrow the engine freely.
enum Wake {
    Shutdown,
    Command(Option<PagerCommand>),
    Settle,
    AutoTick,
}

/// Pager engine with compile-time state safety via statum
///
/// Wraps the pure pager core and manages its lifecycle through distinct
/// states. Each state has specific allowed operations enforced at compile
/// time.
#[machine]
pub struct PagerEngine<S: PagerEngineState> {
    settings: PagerSettings,
    core: Option<PagerCore>,
    command_receiver: mpsc::Receiver<PagerCommand>,
    snapshot_sender: watch::Sender<PagerSnapshot>,
    auto_advance: Option<AutoAdvance>,
    paused: bool,
}

impl<S: PagerEngineState> PagerEngine<S> {
    pub fn get_name(&self) -> &str {
        &self.settings.name
    }
}

impl PagerEngine<Initializing> {
    pub fn create(
        settings: PagerSettings,
        command_receiver: mpsc::Receiver<PagerCommand>,
        snapshot_sender: watch::Sender<PagerSnapshot>,
    ) -> Self {
        info!("Initializing new pager engine: {}", settings.name);

        Self::new(
            settings,
            None, // core
            command_receiver,
            snapshot_sender,
            None,  // auto_advance
            false, // paused
        )
    }

    /// Validates the deck and transitions to Configured state
    ///
    /// Builds the pager core from the settings; fails if the backing item
    /// sequence is empty.
    pub fn configure(mut self) -> Result<PagerEngine<Configured>, PagerError> {
        info!("Configuring pager engine: {}", self.settings.name);

        match PagerCore::new(self.settings.item_count, self.settings.transition) {
            Ok(core) => {
                debug!(
                    "Pager core ready with {} items, {:?} transition",
                    self.settings.item_count, self.settings.transition
                );
                self.core = Some(core);
                info!("Engine configured successfully: {}", self.settings.name);
                Ok(self.transition())
            }
            Err(e) => {
                error!("Failed to configure pager core: {}", e);
                Err(e)
            }
        }
    }
}

impl PagerEngine<Configured> {
    pub fn activate(self) -> PagerEngine<Active> {
        info!("Activating pager engine: {}", self.settings.name);
        self.transition()
    }
}

impl PagerEngine<Active> {
    /// Main processing loop with graceful shutdown support
    ///
    /// Runs until the shutdown signal arrives or the command channel
    /// closes. The settle timer and the auto-advance schedule live inside
    /// this loop and die with it, so teardown cancels them on every exit
    /// path by construction.
    pub async fn run_until_shutdown(
        mut self,
        mut shutdown_rx: oneshot::Receiver<()>,
    ) -> PagerEngine<Deactivating> {
        info!("Starting pager loop for: {}", self.settings.name);

        let now = time::Instant::now().into_std();
        self.auto_advance = self
            .settings
            .auto_advance
            .map(|interval| AutoAdvance::new(interval, now));
        self.publish(now);

        loop {
            let far = time::Instant::now() + FAR_IDLE;
            let settle_at = self.core.as_ref().and_then(|core| core.transition_deadline());
            let auto_at = self.auto_advance.as_ref().map(AutoAdvance::deadline);

            let wake = tokio::select! {
                _ = &mut shutdown_rx => Wake::Shutdown,

                command = self.command_receiver.recv() => Wake::Command(command),

                _ = time::sleep_until(settle_at.map_or(far, time::Instant::from_std)),
                    if settle_at.is_some() => Wake::Settle,

                _ = time::sleep_until(auto_at.map_or(far, time::Instant::from_std)),
                    if auto_at.is_some() => Wake::AutoTick,
            };

            match wake {
                Wake::Shutdown => {
                    info!("Shutdown signal received for: {}", self.settings.name);
                    break;
                }
                Wake::Command(None) => {
                    info!("Command channel closed for: {}", self.settings.name);
                    break;
                }
                Wake::Command(Some(command)) => self.handle_command(command),
                Wake::Settle => {
                    let now = time::Instant::now().into_std();
                    if let Some(core) = self.core.as_mut() {
                        core.settle(now);
                    }
                    self.publish(now);
                }
                Wake::AutoTick => self.auto_tick(),
            }
        }

        info!("Transitioning to Deactivating state: {}", self.settings.name);
        self.transition()
    }

    /// Applies a single command to the core and publishes on change.
    fn handle_command(&mut self, command: PagerCommand) {
        let now = time::Instant::now().into_std();

        let Some(core) = self.core.as_mut() else {
            warn!(
                "Pager command {:?} with no core configured: {}",
                command, self.settings.name
            );
            return;
        };

        let result = match command {
            PagerCommand::Advance => core.advance(now),
            PagerCommand::Retreat => core.retreat(now),
            PagerCommand::GoTo(index) => core.go_to(index, now),
            PagerCommand::SetPaused(paused) => {
                self.paused = paused;
                debug!("Pager {} paused: {}", self.settings.name, paused);
                self.publish(now);
                return;
            }
        };

        match result {
            Ok(Step::Moved { from, to }) => {
                debug!("Pager {} moved {} -> {}", self.settings.name, from, to);
                self.publish(now);
            }
            Ok(Step::Rejected) => {
                // Silent by contract; the core already logged at debug.
            }
            Err(e) => {
                warn!(
                    "Pager {} refused command {:?}: {}",
                    self.settings.name, command, e
                );
            }
        }
    }

    /// Consumes a due auto-advance tick; skipped ticks only rearm.
    fn auto_tick(&mut self) {
        let now = time::Instant::now().into_std();
        let transitioning = self
            .core
            .as_ref()
            .is_some_and(|core| core.is_transitioning(now));
        let paused = self.paused;

        let fired = self
            .auto_advance
            .as_mut()
            .is_some_and(|timer| timer.fire(now, paused, transitioning));
        if !fired {
            return;
        }

        let Some(core) = self.core.as_mut() else {
            return;
        };
        match core.advance(now) {
            Ok(Step::Moved { from, to }) => {
                debug!("Auto-advance {} moved {} -> {}", self.settings.name, from, to);
                self.publish(now);
            }
            Ok(Step::Rejected) => {}
            Err(e) => warn!("Auto-advance failed on {}: {}", self.settings.name, e),
        }
    }

    /// Broadcasts the current state to the rendering layer.
    fn publish(&self, now: Instant) {
        let Some(core) = self.core.as_ref() else {
            return;
        };
        let snapshot = PagerSnapshot {
            current_index: core.current_index(),
            item_count: core.item_count(),
            transitioning: core.is_transitioning(now),
            paused: self.paused,
        };
        if self.snapshot_sender.send(snapshot).is_err() {
            debug!("No snapshot subscribers for: {}", self.settings.name);
        }
    }
}

impl PagerEngine<Deactivating> {
    /// Final bookkeeping before the task ends.
    pub fn shutdown(self) -> PagerEngine<Deactivated> {
        info!("Pager engine shut down: {}", self.settings.name);
        self.transition()
    }
}

/// Handle for managing a pager engine in a tokio task
///
/// Provides lifecycle management for engines running in background tasks:
/// task spawning, command submission, snapshot subscription, and graceful
/// shutdown. Dropping the handle also signals shutdown so the engine's
/// timers cannot outlive the owning view on any exit path.
#[derive(Debug)]
pub struct PagerHandle {
    pub name: String,

    command_sender: mpsc::Sender<PagerCommand>,

    snapshot_receiver: watch::Receiver<PagerSnapshot>,

    task_handle: Option<JoinHandle<()>>,

    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl PagerHandle {
    /// Builds the engine, spawns its task, and returns the handle.
    pub fn spawn(settings: PagerSettings) -> Result<Self, PagerError> {
        let name = settings.name.clone();
        let (command_sender, command_receiver) = mpsc::channel(100);
        let initial = PagerSnapshot {
            current_index: 0,
            item_count: settings.item_count,
            transitioning: false,
            paused: false,
        };
        let (snapshot_sender, snapshot_receiver) = watch::channel(initial);

        let engine =
            PagerEngine::create(settings, command_receiver, snapshot_sender).configure()?;
        let active_engine = engine.activate();

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let engine_name = name.clone();
        let task_handle = tokio::spawn(async move {
            info!("Spawning running pager engine: {}", engine_name);
            let deactivating = active_engine.run_until_shutdown(shutdown_rx).await;
            let _ = deactivating.shutdown();
        });

        info!("Pager engine activated: {}", name);
        Ok(Self {
            name,
            command_sender,
            snapshot_receiver,
            task_handle: Some(task_handle),
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Submits a command without blocking the UI thread.
    pub fn send(&self, command: PagerCommand) -> Result<(), PagerError> {
        self.command_sender
            .try_send(command)
            .map_err(|e| PagerError::ChannelError(format!("failed to send {:?}: {}", command, e)))
    }

    /// New subscription to the engine's published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<PagerSnapshot> {
        self.snapshot_receiver.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PagerSnapshot {
        self.snapshot_receiver.borrow().clone()
    }

    /// Gracefully shuts down the engine and waits for task completion
    pub async fn shutdown(&mut self) -> Result<(), PagerError> {
        debug!("Sending shutdown signal to pager: {}", self.name);

        if let Some(tx) = self.shutdown_tx.take() {
            if tx.send(()).is_err() {
                warn!("Pager task already terminated: {}", self.name);
            }
        }

        if let Some(handle) = self.task_handle.take() {
            match handle.await {
                Ok(()) => {
                    debug!("Pager task completed: {}", self.name);
                    Ok(())
                }
                Err(e) => {
                    error!("Pager task panicked: {} - {}", self.name, e);
                    Err(PagerError::TaskError(format!(
                        "pager task panicked: {}",
                        e
                    )))
                }
            }
        } else {
            debug!("Pager already shut down: {}", self.name);
            Ok(())
        }
    }
}

impl Drop for PagerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn commands_step_the_deck_and_settle() {
        let mut handle = PagerHandle::spawn(PagerSettings::new("movers-test", 2)).unwrap();
        let mut snapshots = handle.subscribe();

        handle.send(PagerCommand::GoTo(1)).unwrap();
        let snap = snapshots
            .wait_for(|s| s.current_index == 1)
            .await
            .unwrap()
            .clone();
        assert!(snap.transitioning);

        let snap = snapshots.wait_for(|s| !s.transitioning).await.unwrap().clone();
        assert_eq!(snap.current_index, 1);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn paused_auto_advance_holds_position() {
        let settings = PagerSettings::new("insights-test", 6)
            .with_auto_advance(Duration::from_millis(1000));
        let mut handle = PagerHandle::spawn(settings).unwrap();
        let mut snapshots = handle.subscribe();

        handle.send(PagerCommand::SetPaused(true)).unwrap();
        snapshots.wait_for(|s| s.paused).await.unwrap();

        // Five intervals of paused ticks leave the deck where it was.
        time::sleep(Duration::from_millis(5500)).await;
        assert_eq!(snapshots.borrow().current_index, 0);

        handle.send(PagerCommand::SetPaused(false)).unwrap();
        snapshots.wait_for(|s| s.current_index == 1).await.unwrap();

        // Exactly one step per tick: nothing else moves before the next
        // interval comes due.
        time::sleep(Duration::from_millis(300)).await;
        assert_eq!(snapshots.borrow().current_index, 1);

        handle.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn auto_advance_wraps_through_the_deck() {
        let settings =
            PagerSettings::new("wrap-test", 3).with_auto_advance(Duration::from_millis(1000));
        let mut handle = PagerHandle::spawn(settings).unwrap();
        let mut snapshots = handle.subscribe();

        for expected in [1, 2, 0, 1] {
            snapshots
                .wait_for(|s| s.current_index == expected && !s.transitioning)
                .await
                .unwrap();
        }

        handle.shutdown().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_mid_transition_publishes_nothing_further() {
        let mut handle = PagerHandle::spawn(PagerSettings::new("teardown-test", 3)).unwrap();
        let mut snapshots = handle.subscribe();

        handle.send(PagerCommand::Advance).unwrap();
        snapshots.wait_for(|s| s.transitioning).await.unwrap();

        handle.shutdown().await.unwrap();

        // The settle timer died with the task: the channel closed without
        // any further snapshot, and the last published state is intact.
        assert!(snapshots.has_changed().is_err());
        let snap = snapshots.borrow();
        assert_eq!(snap.current_index, 1);
        assert!(snap.transitioning);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_engine() {
        let handle = PagerHandle::spawn(PagerSettings::new("drop-test", 4)).unwrap();
        let mut snapshots = handle.subscribe();

        drop(handle);

        // Drop signals shutdown; once the task ends the sender side is
        // gone and the subscription reports closure.
        while snapshots.changed().await.is_ok() {}
    }

    #[tokio::test(start_paused = true)]
    async fn empty_deck_fails_to_spawn() {
        let result = PagerHandle::spawn(PagerSettings::new("empty-test", 0));
        assert!(matches!(result, Err(PagerError::EmptyDeck)));
    }
}
