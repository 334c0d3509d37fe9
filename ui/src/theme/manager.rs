use crate::storage::SecureStorage;
use crate::theme::types::{
    THEME_STORAGE_KEY, ThemeId, ThemeOption, ThemeState, ThemeTiming, TransitionPhase,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

/// Bookkeeping for the staged commit currently in flight
#[derive(Debug, Default)]
struct Transition {
    phase: TransitionPhase,
    cancel: Option<CancellationToken>,
    /// Bumped on every preemption so a stale task never touches state
    generation: u64,
}

struct Inner {
    state: watch::Sender<ThemeState>,
    transition: Mutex<Transition>,
    storage: SecureStorage,
    timing: ThemeTiming,
}

impl Inner {
    fn lock_transition(&self) -> MutexGuard<'_, Transition> {
        self.transition.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Owner of the active theme.
///
/// Cheap to clone; every clone drives the same state. A change requested via
/// [`set_theme`](Self::set_theme) raises the `transitioning` flag at once,
/// commits and persists the new theme after the commit delay and drops the
/// flag after the settle delay.
///
/// Overlapping requests preempt each other: the latest target wins, and the
/// sequence it replaces never commits.
#[derive(Clone)]
pub struct ThemeManager {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeManager")
            .field("state", &self.state())
            .field("phase", &self.phase())
            .field("timing", &self.inner.timing)
            .finish()
    }
}

impl ThemeManager {
    /// Create the manager, restoring a previously persisted theme.
    ///
    /// A stored value outside the supported set is ignored and the default
    /// theme stands. Restoring never writes to storage and never raises the
    /// transition flag.
    pub fn new(storage: SecureStorage, timing: ThemeTiming) -> Self {
        let current = Self::restore(&storage).unwrap_or_default();
        let (state, _) = watch::channel(ThemeState {
            current,
            transitioning: false,
        });

        log::debug!("Theme manager starting with {current}");

        Self {
            inner: Arc::new(Inner {
                state,
                transition: Mutex::new(Transition::default()),
                storage,
                timing,
            }),
        }
    }

    fn restore(storage: &SecureStorage) -> Option<ThemeId> {
        let raw = storage.get_item(THEME_STORAGE_KEY)?;
        match raw.parse::<ThemeId>() {
            Ok(id) => {
                log::info!("Restored persisted theme {id}");
                Some(id)
            }
            Err(e) => {
                log::debug!("Ignoring persisted theme value: {e}");
                None
            }
        }
    }

    pub fn current(&self) -> ThemeId {
        self.inner.state.borrow().current
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.state.borrow().transitioning
    }

    pub fn state(&self) -> ThemeState {
        *self.inner.state.borrow()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner.lock_transition().phase
    }

    pub fn timing(&self) -> ThemeTiming {
        self.inner.timing
    }

    /// Receive every state change from now on
    pub fn subscribe(&self) -> watch::Receiver<ThemeState> {
        self.inner.state.subscribe()
    }

    /// Entries for the theme selector, in display order
    pub fn available_themes(&self) -> Vec<ThemeOption> {
        ThemeId::ALL.iter().map(|id| (*id, id.label())).collect()
    }

    /// Request a theme change.
    ///
    /// Asking for the theme that is already active (or already on its way in)
    /// does nothing. Must be called from within a Tokio runtime, since the
    /// staged commit runs as a spawned task.
    pub fn set_theme(&self, next: ThemeId) {
        let mut transition = self.inner.lock_transition();
        let current = self.current();
        let effective = match transition.phase {
            TransitionPhase::Committing { target } => target,
            _ => current,
        };

        if next == effective {
            log::debug!("Theme {next} already selected, nothing to do");
            return;
        }

        if let Some(token) = transition.cancel.take() {
            log::debug!("Preempting in-flight theme transition");
            token.cancel();
        }
        transition.generation += 1;

        if next == current {
            // The pending target was abandoned before it committed
            transition.phase = TransitionPhase::Idle;
            self.inner
                .state
                .send_modify(|state| state.transitioning = false);
            return;
        }

        let token = CancellationToken::new();
        transition.phase = TransitionPhase::Committing { target: next };
        transition.cancel = Some(token.clone());
        let generation = transition.generation;
        let commit_at = Instant::now() + self.inner.timing.commit_delay;
        self.inner
            .state
            .send_modify(|state| state.transitioning = true);
        drop(transition);

        log::info!("Switching theme from {current} to {next}");
        tokio::spawn(run_transition(
            Arc::clone(&self.inner),
            next,
            commit_at,
            generation,
            token,
        ));
    }

    /// Wait until no transition is in flight
    pub async fn wait_idle(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close here
        let _ = rx.wait_for(|state| !state.transitioning).await;
    }
}

async fn run_transition(
    inner: Arc<Inner>,
    next: ThemeId,
    commit_at: Instant,
    generation: u64,
    token: CancellationToken,
) {
    tokio::select! {
        _ = token.cancelled() => return,
        _ = sleep_until(commit_at) => {}
    }

    {
        let mut transition = inner.lock_transition();
        if transition.generation != generation {
            return;
        }
        inner.state.send_modify(|state| state.current = next);
        transition.phase = TransitionPhase::Settling;
    }
    // Outside the lock: the backend may do blocking file I/O
    inner.storage.set_item(THEME_STORAGE_KEY, next.as_str());
    log::debug!("Committed theme {next}");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = sleep_until(commit_at + inner.timing.settle_delay) => {}
    }

    let mut transition = inner.lock_transition();
    if transition.generation != generation {
        return;
    }
    transition.phase = TransitionPhase::Idle;
    transition.cancel = None;
    inner
        .state
        .send_modify(|state| state.transitioning = false);
}
