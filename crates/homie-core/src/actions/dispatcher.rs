//! Cooldown-gated execution of registered actions.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use jiff::{SignedDuration, Timestamp};
use log::{info, warn};
use tokio::sync::Mutex;

use super::{
    clock::{Clock, SystemClock},
    registry::{ActionRegistry, DEFAULT_COOLDOWN_SECONDS},
    runner::{run_command, CommandError, OUTPUT_LIMIT},
};
use crate::{
    error::DispatchError,
    models::{ActionCatalog, ActionRun, ActionStatus},
};

/// Last-run timestamps per action id.
#[derive(Debug)]
pub struct CooldownState {
    window: SignedDuration,
    last_run: RwLock<HashMap<String, Timestamp>>,
}

impl CooldownState {
    pub fn new(window_seconds: u64) -> Self {
        Self {
            window: SignedDuration::from_secs(i64::try_from(window_seconds).unwrap_or(i64::MAX)),
            last_run: RwLock::new(HashMap::new()),
        }
    }

    pub fn window_seconds(&self) -> u64 {
        u64::try_from(self.window.as_secs()).unwrap_or(0)
    }

    pub fn last_run(&self, id: &str) -> Option<Timestamp> {
        self.last_run
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }

    /// Whole seconds until `id` may run again, rounded up; `0` when idle.
    pub fn seconds_left(&self, id: &str, now: Timestamp) -> u64 {
        let Some(last) = self.last_run(id) else {
            return 0;
        };
        let elapsed = now.duration_since(last);
        let remaining = self
            .window
            .checked_sub(elapsed)
            .unwrap_or(SignedDuration::ZERO)
            .min(self.window);
        if !remaining.is_positive() {
            return 0;
        }
        let whole = u64::try_from(remaining.as_secs()).unwrap_or(0);
        if remaining.subsec_nanos() > 0 {
            whole + 1
        } else {
            whole
        }
    }

    pub fn record(&self, id: &str, at: Timestamp) {
        self.last_run
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.to_string(), at);
    }
}

/// Runs registered actions, at most once per cooldown window each.
///
/// Each action id has its own async gate held from the cooldown check until
/// the new last-run time is recorded, so two concurrent dispatches of one id
/// cannot both execute. Different ids do not contend.
#[derive(Debug)]
pub struct ActionDispatcher {
    registry: ActionRegistry,
    cooldown: CooldownState,
    clock: Arc<dyn Clock>,
    gates: HashMap<String, Mutex<()>>,
}

impl ActionDispatcher {
    pub fn new(registry: ActionRegistry, cooldown_seconds: u64, clock: Arc<dyn Clock>) -> Self {
        let gates = registry
            .iter()
            .map(|a| (a.id.clone(), Mutex::new(())))
            .collect();
        Self {
            registry,
            cooldown: CooldownState::new(cooldown_seconds),
            clock,
            gates,
        }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn cooldown(&self) -> &CooldownState {
        &self.cooldown
    }

    /// Current cooldowns; does not wait for in-flight runs.
    pub fn catalog(&self) -> ActionCatalog {
        let now = self.clock.now();
        ActionCatalog {
            actions: self
                .registry
                .iter()
                .map(|a| ActionStatus {
                    id: a.id.clone(),
                    label: a.label.clone(),
                    cooldown_left_seconds: self.cooldown.seconds_left(&a.id, now),
                })
                .collect(),
            cooldown_seconds: self.cooldown.window_seconds(),
        }
    }

    /// Executes `id` if it is registered and not cooling down.
    ///
    /// Every execution attempt starts the cooldown, including runs that exit
    /// non-zero, time out, or whose executable is missing. A completed run is
    /// returned as `Ok` whatever its exit code; use [`ActionRun::failure`] to
    /// surface a non-zero exit.
    ///
    /// # Errors
    ///
    /// `ActionNotAllowed` and `CooldownActive` leave the state untouched.
    /// `ExecutionTimeout`, `ExecutableNotFound` and `Spawn` are reported after
    /// the cooldown has been recorded.
    pub async fn dispatch(&self, id: &str) -> Result<ActionRun, DispatchError> {
        let (Some(action), Some(gate)) = (self.registry.get(id), self.gates.get(id)) else {
            warn!("Rejected unknown action '{id}'");
            return Err(DispatchError::ActionNotAllowed {
                action: id.to_string(),
            });
        };
        let _guard = gate.lock().await;

        let seconds_left = self.cooldown.seconds_left(id, self.clock.now());
        if seconds_left > 0 {
            info!("Action '{id}' is cooling down ({seconds_left}s left)");
            return Err(DispatchError::CooldownActive {
                action: id.to_string(),
                seconds_left,
            });
        }

        info!("Running action '{id}': {}", action.command.join(" "));
        let result = run_command(
            &action.command,
            Duration::from_secs(action.timeout_seconds),
            OUTPUT_LIMIT,
        )
        .await;
        let ran_at = self.clock.now();
        self.cooldown.record(id, ran_at);

        match result {
            Ok(output) => {
                info!("Action '{id}' exited with {}", output.exit_code);
                Ok(ActionRun {
                    action: action.id.clone(),
                    label: action.label.clone(),
                    exit_code: output.exit_code,
                    stdout: output.stdout,
                    stderr: output.stderr,
                    ran_at,
                })
            }
            Err(CommandError::Timeout) => {
                warn!("Action '{id}' timed out after {}s", action.timeout_seconds);
                Err(DispatchError::ExecutionTimeout {
                    action: action.id.clone(),
                    timeout_seconds: action.timeout_seconds,
                })
            }
            Err(CommandError::NotFound { program }) => {
                warn!("Action '{id}' executable not found: {program}");
                Err(DispatchError::ExecutableNotFound {
                    action: action.id.clone(),
                    program,
                })
            }
            Err(CommandError::Empty) => Err(DispatchError::ExecutableNotFound {
                action: action.id.clone(),
                program: String::new(),
            }),
            Err(CommandError::Io(e)) => {
                warn!("Action '{id}' failed to run: {e}");
                Err(DispatchError::Spawn {
                    action: action.id.clone(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl Default for ActionDispatcher {
    fn default() -> Self {
        Self::new(
            ActionRegistry::builtin(),
            DEFAULT_COOLDOWN_SECONDS,
            Arc::new(SystemClock),
        )
    }
}
