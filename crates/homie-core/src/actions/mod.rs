//! Whitelisted maintenance actions.
//!
//! - [`registry`]: the ordered table of allowed actions
//! - [`dispatcher`]: per-action cooldown gate around execution
//! - [`runner`]: subprocess execution with timeout and tail-truncated output
//! - [`clock`]: injectable time source

pub mod clock;
pub mod dispatcher;
pub mod registry;
pub mod runner;

pub use clock::{Clock, ManualClock, SystemClock};
pub use dispatcher::{ActionDispatcher, CooldownState};
pub use registry::{ActionRegistry, DEFAULT_COOLDOWN_SECONDS};
