//! Markdown formatting for boards, actions and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! outcomes that combine a model with context use small wrapper types. All
//! output is markdown so the CLI renderer and MCP clients show the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │   Formatted     │
//! │ (Board, Action) │───▶│  & Status Text  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use homie_core::display::OperationStatus;
//!
//! let status = OperationStatus::failure("Action 'rm_rf' is not allowed".to_string());
//! assert!(status.to_string().starts_with("Error:"));
//! ```
//!
//! - [`models`]: Display implementations for domain models
//! - [`results`]: Toggle outcome wrapper
//! - [`status`]: Success and failure messages
//! - [`datetime`]: Local time formatting

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use results::ToggleResult;
pub use status::OperationStatus;
