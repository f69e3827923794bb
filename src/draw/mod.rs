//! Deterministic draw module
//!
//! All draw logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Side effects reach the outside world only through the injected
//!   store and the UI hooks

pub mod engine;
pub mod history;
pub mod hooks;
pub mod registry;
pub mod state;
pub mod store;

pub use engine::{DrawEngine, DrawPhase, StartOutcome};
pub use history::{History, HistoryRecord};
pub use hooks::{NoopHooks, Severity, StateChange, UiHooks};
pub use registry::Registry;
pub use state::AppState;
pub use store::StateStore;
