//! Lucky Draw - a browser-based raffle widget
//!
//! Core modules:
//! - `draw`: Deterministic draw logic (entry registry, draw engine, history)
//! - `storage`: Key-value persistence adapters (LocalStorage on web)
//! - `theme`: Light/dark theme preference
//! - `audio`: Web Audio celebration chirp

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod draw;
pub mod error;
pub mod storage;
pub mod theme;

pub use draw::{AppState, DrawPhase, History, HistoryRecord, Registry, Severity, UiHooks};
pub use error::{DrawError, DrawResult};
pub use theme::Theme;

/// Widget configuration constants
pub mod consts {
    /// Number of transient animation picks shown before settlement
    pub const DRAW_TICKS: u32 = 21;
    /// Animation cadence in milliseconds
    pub const TICK_INTERVAL_MS: i32 = 100;

    /// Maximum number of history records to keep (oldest discarded)
    pub const HISTORY_CAP: usize = 50;

    /// How long a toast stays on screen before sliding out
    pub const TOAST_DURATION_MS: i32 = 3000;
    /// Toast slide in/out transition time
    pub const TOAST_SLIDE_MS: i32 = 300;
}
