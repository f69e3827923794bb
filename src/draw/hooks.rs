//! UI collaborator hooks
//!
//! The core never touches the DOM. Rendering, toast notifications, the
//! clear-confirmation prompt, and the settlement sound all sit behind
//! this trait; any UI layer implements the pieces it cares about.

/// Notification severity, mapped to toast styling by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// What part of the observable state changed, carrying the data a
/// renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange<'a> {
    /// Entry list contents changed
    Entries(&'a [String]),
    /// History contents changed (newest first)
    History(&'a [super::history::HistoryRecord]),
    /// A draw began; the draw control should be disabled
    DrawStarted,
    /// Transient animation pick to display
    Showing(&'a str),
    /// Final selection to display
    Result(&'a str),
    /// Settlement finished; the draw control should be re-enabled
    DrawReady,
}

/// Callbacks the core invokes as it mutates state.
///
/// Defaults are no-ops (and `confirm` accepts), so headless callers such
/// as tests can implement only what they observe.
pub trait UiHooks {
    /// Called after any observable state change
    fn state_changed(&mut self, change: StateChange<'_>) {
        let _ = change;
    }

    /// Transient user-facing message
    fn notify(&mut self, message: &str, severity: Severity) {
        let _ = (message, severity);
    }

    /// External confirmation step before a destructive clear
    fn confirm(&mut self, prompt: &str) -> bool {
        let _ = prompt;
        true
    }

    /// Best-effort celebration cue at settlement; failure to produce
    /// sound must never interrupt the draw
    fn play_cue(&mut self) {}
}

/// Hooks implementation that ignores everything
#[derive(Debug, Default)]
pub struct NoopHooks;

impl UiHooks for NoopHooks {}
