//! Draw lifecycle state machine
//!
//! Idle -> Animating -> (settle) -> Idle. While Animating the engine
//! yields a finite, non-restartable sequence of transient display picks;
//! the cadence they are consumed at is the scheduler's business, never
//! the engine's. The final selection is drawn independently of the
//! transient picks.
//!
//! Precondition: the registry must not shrink while a session is
//! animating. Picks are uniform over the index range captured at each
//! call.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::DRAW_TICKS;
use crate::error::{DrawError, DrawResult};

/// Current phase of the draw lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawPhase {
    /// No draw in flight; a new one may start
    #[default]
    Idle,
    /// Transient picks are being produced
    Animating,
}

/// Outcome of a start request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A fresh draw session began
    Started,
    /// A session is already animating; the request was ignored
    AlreadyAnimating,
}

/// Ephemeral per-draw session, created on start and discarded at
/// settlement
#[derive(Debug, Clone)]
struct DrawSession {
    /// Transient picks still to produce before settlement
    remaining: u32,
}

/// The draw state machine
#[derive(Debug, Clone, Default)]
pub struct DrawEngine {
    session: Option<DrawSession>,
}

impl DrawEngine {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn phase(&self) -> DrawPhase {
        if self.session.is_some() {
            DrawPhase::Animating
        } else {
            DrawPhase::Idle
        }
    }

    /// Begin a draw session over `len` entries.
    ///
    /// Errors with `EmptyRegistry` when there is nothing to pick from
    /// (no transition occurs). A request while a session is animating
    /// is reported, not an error; at most one session runs at a time.
    pub fn start(&mut self, len: usize) -> DrawResult<StartOutcome> {
        if len == 0 {
            return Err(DrawError::EmptyRegistry);
        }
        if self.session.is_some() {
            return Ok(StartOutcome::AlreadyAnimating);
        }
        self.session = Some(DrawSession {
            remaining: DRAW_TICKS,
        });
        Ok(StartOutcome::Started)
    }

    /// Produce the next transient pick: a uniform index in `0..len`,
    /// drawn with replacement.
    ///
    /// Returns `None` once the sequence is exhausted, or when no session
    /// is running. The sequence cannot be restarted mid-session.
    pub fn next_pick(&mut self, len: usize, rng: &mut Pcg32) -> Option<usize> {
        let session = self.session.as_mut()?;
        if session.remaining == 0 || len == 0 {
            return None;
        }
        session.remaining -= 1;
        Some(rng.random_range(0..len))
    }

    /// True once the animating session has produced every transient pick
    pub fn is_exhausted(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.remaining == 0)
    }

    /// Settle the draw: one final uniform pick, independent of the
    /// transient sequence, and the engine returns to Idle.
    ///
    /// Returns `None` unless the session has exhausted its animation.
    pub fn settle(&mut self, len: usize, rng: &mut Pcg32) -> Option<usize> {
        if !self.is_exhausted() {
            return None;
        }
        self.session = None;
        if len == 0 {
            return None;
        }
        Some(rng.random_range(0..len))
    }
}
