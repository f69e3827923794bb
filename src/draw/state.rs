//! Application state
//!
//! The single explicit state struct: entry registry, draw history, draw
//! engine, seeded RNG, and the injected store. Every mutation follows
//! the same control flow: mutate, request a save, request renders and
//! notifications through the hooks. Saves are best-effort; a failure is
//! logged and the widget keeps running in memory.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::draw::engine::{DrawEngine, DrawPhase, StartOutcome};
use crate::draw::history::History;
use crate::draw::hooks::{Severity, StateChange, UiHooks};
use crate::draw::registry::Registry;
use crate::draw::store::StateStore;
use crate::error::{DrawError, DrawResult};

/// Complete widget state
pub struct AppState<S> {
    /// Candidate entries
    pub registry: Registry,
    /// Past draw outcomes, newest first
    pub history: History,
    engine: DrawEngine,
    rng: Pcg32,
    store: S,
}

impl<S: StateStore> AppState<S> {
    /// Build the state from whatever the store has, falling back to
    /// empty for keys that are absent or unreadable.
    pub fn load(store: S, seed: u64) -> Self {
        let (entries, records) = store.load();
        let registry = entries.map(Registry::from_entries).unwrap_or_default();
        let history = records.map(History::from_records).unwrap_or_default();
        log::info!(
            "Loaded {} entries, {} history records",
            registry.len(),
            history.len()
        );
        Self {
            registry,
            history,
            engine: DrawEngine::new(),
            rng: Pcg32::seed_from_u64(seed),
            store,
        }
    }

    /// Current draw lifecycle phase
    pub fn phase(&self) -> DrawPhase {
        self.engine.phase()
    }

    /// The injected store (mainly for inspection in tests)
    pub fn store(&self) -> &S {
        &self.store
    }

    fn save(&mut self) {
        if let Err(e) = self
            .store
            .save(self.registry.entries(), self.history.records())
        {
            log::warn!("Save failed, continuing in memory: {e}");
        }
    }

    /// Add an entry to the registry
    pub fn add_entry(&mut self, text: &str, hooks: &mut dyn UiHooks) -> DrawResult<()> {
        match self.registry.add(text) {
            Ok(added) => {
                self.save();
                hooks.state_changed(StateChange::Entries(self.registry.entries()));
                hooks.notify(&format!("Added entry: {added}"), Severity::Success);
                Ok(())
            }
            Err(e) => {
                let msg = match &e {
                    DrawError::EmptyInput => "Enter an entry first!",
                    DrawError::DuplicateEntry(_) => "That entry already exists!",
                    _ => "Could not add entry",
                };
                hooks.notify(msg, Severity::Warning);
                Err(e)
            }
        }
    }

    /// Remove the entry at `index`
    pub fn remove_entry(&mut self, index: usize, hooks: &mut dyn UiHooks) -> DrawResult<()> {
        match self.registry.remove_at(index) {
            Ok(removed) => {
                self.save();
                hooks.state_changed(StateChange::Entries(self.registry.entries()));
                hooks.notify(&format!("Removed entry: {removed}"), Severity::Info);
                Ok(())
            }
            Err(e) => {
                hooks.notify("No such entry", Severity::Warning);
                Err(e)
            }
        }
    }

    /// Remove every entry, after an external confirmation.
    ///
    /// Declining the confirmation is a silent no-op.
    pub fn clear_entries(&mut self, hooks: &mut dyn UiHooks) -> DrawResult<()> {
        if self.registry.is_empty() {
            hooks.notify("No entries to clear!", Severity::Warning);
            return Err(DrawError::NothingToClear);
        }
        if !hooks.confirm("Clear all entries?") {
            return Ok(());
        }
        self.registry.clear()?;
        self.save();
        hooks.state_changed(StateChange::Entries(self.registry.entries()));
        hooks.notify("All entries cleared!", Severity::Success);
        Ok(())
    }

    /// Remove every history record, after an external confirmation.
    pub fn clear_history(&mut self, hooks: &mut dyn UiHooks) -> DrawResult<()> {
        if self.history.is_empty() {
            hooks.notify("No history to clear!", Severity::Warning);
            return Err(DrawError::NothingToClear);
        }
        if !hooks.confirm("Clear all draw history?") {
            return Ok(());
        }
        self.history.clear()?;
        self.save();
        hooks.state_changed(StateChange::History(self.history.records()));
        hooks.notify("History cleared!", Severity::Success);
        Ok(())
    }

    /// Begin a draw.
    ///
    /// Errors with `EmptyRegistry` when there are no entries. A request
    /// while a draw is already animating is silently ignored.
    pub fn start_draw(&mut self, hooks: &mut dyn UiHooks) -> DrawResult<StartOutcome> {
        match self.engine.start(self.registry.len()) {
            Ok(StartOutcome::Started) => {
                hooks.state_changed(StateChange::DrawStarted);
                Ok(StartOutcome::Started)
            }
            Ok(StartOutcome::AlreadyAnimating) => Ok(StartOutcome::AlreadyAnimating),
            Err(e) => {
                hooks.notify("Add some entries first!", Severity::Warning);
                Err(e)
            }
        }
    }

    /// Advance the animation by one scheduler tick, pushing the
    /// transient pick to the UI.
    ///
    /// Returns true once the transient sequence is exhausted and the
    /// draw is ready to settle. Idle ticks return false and do nothing.
    pub fn animation_tick(&mut self, hooks: &mut dyn UiHooks) -> bool {
        let len = self.registry.len();
        if let Some(idx) = self.engine.next_pick(len, &mut self.rng) {
            if let Some(text) = self.registry.get(idx) {
                hooks.state_changed(StateChange::Showing(text));
            }
        }
        self.engine.is_exhausted()
    }

    /// Settle an exhausted draw: final selection, history record, save,
    /// renders, and the best-effort celebration cue.
    ///
    /// `timestamp` is the locale-formatted settlement time supplied by
    /// the caller (the core has no clock). Returns the selected entry,
    /// or `None` when no exhausted session is pending.
    pub fn settle_draw(&mut self, timestamp: String, hooks: &mut dyn UiHooks) -> Option<String> {
        let len = self.registry.len();
        let idx = self.engine.settle(len, &mut self.rng)?;
        let selected = self.registry.get(idx)?.to_string();

        self.history.record(selected.clone(), timestamp);
        self.save();
        hooks.state_changed(StateChange::History(self.history.records()));
        hooks.state_changed(StateChange::Result(&selected));
        hooks.state_changed(StateChange::DrawReady);
        hooks.notify(&format!("Draw complete: {selected}"), Severity::Success);
        hooks.play_cue();
        log::info!("Draw settled on {selected:?}");
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DRAW_TICKS, HISTORY_CAP};
    use crate::draw::history::HistoryRecord;
    use crate::storage::MemoryStore;

    /// Hooks that record every callback for assertions
    #[derive(Default)]
    struct RecordingHooks {
        events: Vec<String>,
        accept_confirm: bool,
        cues: u32,
    }

    impl RecordingHooks {
        fn accepting() -> Self {
            Self {
                accept_confirm: true,
                ..Default::default()
            }
        }
    }

    impl UiHooks for RecordingHooks {
        fn state_changed(&mut self, change: StateChange<'_>) {
            let label = match change {
                StateChange::Entries(_) => "Entries".to_string(),
                StateChange::History(_) => "History".to_string(),
                StateChange::DrawStarted => "DrawStarted".to_string(),
                StateChange::Showing(s) => format!("Showing({s})"),
                StateChange::Result(s) => format!("Result({s})"),
                StateChange::DrawReady => "DrawReady".to_string(),
            };
            self.events.push(label);
        }

        fn notify(&mut self, message: &str, severity: Severity) {
            self.events.push(format!("notify[{severity:?}] {message}"));
        }

        fn confirm(&mut self, _prompt: &str) -> bool {
            self.accept_confirm
        }

        fn play_cue(&mut self) {
            self.cues += 1;
        }
    }

    /// Store whose saves always fail
    struct BrokenStore;

    impl StateStore for BrokenStore {
        fn load(&self) -> (Option<Vec<String>>, Option<Vec<HistoryRecord>>) {
            (None, None)
        }

        fn save(&mut self, _: &[String], _: &[HistoryRecord]) -> DrawResult<()> {
            Err(DrawError::Storage("quota exceeded".into()))
        }
    }

    fn seeded_state(entries: &[&str]) -> AppState<MemoryStore> {
        let mut state = AppState::load(MemoryStore::default(), 42);
        let mut hooks = RecordingHooks::default();
        for e in entries {
            state.add_entry(e, &mut hooks).unwrap();
        }
        state
    }

    /// Run one complete draw to settlement, returning the selection
    fn run_draw(state: &mut AppState<MemoryStore>, hooks: &mut RecordingHooks) -> String {
        state.start_draw(hooks).unwrap();
        let mut ticks = 0;
        while !state.animation_tick(hooks) {
            ticks += 1;
            assert!(ticks <= DRAW_TICKS, "animation never exhausted");
        }
        state.settle_draw("test-time".into(), hooks).unwrap()
    }

    #[test]
    fn test_add_saves_and_notifies() {
        let mut state = AppState::load(MemoryStore::default(), 1);
        let mut hooks = RecordingHooks::default();
        state.add_entry("  Prize A ", &mut hooks).unwrap();

        assert_eq!(state.registry.entries(), ["Prize A"]);
        assert_eq!(state.store().saved_entries().unwrap().as_slice(), ["Prize A"]);
        assert_eq!(
            hooks.events,
            ["Entries", "notify[Success] Added entry: Prize A"]
        );
    }

    #[test]
    fn test_add_duplicate_leaves_everything_unchanged() {
        let mut state = seeded_state(&["A", "B", "C"]);
        let mut hooks = RecordingHooks::default();
        assert_eq!(
            state.add_entry("A", &mut hooks),
            Err(DrawError::DuplicateEntry("A".into()))
        );
        assert_eq!(state.registry.entries(), ["A", "B", "C"]);
        assert_eq!(hooks.events, ["notify[Warning] That entry already exists!"]);
    }

    #[test]
    fn test_remove_entry() {
        let mut state = seeded_state(&["A", "B", "C"]);
        let mut hooks = RecordingHooks::default();
        state.remove_entry(1, &mut hooks).unwrap();
        assert_eq!(state.registry.entries(), ["A", "C"]);
        assert_eq!(state.store().saved_entries().unwrap().as_slice(), ["A", "C"]);
    }

    #[test]
    fn test_clear_entries_declined_confirmation() {
        let mut state = seeded_state(&["A", "B"]);
        let mut hooks = RecordingHooks::default(); // confirm() returns false
        assert_eq!(state.clear_entries(&mut hooks), Ok(()));
        assert_eq!(state.registry.len(), 2);
        assert!(hooks.events.is_empty());
    }

    #[test]
    fn test_clear_entries_accepted() {
        let mut state = seeded_state(&["A", "B"]);
        let mut hooks = RecordingHooks::accepting();
        state.clear_entries(&mut hooks).unwrap();
        assert!(state.registry.is_empty());
        assert!(state.store().saved_entries().unwrap().is_empty());
    }

    #[test]
    fn test_clear_entries_when_empty() {
        let mut state = AppState::load(MemoryStore::default(), 1);
        let mut hooks = RecordingHooks::accepting();
        assert_eq!(
            state.clear_entries(&mut hooks),
            Err(DrawError::NothingToClear)
        );
        assert_eq!(hooks.events, ["notify[Warning] No entries to clear!"]);
    }

    #[test]
    fn test_start_draw_empty_registry() {
        let mut state = AppState::load(MemoryStore::default(), 1);
        let mut hooks = RecordingHooks::default();
        assert_eq!(state.start_draw(&mut hooks), Err(DrawError::EmptyRegistry));
        assert_eq!(state.phase(), DrawPhase::Idle);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_start_draw_while_animating_is_silent_noop() {
        let mut state = seeded_state(&["A", "B"]);
        let mut hooks = RecordingHooks::default();
        state.start_draw(&mut hooks).unwrap();
        state.animation_tick(&mut hooks);

        let before = hooks.events.len();
        assert_eq!(
            state.start_draw(&mut hooks),
            Ok(StartOutcome::AlreadyAnimating)
        );
        assert_eq!(hooks.events.len(), before);

        // Pending session unaffected: it still settles after the full
        // sequence.
        while !state.animation_tick(&mut hooks) {}
        assert!(state.settle_draw("t".into(), &mut hooks).is_some());
    }

    #[test]
    fn test_full_draw_records_history() {
        let mut state = seeded_state(&["A", "B", "C"]);
        let mut hooks = RecordingHooks::default();
        let selected = run_draw(&mut state, &mut hooks);

        assert!(["A", "B", "C"].contains(&selected.as_str()));
        assert_eq!(state.registry.entries(), ["A", "B", "C"]);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.latest().unwrap().item, selected);
        assert_eq!(state.history.latest().unwrap().time, "test-time");
        assert_eq!(state.phase(), DrawPhase::Idle);
        assert_eq!(hooks.cues, 1);

        // Exactly DRAW_TICKS transient picks reached the UI
        let showing = hooks
            .events
            .iter()
            .filter(|e| e.starts_with("Showing"))
            .count();
        assert_eq!(showing as u32, DRAW_TICKS);

        // Settlement side effects in order: history render, result
        // render, control re-enable, success toast.
        let tail: Vec<_> = hooks.events[hooks.events.len() - 4..].to_vec();
        assert_eq!(tail[0], "History");
        assert_eq!(tail[1], format!("Result({selected})"));
        assert_eq!(tail[2], "DrawReady");
        assert_eq!(tail[3], format!("notify[Success] Draw complete: {selected}"));
    }

    #[test]
    fn test_single_entry_draw_always_selects_it() {
        let mut state = seeded_state(&["X"]);
        let mut hooks = RecordingHooks::default();
        let selected = run_draw(&mut state, &mut hooks);
        assert_eq!(selected, "X");
        assert_eq!(state.history.latest().unwrap().item, "X");
        assert_eq!(state.registry.entries(), ["X"]);
    }

    #[test]
    fn test_history_capped_across_many_draws() {
        let mut state = seeded_state(&["A", "B", "C"]);
        let mut hooks = RecordingHooks::default();
        let mut selections = Vec::new();
        for _ in 0..55 {
            selections.push(run_draw(&mut state, &mut hooks));
        }
        assert_eq!(state.history.len(), HISTORY_CAP);

        // The 50 most recent selections, newest first
        selections.reverse();
        for (record, expected) in state.history.records().iter().zip(&selections) {
            assert_eq!(&record.item, expected);
        }
        assert_eq!(
            state.store().saved_history().unwrap().len(),
            HISTORY_CAP
        );
    }

    #[test]
    fn test_settle_without_pending_draw() {
        let mut state = seeded_state(&["A"]);
        let mut hooks = RecordingHooks::default();
        assert_eq!(state.settle_draw("t".into(), &mut hooks), None);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_broken_store_degrades_to_memory_only() {
        let mut state = AppState::load(BrokenStore, 7);
        let mut hooks = RecordingHooks::default();

        // Mutations stick even though every save fails
        state.add_entry("A", &mut hooks).unwrap();
        assert_eq!(state.registry.entries(), ["A"]);

        let selected = {
            state.start_draw(&mut hooks).unwrap();
            while !state.animation_tick(&mut hooks) {}
            state.settle_draw("t".into(), &mut hooks).unwrap()
        };
        assert_eq!(selected, "A");
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_load_restores_persisted_state() {
        let mut store = MemoryStore::default();
        store
            .save(
                &["A".into(), "B".into()],
                &[HistoryRecord {
                    item: "A".into(),
                    time: "earlier".into(),
                }],
            )
            .unwrap();

        let state = AppState::load(store, 1);
        assert_eq!(state.registry.entries(), ["A", "B"]);
        assert_eq!(state.history.latest().unwrap().item, "A");
    }
}
