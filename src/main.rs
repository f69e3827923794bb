//! Lucky Draw entry point
//!
//! Wires the core to the page: entry/history lists, the draw button and
//! its animation interval, toast notifications, keyboard shortcuts, and
//! the theme toggle.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlElement, HtmlInputElement, KeyboardEvent,
                  MouseEvent};

    use lucky_draw::audio::{AudioManager, SoundEffect};
    use lucky_draw::consts::*;
    use lucky_draw::draw::{
        AppState, HistoryRecord, NoopHooks, Severity, StartOutcome, StateChange, UiHooks,
    };
    use lucky_draw::storage::LocalStore;
    use lucky_draw::theme::Theme;

    /// Entries seeded on a fresh install
    const DEFAULT_ENTRIES: [&str; 10] = [
        "iPhone 15 Pro",
        "MacBook Air",
        "AirPods Pro",
        "iPad Air",
        "Apple Watch",
        "$1000 cash",
        "$500 cash",
        "$200 cash",
        "Thanks for playing",
        "Try again",
    ];

    /// Widget instance holding all state
    struct App {
        state: AppState<LocalStore>,
        theme: Theme,
        /// Handle of the running animation interval, if a draw is live
        interval: Option<i32>,
    }

    type SharedApp = Rc<RefCell<App>>;

    fn document() -> Option<Document> {
        web_sys::window().and_then(|w| w.document())
    }

    fn now_locale_string() -> String {
        js_sys::Date::new_0()
            .to_locale_string("en-US", &JsValue::UNDEFINED)
            .into()
    }

    /// Fire-and-forget timeout
    fn set_timeout(ms: i32, f: impl FnMut() + 'static) {
        let closure = Closure::<dyn FnMut()>::new(f);
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            );
        }
        closure.forget();
    }

    /// Transient toast in the page corner, styled by severity
    fn show_toast(message: &str, severity: Severity) {
        let Some(document) = document() else { return };
        let Ok(div) = document.create_element("div") else {
            return;
        };
        let class = match severity {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        };
        let _ = div.set_attribute("class", &format!("message message-{class}"));
        div.set_text_content(Some(message));

        let Ok(el) = div.dyn_into::<HtmlElement>() else {
            return;
        };
        let style = el.style();
        for (prop, value) in [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("padding", "15px 20px"),
            ("border-radius", "8px"),
            ("color", "white"),
            ("font-weight", "600"),
            ("z-index", "1000"),
            ("transform", "translateX(100%)"),
            ("transition", "transform 0.3s ease"),
            ("max-width", "300px"),
            ("word-wrap", "break-word"),
        ] {
            let _ = style.set_property(prop, value);
        }
        let background = match severity {
            Severity::Success => "#48bb78",
            Severity::Warning => "#ed8936",
            Severity::Error => "#e53e3e",
            Severity::Info => "#4299e1",
        };
        let _ = style.set_property("background-color", background);

        if let Some(body) = document.body() {
            let _ = body.append_child(&el);
        }

        // Slide in, linger, slide out, remove
        {
            let el = el.clone();
            set_timeout(100, move || {
                let _ = el.style().set_property("transform", "translateX(0)");
            });
        }
        set_timeout(TOAST_DURATION_MS, move || {
            let _ = el.style().set_property("transform", "translateX(100%)");
            let el = el.clone();
            set_timeout(TOAST_SLIDE_MS, move || el.remove());
        });
    }

    fn set_result_text(text: &str) {
        if let Some(document) = document() {
            if let Some(el) = document.get_element_by_id("resultText") {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_draw_button(enabled: bool, caption: &str) {
        let Some(document) = document() else { return };
        let Some(btn) = document
            .get_element_by_id("drawBtn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        btn.set_disabled(!enabled);
        btn.set_text_content(Some(caption));
    }

    fn apply_theme(theme: Theme) {
        let Some(document) = document() else { return };
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        if let Some(btn) = document.get_element_by_id("themeToggle") {
            btn.set_text_content(Some(theme.toggle_label()));
        }
        theme.save();
    }

    /// DOM-backed implementation of the core's UI hooks
    struct DomHooks {
        app: SharedApp,
        audio: Rc<AudioManager>,
    }

    impl DomHooks {
        fn new(app: SharedApp, audio: Rc<AudioManager>) -> Self {
            Self { app, audio }
        }

        fn render_entries(&self, entries: &[String]) {
            let Some(document) = document() else { return };
            let Some(list) = document.get_element_by_id("itemsList") else {
                return;
            };
            list.set_inner_html("");

            if entries.is_empty() {
                if let Ok(li) = document.create_element("li") {
                    let _ = li.set_attribute("class", "empty");
                    li.set_text_content(Some("No entries yet"));
                    let _ = list.append_child(&li);
                }
                return;
            }

            for (index, entry) in entries.iter().enumerate() {
                let Ok(li) = document.create_element("li") else {
                    continue;
                };
                if let Ok(span) = document.create_element("span") {
                    span.set_text_content(Some(entry));
                    let _ = li.append_child(&span);
                }
                if let Ok(btn) = document.create_element("button") {
                    let _ = btn.set_attribute("class", "remove-item");
                    btn.set_text_content(Some("Delete"));

                    let app = self.app.clone();
                    let audio = self.audio.clone();
                    let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                        let mut hooks = DomHooks::new(app.clone(), audio.clone());
                        let _ = app.borrow_mut().state.remove_entry(index, &mut hooks);
                    });
                    let _ = btn
                        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                    closure.forget();

                    let _ = li.append_child(&btn);
                }
                let _ = list.append_child(&li);
            }
        }

        fn render_history(&self, records: &[HistoryRecord]) {
            let Some(document) = document() else { return };
            let Some(list) = document.get_element_by_id("historyList") else {
                return;
            };
            list.set_inner_html("");

            if records.is_empty() {
                if let Ok(li) = document.create_element("li") {
                    let _ = li.set_attribute("class", "empty");
                    li.set_text_content(Some("No records yet"));
                    let _ = list.append_child(&li);
                }
                return;
            }

            for record in records {
                let Ok(li) = document.create_element("li") else {
                    continue;
                };
                if let Ok(span) = document.create_element("span") {
                    span.set_text_content(Some(&record.item));
                    let _ = li.append_child(&span);
                }
                if let Ok(small) = document.create_element("small") {
                    small.set_text_content(Some(&record.time));
                    let _ = li.append_child(&small);
                }
                let _ = list.append_child(&li);
            }
        }
    }

    impl UiHooks for DomHooks {
        fn state_changed(&mut self, change: StateChange<'_>) {
            match change {
                StateChange::Entries(entries) => self.render_entries(entries),
                StateChange::History(records) => self.render_history(records),
                StateChange::DrawStarted => {
                    set_draw_button(false, "\u{1F3B2} Drawing...");
                    set_result_text("Drawing...");
                }
                StateChange::Showing(text) => set_result_text(text),
                StateChange::Result(text) => {
                    set_result_text(&format!("\u{1F389} Winner: {text} \u{1F389}"));
                }
                StateChange::DrawReady => set_draw_button(true, "\u{1F3AF} Draw"),
            }
        }

        fn notify(&mut self, message: &str, severity: Severity) {
            show_toast(message, severity);
        }

        fn confirm(&mut self, prompt: &str) -> bool {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }

        fn play_cue(&mut self) {
            self.audio.play(SoundEffect::DrawComplete);
        }
    }

    fn add_item(app: &SharedApp, audio: &Rc<AudioManager>) {
        let Some(input) = document()
            .and_then(|d| d.get_element_by_id("itemInput"))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let mut hooks = DomHooks::new(app.clone(), audio.clone());
        if app.borrow_mut().state.add_entry(&input.value(), &mut hooks).is_ok() {
            input.set_value("");
        }
    }

    fn trigger_draw(app: &SharedApp, audio: &Rc<AudioManager>) {
        let mut hooks = DomHooks::new(app.clone(), audio.clone());
        let outcome = app.borrow_mut().state.start_draw(&mut hooks);
        if outcome != Ok(StartOutcome::Started) {
            return;
        }

        // Starting a draw is a user gesture, so the audio context may
        // resume now.
        audio.resume();

        let tick_app = app.clone();
        let tick_audio = audio.clone();
        let tick = Closure::<dyn FnMut()>::new(move || {
            let mut hooks = DomHooks::new(tick_app.clone(), tick_audio.clone());
            let exhausted = tick_app.borrow_mut().state.animation_tick(&mut hooks);
            if exhausted {
                if let Some(handle) = tick_app.borrow_mut().interval.take() {
                    if let Some(window) = web_sys::window() {
                        window.clear_interval_with_handle(handle);
                    }
                }
                let timestamp = now_locale_string();
                let _ = tick_app.borrow_mut().state.settle_draw(timestamp, &mut hooks);
            }
        });

        let Some(window) = web_sys::window() else { return };
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS,
        ) {
            Ok(handle) => {
                app.borrow_mut().interval = Some(handle);
                tick.forget();
            }
            Err(e) => log::error!("Failed to schedule draw animation: {e:?}"),
        }
    }

    fn toggle_theme(app: &SharedApp) {
        let next = {
            let mut a = app.borrow_mut();
            a.theme = a.theme.toggled();
            a.theme
        };
        apply_theme(next);
        show_toast(&format!("Switched to {}", next.label()), Severity::Info);
    }

    fn on_click(document: &Document, id: &str, f: impl FnMut(MouseEvent) + 'static) {
        if let Some(el) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(MouseEvent)>::new(f);
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn bind_events(app: &SharedApp, audio: &Rc<AudioManager>) {
        let Some(document) = document() else { return };

        {
            let app = app.clone();
            let audio = audio.clone();
            on_click(&document, "addItemBtn", move |_| add_item(&app, &audio));
        }
        {
            let app = app.clone();
            let audio = audio.clone();
            on_click(&document, "drawBtn", move |_| trigger_draw(&app, &audio));
        }
        {
            let app = app.clone();
            let audio = audio.clone();
            on_click(&document, "clearAllBtn", move |_| {
                let mut hooks = DomHooks::new(app.clone(), audio.clone());
                let _ = app.borrow_mut().state.clear_entries(&mut hooks);
            });
        }
        {
            let app = app.clone();
            let audio = audio.clone();
            on_click(&document, "clearHistoryBtn", move |_| {
                let mut hooks = DomHooks::new(app.clone(), audio.clone());
                let _ = app.borrow_mut().state.clear_history(&mut hooks);
            });
        }
        {
            let app = app.clone();
            on_click(&document, "themeToggle", move |_| toggle_theme(&app));
        }

        // Enter inside the input adds the entry
        if let Some(input) = document.get_element_by_id("itemInput") {
            let app = app.clone();
            let audio = audio.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" && !event.ctrl_key() && !event.meta_key() {
                    add_item(&app, &audio);
                }
            });
            let _ =
                input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Global shortcuts: Ctrl/Cmd + Enter, N, D
        {
            let app = app.clone();
            let audio = audio.clone();
            let doc = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if !event.ctrl_key() && !event.meta_key() {
                    return;
                }
                match event.key().as_str() {
                    "Enter" => {
                        event.prevent_default();
                        let input_focused = doc
                            .active_element()
                            .is_some_and(|el| el.id() == "itemInput");
                        if input_focused {
                            add_item(&app, &audio);
                        } else {
                            trigger_draw(&app, &audio);
                        }
                    }
                    "n" | "N" => {
                        event.prevent_default();
                        if let Some(input) = doc
                            .get_element_by_id("itemInput")
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        {
                            let _ = input.focus();
                        }
                    }
                    "d" | "D" => {
                        event.prevent_default();
                        trigger_draw(&app, &audio);
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Lucky Draw starting...");

        let seed = js_sys::Date::now() as u64;
        let mut state = AppState::load(LocalStore, seed);

        // First run: seed some example entries
        if state.registry.is_empty() {
            let mut hooks = NoopHooks;
            for entry in DEFAULT_ENTRIES {
                let _ = state.add_entry(entry, &mut hooks);
            }
            log::info!("Seeded {} default entries", DEFAULT_ENTRIES.len());
        }

        let theme = Theme::load();
        let audio = Rc::new(AudioManager::new());
        let app: SharedApp = Rc::new(RefCell::new(App {
            state,
            theme,
            interval: None,
        }));

        apply_theme(theme);
        {
            let hooks = DomHooks::new(app.clone(), audio.clone());
            let a = app.borrow();
            hooks.render_entries(a.state.registry.entries());
            hooks.render_history(a.state.history.records());
        }
        bind_events(&app, &audio);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lucky_draw::draw::{AppState, Severity, StateChange, UiHooks};
    use lucky_draw::storage::MemoryStore;

    env_logger::init();
    log::info!("Lucky Draw (native) starting...");
    log::info!("Native mode is a demo run - build for wasm32 for the web widget");

    // Hooks that narrate the draw on stdout
    struct StdoutHooks;

    impl UiHooks for StdoutHooks {
        fn state_changed(&mut self, change: StateChange<'_>) {
            match change {
                StateChange::Showing(text) => println!("  ... {text}"),
                StateChange::Result(text) => println!("Winner: {text}"),
                _ => {}
            }
        }

        fn notify(&mut self, message: &str, severity: Severity) {
            println!("[{severity:?}] {message}");
        }
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut hooks = StdoutHooks;
    let mut state = AppState::load(MemoryStore::default(), seed);
    for entry in ["Alice", "Bob", "Carol", "Dave"] {
        let _ = state.add_entry(entry, &mut hooks);
    }

    if state.start_draw(&mut hooks).is_ok() {
        while !state.animation_tick(&mut hooks) {}
        let _ = state.settle_draw(format!("unix-ms {seed}"), &mut hooks);
    }
}
