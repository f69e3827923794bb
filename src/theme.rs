//! Theme preference
//!
//! Pure presentation state, persisted under its own LocalStorage key
//! separately from entries and history. A stored preference wins;
//! otherwise the system `prefers-color-scheme` setting decides.

/// Widget color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "luckyDrawTheme";

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Display name for toasts and logs
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light mode",
            Theme::Dark => "Dark mode",
        }
    }

    /// Toggle-button caption while this theme is active
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319} Dark mode",
            Theme::Dark => "\u{2600}\u{FE0F} Light mode",
        }
    }

    /// Load the theme preference (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(s)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(theme) = Theme::from_str(&s) {
                    log::info!("Loaded theme preference: {}", theme.as_str());
                    return theme;
                }
            }
        }

        // Fall back to the system preference
        if let Some(window) = web_sys::window() {
            if let Ok(Some(mq)) = window.match_media("(prefers-color-scheme: dark)") {
                if mq.matches() {
                    return Theme::Dark;
                }
            }
        }

        Theme::default()
    }

    /// Save the theme preference (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, self.as_str());
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
