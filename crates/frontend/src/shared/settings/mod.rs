//! Display settings for the tab bars.
//!
//! Settings are persisted in localStorage as JSON.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

const SETTINGS_STORAGE_KEY: &str = "tab-bar-settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Render every bar as a sequence of steps
    #[serde(default)]
    pub sequence: bool,
    /// Hide tabs that take trailing params
    #[serde(default)]
    pub hide_param_tabs: bool,
}

impl DisplaySettings {
    /// Parse stored settings, falling back to defaults on malformed input.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|err| {
            log::warn!("Ignoring stored tab bar settings: {}", err);
            Self::default()
        })
    }
}

fn load_settings_from_storage() -> DisplaySettings {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten())
        .map(|json| DisplaySettings::from_json(&json))
        .unwrap_or_default()
}

fn save_settings_to_storage(settings: DisplaySettings) {
    let Ok(json) = serde_json::to_string(&settings) else {
        return;
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_STORAGE_KEY, &json);
    }
}

/// Settings context type.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub sequence: RwSignal<bool>,
    pub hide_param_tabs: RwSignal<bool>,
}

impl SettingsContext {
    pub fn snapshot(&self) -> DisplaySettings {
        DisplaySettings {
            sequence: self.sequence.get(),
            hide_param_tabs: self.hide_param_tabs.get(),
        }
    }
}

/// Provides settings context to children components.
#[component]
pub fn SettingsProvider(children: Children) -> impl IntoView {
    let initial = load_settings_from_storage();
    let context = SettingsContext {
        sequence: RwSignal::new(initial.sequence),
        hide_param_tabs: RwSignal::new(initial.hide_param_tabs),
    };

    Effect::new(move |_| save_settings_to_storage(context.snapshot()));

    provide_context(context);

    children()
}

/// Hook to use the settings context.
pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>()
        .expect("SettingsContext not found. Wrap your app with SettingsProvider.")
}
