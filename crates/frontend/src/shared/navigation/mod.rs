//! Navigation context for hash-routed pages.
//!
//! Components never touch `window.location` directly: they read the current
//! path and request redirects through [`NavigationContext`], which is either
//! backed by the location hash or kept purely in memory.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Current path plus a way to replace it.
#[derive(Clone, Copy)]
pub struct NavigationContext {
    path: RwSignal<String>,
    redirect: Callback<String>,
}

impl NavigationContext {
    /// Context following `window.location.hash`.
    pub fn hash() -> Self {
        let path = RwSignal::new(read_hash_path());

        let on_hash_change = Closure::wrap(Box::new(move || {
            let next = read_hash_path();
            if path.get_untracked() != next {
                path.set(next);
            }
        }) as Box<dyn FnMut()>);

        if let Some(window) = window() {
            let _ = window.add_event_listener_with_callback(
                "hashchange",
                on_hash_change.as_ref().unchecked_ref(),
            );
        }
        on_hash_change.forget(); // lives as long as the page

        let redirect = Callback::new(move |target: String| {
            log::debug!("Navigating to '#{}'", target);
            if let Some(window) = window() {
                let _ = window.location().set_hash(&target);
            }
            if path.get_untracked() != target {
                path.set(target);
            }
        });

        Self { path, redirect }
    }

    /// Context that only lives in a signal, for embedding and tests.
    pub fn in_memory(initial: impl Into<String>) -> Self {
        let path = RwSignal::new(initial.into());
        let redirect = Callback::new(move |target: String| path.set(target));
        Self { path, redirect }
    }

    pub fn current_path(&self) -> Signal<String> {
        self.path.into()
    }

    pub fn redirect(&self, target: impl Into<String>) {
        self.redirect.run(target.into());
    }
}

/// Route path stored in a location hash such as `#/staking/query?x=1`.
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    let path = path.split('?').next().unwrap_or_default();

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn read_hash_path() -> String {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    path_from_hash(&hash)
}

/// Provides a [`NavigationContext`] to children, hash-backed unless one is given.
#[component]
pub fn NavigationProvider(
    #[prop(optional)] context: Option<NavigationContext>,
    children: Children,
) -> impl IntoView {
    provide_context(context.unwrap_or_else(NavigationContext::hash));
    children()
}

/// Hook to use the navigation context.
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>()
        .expect("NavigationContext not found. Wrap your app with NavigationProvider.")
}
