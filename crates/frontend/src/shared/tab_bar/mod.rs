//! Route-bound tab bar.
//!
//! Renders one link per visible tab under a base path and keeps the current
//! location pointing at a visible tab.
//!
//! # Example
//!
//! ```rust,ignore
//! <TabBar
//!     base_path="/staking"
//!     items=vec![
//!         TabItem::new("overview", "Overview").root(),
//!         TabItem::new("payout", "Payouts").with_alias("rewards"),
//!         TabItem::new("query", "Validator stats").with_params(),
//!     ]
//!     hidden=Signal::derive(move || HiddenTabs::from_optional([hide_payouts.get().then_some("payout")]))
//! />
//! ```

use crate::shared::icons;
use crate::shared::navigation::{use_navigation, NavigationContext};
use leptos::prelude::*;
use tabs_contracts::shared::tab_bar::{
    is_link_active, join_classes, render_plan, resolve_redirect, validate_tab_set, HiddenTabs,
    MatchMode, RenderedTab, TabItem,
};

const MENU_CLASS: &str = "ui--Menu ui menu tabular";

/// Link that gets the `active` class while the current path matches it.
#[component]
pub fn NavLink(
    /// Route path the link points at
    #[prop(into)]
    to: String,
    #[prop(into)] match_mode: Signal<MatchMode>,
    children: Children,
) -> impl IntoView {
    let current_path = use_navigation().current_path();

    let target = to.clone();
    let is_active = Memo::new(move |_| {
        current_path.with(|current| is_link_active(&target, current, match_mode.get()))
    });

    view! {
        <a class="item" class:active=is_active href=format!("#{}", to)>
            {children()}
        </a>
    }
}

/// Direction marker between the steps of a sequence bar.
#[component]
pub fn TabSeparator() -> impl IntoView {
    view! {
        <span class="ui--TabSeparator" aria-hidden="true">
            {icons::icon("arrow-right")}
        </span>
    }
}

/// Rewrites the location when `current` does not point at a visible tab.
///
/// Returns the path that was navigated to.
pub fn commit_redirect(
    nav: &NavigationContext,
    base_path: &str,
    items: &[TabItem],
    hidden: &HiddenTabs,
    current: &str,
) -> Option<String> {
    let target = resolve_redirect(base_path, items, hidden, current)?;
    log::debug!("Tab bar redirect: '{}' -> '{}'", current, target);
    nav.redirect(target.clone());
    Some(target)
}

#[component]
pub fn TabBar(
    /// Path of the bar itself, e.g. "/staking"
    #[prop(into)]
    base_path: Signal<String>,
    /// Tabs in display order
    #[prop(into)]
    items: Signal<Vec<TabItem>>,
    /// Tabs that are neither shown nor accepted in the location
    #[prop(optional, into)]
    hidden: Option<Signal<HiddenTabs>>,
    /// Show the tabs as consecutive steps with arrows between them
    #[prop(optional, into)]
    is_sequence: Option<Signal<bool>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let nav = use_navigation();
    let current_path = nav.current_path();
    let hidden = hidden.unwrap_or_else(|| Signal::stored(HiddenTabs::default()));
    let is_sequence = is_sequence.unwrap_or_else(|| Signal::stored(false));

    let plan = Memo::new(move |_| {
        let is_sequence = is_sequence.get();
        let hidden = hidden.get();
        base_path.with(|base_path| {
            items.with(|items| render_plan(base_path, items, &hidden, is_sequence))
        })
    });

    if cfg!(debug_assertions) {
        Effect::new(move |_| {
            base_path.with(|base_path| {
                items.with(|items| {
                    if let Err(err) = validate_tab_set(base_path, items) {
                        log::warn!("Tab bar '{}': {}", base_path, err);
                    }
                })
            });
        });
    }

    // Runs after render, the location is never rewritten while rendering.
    Effect::new(move |_| {
        let current = current_path.get();
        let hidden = hidden.get();
        let base_path = base_path.get();
        items.with(|items| commit_redirect(&nav, &base_path, items, &hidden, &current));
    });

    let container_class =
        move || join_classes([MENU_CLASS, class.get().unwrap_or_default().as_str()]);

    view! {
        <div class=container_class>
            <For
                each=move || plan.get()
                key=|tab: &RenderedTab| tab.to.clone()
                children=move |tab: RenderedTab| {
                    let to = tab.to.clone();
                    let entry = Memo::new(move |_| {
                        plan.with(|plan| plan.iter().find(|rendered| rendered.to == to).cloned())
                    });
                    let match_mode = Signal::derive(move || {
                        entry.get().map_or(MatchMode::Exact, |rendered| rendered.match_mode)
                    });
                    let separator_after = move || {
                        entry.with(|rendered| rendered.as_ref().is_some_and(|r| r.separator_after))
                    };

                    view! {
                        <NavLink to=tab.to match_mode=match_mode>
                            {move || entry.get().map(|rendered| rendered.text).unwrap_or_default()}
                        </NavLink>
                        <Show when=separator_after>
                            <TabSeparator />
                        </Show>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staking_items() -> Vec<TabItem> {
        vec![
            TabItem::new("overview", "Overview").root(),
            TabItem::new("query", "Validator stats").with_params(),
            TabItem::new("payout", "Payouts").with_alias("rewards"),
        ]
    }

    #[test]
    fn test_commit_redirect_rewrites_location() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavigationContext::in_memory("/staking/rewards");
            let items = staking_items();
            let hidden = HiddenTabs::default();

            let current = nav.current_path().get_untracked();
            assert_eq!(
                commit_redirect(&nav, "/staking", &items, &hidden, &current),
                Some("/staking/payout".to_string())
            );
            assert_eq!(nav.current_path().get_untracked(), "/staking/payout");

            let current = nav.current_path().get_untracked();
            assert_eq!(commit_redirect(&nav, "/staking", &items, &hidden, &current), None);
            assert_eq!(nav.current_path().get_untracked(), "/staking/payout");
        });
    }

    #[test]
    fn test_commit_redirect_hidden_section() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavigationContext::in_memory("/staking/query/5");
            let hidden = HiddenTabs::new(["query"]);

            let current = nav.current_path().get_untracked();
            commit_redirect(&nav, "/staking", &staking_items(), &hidden, &current);
            assert_eq!(nav.current_path().get_untracked(), "/staking");
        });
    }

    #[test]
    fn test_commit_redirect_keeps_valid_location() {
        let owner = Owner::new();
        owner.with(|| {
            let nav = NavigationContext::in_memory("/staking/query/5Grw");

            let current = nav.current_path().get_untracked();
            let target =
                commit_redirect(&nav, "/staking", &staking_items(), &HiddenTabs::default(), &current);
            assert_eq!(target, None);
            assert_eq!(nav.current_path().get_untracked(), "/staking/query/5Grw");
        });
    }
}
