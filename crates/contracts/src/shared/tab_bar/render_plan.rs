//! What a tab bar renders for a given set of props

use super::item::{HiddenTabs, TabItem};
use super::match_mode::{is_link_active, match_mode, MatchMode};

/// One visible link of a tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTab {
    /// Link target, also used as the list key
    pub to: String,
    pub name: String,
    pub text: String,
    pub match_mode: MatchMode,
    /// Render a direction marker right after this link
    pub separator_after: bool,
}

impl RenderedTab {
    pub fn is_active(&self, current_path: &str) -> bool {
        is_link_active(&self.to, current_path, self.match_mode)
    }
}

/// Visible items of the bar, in their original order.
pub fn visible_items<'a>(
    items: &'a [TabItem],
    hidden: &'a HiddenTabs,
) -> impl Iterator<Item = &'a TabItem> + 'a {
    items.iter().filter(move |item| !hidden.contains(&item.name))
}

/// Links of the bar after filtering hidden tabs.
///
/// Separators are placed between rendered links, so a hidden last item never
/// leaves a trailing marker behind.
pub fn render_plan(
    base_path: &str,
    items: &[TabItem],
    hidden: &HiddenTabs,
    is_sequence: bool,
) -> Vec<RenderedTab> {
    let visible: Vec<&TabItem> = visible_items(items, hidden).collect();
    let last = visible.len().saturating_sub(1);

    visible
        .into_iter()
        .enumerate()
        .map(|(index, item)| RenderedTab {
            to: item.target_path(base_path),
            name: item.name.clone(),
            text: item.text.clone(),
            match_mode: match_mode(item.is_exact, item.has_params, is_sequence, index),
            separator_after: is_sequence && index < last,
        })
        .collect()
}
