//! Active-link matching

use serde::{Deserialize, Serialize};

/// How a link decides whether it is active for the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Current path must equal the link target
    Exact,
    /// Current path may continue the link target with further segments
    Prefix,
}

/// Match mode of the tab at `index` in the rendered (already filtered) list.
///
/// Only tabs with params get prefix matching, and never the first tab of a
/// regular bar since it is the fallback for every path under the base.
pub fn match_mode(is_exact: bool, has_params: bool, is_sequence: bool, index: usize) -> MatchMode {
    if is_exact || !has_params || (!is_sequence && index == 0) {
        MatchMode::Exact
    } else {
        MatchMode::Prefix
    }
}

/// Whether a link to `target` is active for `current_path`.
///
/// Paths are compared case-sensitively.
pub fn is_link_active(target: &str, current_path: &str, mode: MatchMode) -> bool {
    match mode {
        MatchMode::Exact => current_path == target,
        MatchMode::Prefix => match current_path.strip_prefix(target) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || target.ends_with('/'),
            None => false,
        },
    }
}
