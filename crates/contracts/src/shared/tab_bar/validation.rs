//! Consistency checks for a tab set

use super::item::TabItem;
use std::collections::HashSet;
use thiserror::Error;

/// A tab set that renders, but navigates ambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabSetError {
    #[error("base path '{0}' must start with '/' and must not end with '/'")]
    MalformedBasePath(String),
    #[error("base path '{0}' has more than one segment, tab sections are read from the second segment only")]
    NestedBasePath(String),
    #[error("tab at position {0} has an empty name")]
    EmptyName(usize),
    #[error("tab name '{0}' contains '/'")]
    NameWithSlash(String),
    #[error("tab name '{0}' is used more than once")]
    DuplicateName(String),
    #[error("tabs '{0}' and '{1}' are both root tabs")]
    MultipleRoots(String, String),
}

/// Checks the invariants callers are expected to uphold for a tab set.
pub fn validate_tab_set(base_path: &str, items: &[TabItem]) -> Result<(), TabSetError> {
    if !base_path.starts_with('/') || base_path.ends_with('/') {
        return Err(TabSetError::MalformedBasePath(base_path.to_string()));
    }
    if base_path[1..].contains('/') {
        return Err(TabSetError::NestedBasePath(base_path.to_string()));
    }

    let mut names = HashSet::new();
    let mut root: Option<&str> = None;

    for (index, item) in items.iter().enumerate() {
        if item.name.is_empty() {
            return Err(TabSetError::EmptyName(index));
        }
        if item.name.contains('/') {
            return Err(TabSetError::NameWithSlash(item.name.clone()));
        }
        if !names.insert(item.name.as_str()) {
            return Err(TabSetError::DuplicateName(item.name.clone()));
        }
        if item.is_root {
            if let Some(first) = root {
                return Err(TabSetError::MultipleRoots(first.to_string(), item.name.clone()));
            }
            root = Some(item.name.as_str());
        }
    }

    Ok(())
}
