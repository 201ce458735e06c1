//! Tab descriptors and the hidden-tab set

use serde::{Deserialize, Serialize};

/// A single tab in a tab bar.
///
/// `name` is both the path segment of the tab and its key in the hidden set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabItem {
    pub name: String,
    /// Alternate segment that is rewritten to this tab's canonical path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub text: String,
    #[serde(default)]
    pub is_root: bool,
    #[serde(default)]
    pub has_params: bool,
    #[serde(default)]
    pub is_exact: bool,
}

impl TabItem {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn root(mut self) -> Self {
        self.is_root = true;
        self
    }

    pub fn with_params(mut self) -> Self {
        self.has_params = true;
        self
    }

    pub fn exact(mut self) -> Self {
        self.is_exact = true;
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Link target of this tab under `base_path`
    pub fn target_path(&self, base_path: &str) -> String {
        if self.is_root {
            base_path.to_string()
        } else {
            format!("{}/{}", base_path, self.name)
        }
    }
}

/// Names of tabs that are neither rendered nor accepted as a valid section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HiddenTabs(Vec<String>);

impl HiddenTabs {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Builds the set from a list where `None` entries act as placeholders
    /// for conditionally hidden tabs and are dropped.
    pub fn from_optional<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self(names.into_iter().flatten().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|hidden| hidden == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HiddenTabs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        let overview = TabItem::new("overview", "Overview").root();
        let query = TabItem::new("query", "Query").with_params();

        assert_eq!(overview.target_path("/staking"), "/staking");
        assert_eq!(query.target_path("/staking"), "/staking/query");
    }

    #[test]
    fn test_hidden_from_optional() {
        let hidden = HiddenTabs::from_optional([Some("query"), None, Some("payout")]);

        assert_eq!(hidden.len(), 2);
        assert!(hidden.contains("query"));
        assert!(hidden.contains("payout"));
        assert!(!hidden.contains(""));
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: TabItem =
            serde_json::from_str(r#"{ "name": "payout", "text": "Payouts", "alias": "rewards" }"#)
                .unwrap();

        assert_eq!(item.name, "payout");
        assert_eq!(item.alias.as_deref(), Some("rewards"));
        assert!(!item.is_root);
        assert!(!item.has_params);
        assert!(!item.is_exact);
    }
}
