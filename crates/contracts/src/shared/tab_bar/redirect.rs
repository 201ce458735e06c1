//! Location correction for paths that do not point at a visible tab

use super::item::{HiddenTabs, TabItem};

/// Tab segment of a path shaped like `/<base>/<section>/<params..>`.
///
/// Paths with fewer segments have no section. A missing section never
/// matches an alias, so such paths always fall back to the base path.
pub fn section_of(path: &str) -> Option<&str> {
    path.split('/').nth(2)
}

/// Path the location has to be rewritten to, if any.
///
/// Aliases are canonicalized to their tab, unknown or hidden sections fall
/// back to `base_path`. Applying the result and resolving again yields `None`.
pub fn resolve_redirect(
    base_path: &str,
    items: &[TabItem],
    hidden: &HiddenTabs,
    current_path: &str,
) -> Option<String> {
    if current_path == base_path {
        return None;
    }

    let section = section_of(current_path);

    let target = if let Some(aliased) = items
        .iter()
        .find(|item| section.is_some() && item.alias.as_deref() == section)
    {
        Some(aliased.target_path(base_path))
    } else {
        let known = section.is_some_and(|section| {
            !hidden.contains(section)
                && items.iter().any(|item| !item.is_root && item.name == section)
        });
        (!known).then(|| base_path.to_string())
    };

    target.filter(|target| target != current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staking_items() -> Vec<TabItem> {
        vec![
            TabItem::new("overview", "Overview").root(),
            TabItem::new("query", "Query").with_params(),
            TabItem::new("payout", "Payouts").with_alias("rewards"),
        ]
    }

    #[test]
    fn test_section_of() {
        assert_eq!(section_of("/staking/query/5Grw"), Some("query"));
        assert_eq!(section_of("/staking/"), Some(""));
        assert_eq!(section_of("/staking"), None);
        assert_eq!(section_of(""), None);
    }

    #[test]
    fn test_base_path_is_left_alone() {
        let items = staking_items();
        assert_eq!(resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking"), None);
    }

    #[test]
    fn test_known_param_tab_is_left_alone() {
        let items = staking_items();
        let current = "/staking/query/5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

        assert_eq!(resolve_redirect("/staking", &items, &HiddenTabs::default(), current), None);
    }

    #[test]
    fn test_unknown_section_falls_back() {
        let items = staking_items();

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking/unknown"),
            Some("/staking".to_string())
        );
        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking/"),
            Some("/staking".to_string())
        );
    }

    #[test]
    fn test_root_name_is_not_a_section() {
        let items = staking_items();

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking/overview"),
            Some("/staking".to_string())
        );
    }

    #[test]
    fn test_alias_is_canonicalized() {
        let items = staking_items();

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking/rewards"),
            Some("/staking/payout".to_string())
        );
    }

    #[test]
    fn test_root_alias_goes_to_base() {
        let items = vec![
            TabItem::new("overview", "Overview").root().with_alias("summary"),
            TabItem::new("query", "Query"),
        ];

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/staking/summary/1"),
            Some("/staking".to_string())
        );
    }

    #[test]
    fn test_hidden_section_falls_back() {
        let items = staking_items();
        let hidden = HiddenTabs::new(["query"]);

        assert_eq!(
            resolve_redirect("/staking", &items, &hidden, "/staking/query/5"),
            Some("/staking".to_string())
        );
    }

    #[test]
    fn test_path_outside_base_falls_back() {
        let items = staking_items();

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/accounts"),
            Some("/staking".to_string())
        );
    }

    #[test]
    fn test_redirect_is_idempotent() {
        let items = staking_items();
        let hidden = HiddenTabs::new(["query"]);

        for start in ["/staking/unknown", "/staking/rewards", "/staking/query/5", "/"] {
            let mut current = start.to_string();
            let first = resolve_redirect("/staking", &items, &hidden, &current);
            assert!(first.is_some(), "{} should be corrected", start);
            if let Some(target) = first {
                current = target;
            }
            assert_eq!(resolve_redirect("/staking", &items, &hidden, &current), None);
        }
    }

    #[test]
    fn test_missing_section_ignores_unaliased_items() {
        let items = vec![
            TabItem::new("actions", "Account actions"),
            TabItem::new("overview", "Overview").root(),
        ];

        assert_eq!(
            resolve_redirect("/staking", &items, &HiddenTabs::default(), "/accounts"),
            Some("/staking".to_string())
        );
    }
}
