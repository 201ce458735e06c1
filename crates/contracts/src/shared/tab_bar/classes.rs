/// Joins CSS class fragments, skipping empty ones.
pub fn join_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_classes() {
        assert_eq!(
            join_classes(["ui--Menu ui menu tabular", "staking--tabs"]),
            "ui--Menu ui menu tabular staking--tabs"
        );
        assert_eq!(join_classes(["ui--Menu", "", "  "]), "ui--Menu");
        assert_eq!(join_classes(Vec::<&str>::new()), "");
    }
}
