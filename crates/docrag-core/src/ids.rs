/// Build the index key for chunk `ordinal` of `source_name`.
///
/// Spaces and periods become hyphens so the key is accepted by the search
/// service. The mapping is not injective: `"a b.md"` and `"a-b-md"` collide.
/// Existing indexes depend on these exact keys for overwrite-on-reindex, so
/// the rule must stay as is.
pub fn derive_id(source_name: &str, ordinal: usize) -> String {
    format!("{source_name}-chunk-{ordinal}").replace([' ', '.'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_and_periods() {
        assert_eq!(
            derive_id("PA Durable Power of Attorney.md", 3),
            "PA-Durable-Power-of-Attorney-md-chunk-3"
        );
    }

    #[test]
    fn underscores_are_kept() {
        assert_eq!(
            derive_id("IL_Statutory_Short_Form_POA_Property.md", 0),
            "IL_Statutory_Short_Form_POA_Property-md-chunk-0"
        );
    }

    #[test]
    fn normalization_collides_on_equivalent_names() {
        assert_eq!(derive_id("a b.md", 1), derive_id("a-b-md", 1));
    }
}
