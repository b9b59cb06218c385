//! Attribute list helpers for components that forward caller attributes.

use dioxus::prelude::*;

/// Merge caller attributes into a component's built-in attributes.
///
/// Built-ins keep their position. An override with the same name and namespace
/// replaces the built-in value in place; anything else is appended. Later
/// overrides win over earlier ones.
pub fn merge_attributes(defaults: Vec<Attribute>, overrides: Vec<Attribute>) -> Vec<Attribute> {
    let mut merged = defaults;
    for attr in overrides {
        match merged
            .iter_mut()
            .find(|existing| existing.name == attr.name && existing.namespace == attr.namespace)
        {
            Some(existing) => {
                tracing::trace!(name = attr.name, "caller attribute replaces built-in");
                existing.value = attr.value;
                existing.volatile = attr.volatile;
            }
            None => merged.push(attr),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::AttributeValue;

    fn text(attrs: &[Attribute], name: &str) -> Option<String> {
        attrs
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| match &a.value {
                AttributeValue::Text(s) => Some(s.clone()),
                _ => None,
            })
    }

    fn names(attrs: &[Attribute]) -> Vec<&'static str> {
        attrs.iter().map(|a| a.name).collect()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let defaults = vec![
            Attribute::new("a", "1", None, false),
            Attribute::new("b", "2", None, false),
        ];
        let merged = merge_attributes(defaults, Vec::new());
        assert_eq!(names(&merged), vec!["a", "b"]);
        assert_eq!(text(&merged, "b").as_deref(), Some("2"));
    }

    #[test]
    fn test_override_replaces_in_place() {
        let defaults = vec![
            Attribute::new("a", "1", None, false),
            Attribute::new("b", "2", None, false),
        ];
        let overrides = vec![Attribute::new("a", "9", None, false)];
        let merged = merge_attributes(defaults, overrides);
        assert_eq!(names(&merged), vec!["a", "b"]);
        assert_eq!(text(&merged, "a").as_deref(), Some("9"));
    }

    #[test]
    fn test_unknown_override_is_appended() {
        let defaults = vec![Attribute::new("a", "1", None, false)];
        let overrides = vec![Attribute::new("id", "x", None, false)];
        let merged = merge_attributes(defaults, overrides);
        assert_eq!(names(&merged), vec!["a", "id"]);
        assert_eq!(text(&merged, "id").as_deref(), Some("x"));
    }

    #[test]
    fn test_later_duplicate_override_wins() {
        let overrides = vec![
            Attribute::new("id", "first", None, false),
            Attribute::new("id", "second", None, false),
        ];
        let merged = merge_attributes(Vec::new(), overrides);
        assert_eq!(merged.len(), 1);
        assert_eq!(text(&merged, "id").as_deref(), Some("second"));
    }

    #[test]
    fn test_namespace_distinguishes_attributes() {
        // `width` as a style property is a different attribute than the svg `width`
        let defaults = vec![Attribute::new("width", "28", None, false)];
        let overrides = vec![Attribute::new("width", "10px", Some("style"), false)];
        let merged = merge_attributes(defaults, overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].namespace, None);
        assert_eq!(merged[1].namespace, Some("style"));
    }
}
