//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{json, Value};

use pagegate_core::{PageId, Theme};

/// Generate a printable secret, sometimes empty, sometimes with the
/// whitespace sanitization has to strip.
pub fn secret() -> impl Strategy<Value = String> {
    "[ -~]{0,24}".prop_map(String::from)
}

/// Generate a valid page id.
pub fn page_id() -> impl Strategy<Value = PageId> {
    (1u32..10_000).prop_map(|n| PageId::new(n).expect("range starts at 1"))
}

/// Generate a theme.
pub fn theme() -> impl Strategy<Value = Theme> {
    prop_oneof![
        Just(Theme::Default),
        Just(Theme::Sunset),
        Just(Theme::Forest),
        Just(Theme::Cosmic),
        Just(Theme::Fire),
    ]
}

/// Generate a theme name string: known names, junk, and casing
/// variants.
pub fn theme_name() -> impl Strategy<Value = String> {
    prop_oneof![
        theme().prop_map(|t| t.name().to_string()),
        "[a-zA-Z]{0,12}".prop_map(String::from),
    ]
}

/// Generate one page entry as it might arrive in a payload: a number,
/// a numeric string, or junk.
pub fn page_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        (0u32..10_000).prop_map(|n| json!(n)),
        (0u32..10_000).prop_map(|n| json!(n.to_string())),
        (-100i64..0).prop_map(|n| json!(n)),
        Just(json!(null)),
        "[a-z]{1,6}".prop_map(|s| json!(s)),
    ]
}

/// Generate a single group payload object.
pub fn group_value() -> impl Strategy<Value = Value> {
    (
        secret(),
        prop::collection::vec(page_entry(), 0..8),
        theme_name(),
    )
        .prop_map(|(password, pages, gradient)| {
            json!({
                "password": password,
                "pages": pages,
                "gradient": gradient,
            })
        })
}

/// Generate a full settings payload: some slots present, some missing,
/// occasionally an unknown key.
pub fn settings_value() -> impl Strategy<Value = Value> {
    (
        prop::option::of(group_value()),
        prop::option::of(group_value()),
        prop::option::of(group_value()),
        prop::option::of(group_value()),
    )
        .prop_map(|(g1, g2, g3, junk)| {
            let mut object = serde_json::Map::new();
            if let Some(g) = g1 {
                object.insert("group1".to_string(), g);
            }
            if let Some(g) = g2 {
                object.insert("group2".to_string(), g);
            }
            if let Some(g) = g3 {
                object.insert("group3".to_string(), g);
            }
            if let Some(g) = junk {
                object.insert("group7".to_string(), g);
            }
            Value::Object(object)
        })
}
