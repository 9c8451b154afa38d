//! Normalization of untrusted admin input into a valid [`GroupSet`].
//!
//! The save path trusts nothing: unknown group keys are dropped, secrets
//! are sanitized, page ids are coerced, themes reset to the default, and
//! a page claimed by more than one group stays with the first slot in
//! precedence order. Every problem short of a non-object payload is
//! recovered, never surfaced.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ValidationError;
use crate::group::{Group, GroupSet};
use crate::theme::Theme;
use crate::types::{GroupId, PageId};

/// Strip control characters and trim surrounding whitespace from a
/// submitted secret. An empty result disables the group.
pub fn sanitize_secret(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a full admin save payload into the canonical collection.
///
/// Group slots missing from the payload come out as default (disabled)
/// groups: a save is always a full replace.
pub fn normalize_settings(raw: &Value) -> Result<GroupSet, ValidationError> {
    let object = raw.as_object().ok_or(ValidationError::NotAnObject)?;

    let mut set = GroupSet::default();
    let mut claimed: HashSet<PageId> = HashSet::new();

    for id in GroupId::ALL {
        if let Some(entry) = object.get(id.key()) {
            set.set(id, normalize_group(entry, &mut claimed));
        }
    }

    Ok(set)
}

fn normalize_group(raw: &Value, claimed: &mut HashSet<PageId>) -> Group {
    let secret = raw
        .get("password")
        .and_then(Value::as_str)
        .map(sanitize_secret)
        .unwrap_or_default();

    let theme = raw
        .get("gradient")
        .and_then(Value::as_str)
        .map(Theme::from_name)
        .unwrap_or_default();

    let mut pages = Vec::new();
    if let Some(items) = raw.get("pages").and_then(Value::as_array) {
        for item in items {
            if let Some(page) = PageId::coerce(item) {
                // First claim wins, across groups and within one.
                if claimed.insert(page) {
                    pages.push(page);
                }
            }
        }
    }

    Group {
        secret,
        pages,
        theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(id: u32) -> PageId {
        PageId::new(id).unwrap()
    }

    #[test]
    fn test_sanitize_strips_control_chars() {
        assert_eq!(sanitize_secret("pass\tword\n"), "password");
        assert_eq!(sanitize_secret("  spaced  "), "spaced");
        assert_eq!(sanitize_secret("ok"), "ok");
        assert_eq!(sanitize_secret("\x07\x00"), "");
    }

    #[test]
    fn test_non_object_payload_rejected() {
        assert!(matches!(
            normalize_settings(&json!([1, 2, 3])),
            Err(ValidationError::NotAnObject)
        ));
        assert!(matches!(
            normalize_settings(&json!("nope")),
            Err(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn test_bad_page_entries_dropped_rest_retained() {
        let set = normalize_settings(&json!({
            "group1": { "password": "s", "pages": [0, -5, "abc", 42, "7"], "gradient": "forest" }
        }))
        .unwrap();
        assert_eq!(set.get(GroupId::One).pages, vec![page(42), page(7)]);
    }

    #[test]
    fn test_unknown_theme_resets_to_default() {
        let set = normalize_settings(&json!({
            "group2": { "password": "s", "pages": [], "gradient": "neon" }
        }))
        .unwrap();
        assert_eq!(set.get(GroupId::Two).theme, Theme::Default);
    }

    #[test]
    fn test_unknown_group_keys_dropped() {
        let set = normalize_settings(&json!({
            "group1": { "password": "a", "pages": [1] },
            "group7": { "password": "b", "pages": [2] },
            "other": true
        }))
        .unwrap();
        assert!(set.owner_of(page(1)).is_some());
        assert!(set.owner_of(page(2)).is_none());
    }

    #[test]
    fn test_missing_groups_default_disabled() {
        let set = normalize_settings(&json!({
            "group2": { "password": "only", "pages": [9] }
        }))
        .unwrap();
        assert_eq!(set.get(GroupId::One), &Group::default());
        assert_eq!(set.get(GroupId::Three), &Group::default());
        assert_eq!(set.owner_of(page(9)).unwrap().0, GroupId::Two);
    }

    #[test]
    fn test_cross_group_duplicates_kept_by_first_slot() {
        let set = normalize_settings(&json!({
            "group1": { "password": "a", "pages": [5, 6] },
            "group2": { "password": "b", "pages": [6, 7] },
            "group3": { "password": "c", "pages": [5, 8] }
        }))
        .unwrap();
        assert_eq!(set.get(GroupId::One).pages, vec![page(5), page(6)]);
        assert_eq!(set.get(GroupId::Two).pages, vec![page(7)]);
        assert_eq!(set.get(GroupId::Three).pages, vec![page(8)]);
    }

    #[test]
    fn test_within_group_duplicates_deduped() {
        let set = normalize_settings(&json!({
            "group1": { "password": "a", "pages": [3, 3, "3", 4] }
        }))
        .unwrap();
        assert_eq!(set.get(GroupId::One).pages, vec![page(3), page(4)]);
    }

    #[test]
    fn test_empty_password_permitted() {
        let set = normalize_settings(&json!({
            "group1": { "password": "", "pages": [1] }
        }))
        .unwrap();
        assert!(!set.get(GroupId::One).is_enabled());
        assert_eq!(set.get(GroupId::One).pages, vec![page(1)]);
    }

    #[test]
    fn test_normalization_idempotent() {
        let raw = json!({
            "group1": { "password": " p\t", "pages": [1, "2", 0], "gradient": "neon" },
            "group2": { "password": "q", "pages": [2, 3] }
        });
        let once = normalize_settings(&raw).unwrap();
        let again = normalize_settings(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, again);
    }
}
