//! Password groups and the fixed group collection.
//!
//! A [`Group`] bundles one shared secret, the pages it protects, and the
//! prompt theme. The [`GroupSet`] is the whole fixed collection: always
//! exactly three slots, loaded whole, replaced whole.

use serde::de::Error as DeError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::theme::Theme;
use crate::types::{GroupId, PageId};

/// One password group.
///
/// Wire field names are `password` / `pages` / `gradient`, matching the
/// stored settings blob and the admin payload shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Shared secret. Empty means the group is disabled.
    #[serde(rename = "password", default)]
    pub secret: String,

    /// Pages this group protects.
    #[serde(default, deserialize_with = "lenient_pages")]
    pub pages: Vec<PageId>,

    /// Prompt theme. Missing or unknown values backfill to the default.
    #[serde(rename = "gradient", default)]
    pub theme: Theme,
}

impl Group {
    /// Create a group.
    pub fn new(secret: impl Into<String>, pages: Vec<PageId>, theme: Theme) -> Self {
        Self {
            secret: secret.into(),
            pages,
            theme,
        }
    }

    /// A group with an empty secret is disabled: its pages stay public.
    pub fn is_enabled(&self) -> bool {
        !self.secret.is_empty()
    }

    /// Whether this group lists the page.
    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }
}

// Stored blobs may contain junk page entries from older versions or
// hand edits; coerce what parses and drop the rest.
fn lenient_pages<'de, D>(deserializer: D) -> Result<Vec<PageId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_array()
        .map(|items| items.iter().filter_map(PageId::coerce).collect())
        .unwrap_or_default())
}

/// The full fixed collection of password groups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSet {
    groups: [Group; GroupId::COUNT],
}

impl GroupSet {
    /// The default collection: three empty, disabled groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a group by slot.
    pub fn get(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }

    /// Replace a group slot.
    pub fn set(&mut self, id: GroupId, group: Group) {
        self.groups[id.index()] = group;
    }

    /// Iterate slots in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        GroupId::ALL.iter().map(move |&id| (id, self.get(id)))
    }

    /// Which enabled group owns this page?
    ///
    /// First match in slot order wins. Disabled (empty-secret) groups
    /// never own a page, even if they list it.
    pub fn owner_of(&self, page: PageId) -> Option<(GroupId, &Group)> {
        self.iter()
            .find(|(_, group)| group.is_enabled() && group.contains(page))
    }
}

impl Serialize for GroupSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(GroupId::COUNT))?;
        for (id, group) in self.iter() {
            map.serialize_entry(id.key(), group)?;
        }
        map.end()
    }
}

// Lenient per field, strict at the top level: unknown keys are ignored
// and missing slots default, but a blob that is not an object at all is
// an error so the caller can fall back to defaults with a log line.
impl<'de> Deserialize<'de> for GroupSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let object = value
            .as_object()
            .ok_or_else(|| D::Error::custom("settings blob must be a JSON object"))?;

        let mut set = GroupSet::default();
        for (key, raw) in object {
            if let Some(id) = GroupId::from_key(key) {
                if let Ok(group) = serde_json::from_value::<Group>(raw.clone()) {
                    set.set(id, group);
                }
            }
        }
        Ok(set)
    }
}
