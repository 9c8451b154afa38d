//! Group settings persistence: load, query, and save the group set.
//!
//! One JSON blob under a fixed key holds all three groups. Reads are
//! forgiving (a missing or mangled blob is an empty configuration);
//! writes normalize first and always replace the whole blob.

use serde_json::Value;
use tracing::warn;

use pagegate_core::{normalize_settings, Group, GroupId, GroupSet, PageId};
use pagegate_store::SettingsStore;

use crate::error::Result;

/// The settings key the group set lives under.
pub const SETTINGS_KEY: &str = "pagegate.settings";

/// Typed access to the stored group set.
pub struct GroupStore<S> {
    store: S,
}

impl<S: SettingsStore> GroupStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the current group set.
    ///
    /// A missing blob, a read failure, or an undecodable blob all come
    /// back as the default (fully disabled) set; the gate must keep
    /// deciding even when settings are unavailable.
    pub async fn load(&self) -> GroupSet {
        let value = match self.store.read(SETTINGS_KEY).await {
            Ok(Some(value)) => value,
            Ok(None) => return GroupSet::default(),
            Err(error) => {
                warn!(%error, "settings read failed, treating as unset");
                return GroupSet::default();
            }
        };

        match serde_json::from_value(value) {
            Ok(set) => set,
            Err(error) => {
                warn!(%error, "stored settings undecodable, treating as unset");
                GroupSet::default()
            }
        }
    }

    /// Find the group that protects `page`, if any.
    ///
    /// Disabled groups (empty secret) never own a page; when several
    /// enabled groups list the same page, the first slot wins.
    pub async fn find_owning_group(&self, page: PageId) -> Option<(GroupId, Group)> {
        let set = self.load().await;
        set.owner_of(page).map(|(id, group)| (id, group.clone()))
    }

    /// Normalize and persist an admin-submitted settings payload.
    ///
    /// Returns the normalized set that was stored. A write error is
    /// forgiven if the store already holds exactly the intended value,
    /// so re-submitting an unchanged form never reports failure.
    pub async fn save(&self, raw: &Value) -> Result<GroupSet> {
        let set = normalize_settings(raw)?;
        let value = serde_json::to_value(&set).map_err(pagegate_store::StoreError::from)?;

        if let Err(error) = self.store.write(SETTINGS_KEY, &value).await {
            let stored = self.store.read(SETTINGS_KEY).await.ok().flatten();
            if stored.as_ref() != Some(&value) {
                return Err(error.into());
            }
            warn!(%error, "settings write errored but stored value matches");
        }

        Ok(set)
    }
}
