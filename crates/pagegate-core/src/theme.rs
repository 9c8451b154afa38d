//! Presentation themes for the credential prompt.
//!
//! The set is closed: any input outside it normalizes to [`Theme::Default`].
//! Each theme carries the gradient CSS the prompt renderer applies; the
//! strings are data, the rendering itself lives outside this crate.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Visual style applied to the credential prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Sunset,
    Forest,
    Cosmic,
    Fire,
}

impl Theme {
    /// All themes, in presentation order.
    pub const ALL: [Theme; 5] = [
        Theme::Default,
        Theme::Sunset,
        Theme::Forest,
        Theme::Cosmic,
        Theme::Fire,
    ];

    /// Normalize a raw name. Anything unknown becomes `Default`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "default" => Theme::Default,
            "sunset" => Theme::Sunset,
            "forest" => Theme::Forest,
            "cosmic" => Theme::Cosmic,
            "fire" => Theme::Fire,
            _ => Theme::Default,
        }
    }

    /// Stable wire name.
    pub const fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
            Theme::Cosmic => "cosmic",
            Theme::Fire => "fire",
        }
    }

    /// Human-readable label shown in the admin picker.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Theme::Default => "Ocean Breeze (Default)",
            Theme::Sunset => "Sunset Vibes",
            Theme::Forest => "Forest Mystique",
            Theme::Cosmic => "Cosmic Dreams",
            Theme::Fire => "Fire Storm",
        }
    }

    /// Page-background gradient for the credential prompt.
    pub const fn background_css(&self) -> &'static str {
        match self {
            Theme::Default => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Theme::Sunset => "linear-gradient(135deg, #ff9a9e 0%, #fecfef 50%, #fecfef 100%)",
            Theme::Forest => "linear-gradient(135deg, #134e5e 0%, #71b280 100%)",
            Theme::Cosmic => "linear-gradient(135deg, #2c1810 0%, #8b4d77 50%, #d4af37 100%)",
            Theme::Fire => "linear-gradient(135deg, #ff4e50 0%, #f9d423 100%)",
        }
    }

    /// Submit-button gradient for the credential prompt.
    pub const fn button_css(&self) -> &'static str {
        match self {
            Theme::Default => "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            Theme::Sunset => "linear-gradient(135deg, #ff9a9e 0%, #fad0c4 100%)",
            Theme::Forest => "linear-gradient(135deg, #00b894 0%, #00a085 100%)",
            Theme::Cosmic => "linear-gradient(135deg, #8b4d77 0%, #d4af37 100%)",
            Theme::Fire => "linear-gradient(135deg, #fd79a8 0%, #fdcb6e 100%)",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Deserialization is lenient: non-string and unknown values normalize to
// the default theme instead of failing, so old or hand-edited settings
// blobs keep loading.
impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Theme::from_name).unwrap_or_default())
    }
}
