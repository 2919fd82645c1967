//! TOML schema definitions for ini2sh.toml

use serde::Deserialize;

/// Root structure for ini2sh.toml
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SettingsToml {
    /// Conversion settings
    #[serde(default)]
    pub convert: ConvertSection,
}

/// `[convert]` section in ini2sh.toml
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ConvertSection {
    /// Expand `%(name)s` references (default: true)
    pub interpolate: Option<bool>,

    /// Decode `[...]` and `"..."` values as JSON literals (default: true)
    pub decode_json: Option<bool>,

    /// Section inherited by all others (default: "DEFAULT")
    pub default_section: Option<String>,
}
