//! Settings merging logic
//!
//! Priority: CLI args > ini2sh.toml > defaults

use crate::ConvertOptions;

use super::toml_schema::ConvertSection;

/// CLI options that can override settings file values.
///
/// Uses `Option<T>` to distinguish "not specified" from "explicitly set".
#[derive(Debug, Default)]
pub struct CliConvertOptions {
    /// If Some(true), leave `%(name)s` references alone (inverted in options)
    pub no_interpolate: Option<bool>,
    /// If Some(true), never decode JSON literals (inverted in options)
    pub no_json: Option<bool>,
    pub default_section: Option<String>,
}

/// Merge options from CLI, TOML, and defaults.
pub fn merge_convert_options(
    cli: &CliConvertOptions,
    toml: Option<&ConvertSection>,
) -> ConvertOptions {
    let defaults = ConvertOptions::default();

    ConvertOptions {
        interpolate: cli
            .no_interpolate
            .map(|no| !no)
            .or_else(|| toml.and_then(|t| t.interpolate))
            .unwrap_or(defaults.interpolate),
        decode_json: cli
            .no_json
            .map(|no| !no)
            .or_else(|| toml.and_then(|t| t.decode_json))
            .unwrap_or(defaults.decode_json),
        default_section: cli
            .default_section
            .clone()
            .or_else(|| toml.and_then(|t| t.default_section.clone()))
            .unwrap_or(defaults.default_section),
    }
}
