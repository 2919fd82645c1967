//! Tool settings for ini2sh.
//!
//! This module provides:
//! - Loading settings from `ini2sh.toml`
//! - Settings file discovery (search upward from current directory)
//! - Merging CLI args, settings file, and defaults
//! - Template generation with `--init`

mod file;
mod init;
mod merge;
mod toml_schema;

pub use file::{find_file_upward, find_settings_file, load_settings, ConfigError, SETTINGS_FILE};
pub use init::{generate_init_file, generate_init_file_in, SETTINGS_TEMPLATE};
pub use merge::{merge_convert_options, CliConvertOptions};
pub use toml_schema::{ConvertSection, SettingsToml};
