pub mod colors;
pub mod config;
pub mod error;
pub mod ini;
pub mod interpolate;
pub mod logging;
pub mod shell;
pub mod value;

pub use colors::Colors;
pub use config::{
    find_settings_file, generate_init_file, load_settings, merge_convert_options,
    CliConvertOptions, ConfigError, ConvertSection, SettingsToml, SETTINGS_TEMPLATE,
};
pub use error::{ConvertError, InterpolationError, ParseError};
pub use ini::{parse_file, parse_str, Document, Entry, Section, DEFAULT_SECTION};
pub use logging::init_logging;
pub use shell::{quote, sanitize_key, var_name, Assignment};
pub use value::Value;

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

/// Options controlling a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Expand `%(name)s` references (default: true)
    pub interpolate: bool,
    /// Decode `[...]`/`"..."` values as JSON literals (default: true)
    pub decode_json: bool,
    /// Section inherited by every other section (default: "DEFAULT")
    pub default_section: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            interpolate: true,
            decode_json: true,
            default_section: DEFAULT_SECTION.to_string(),
        }
    }
}

/// Main entry point: read the INI file at `path` and build one assignment per key.
///
/// Nothing is written here; on error no assignment is returned at all.
pub fn convert(path: &Path, options: &ConvertOptions) -> Result<Vec<Assignment>, ConvertError> {
    let doc = parse_file(path, &options.default_section)?;
    convert_document(&doc, options)
}

/// Build assignments for every key of every section, in document order.
pub fn convert_document(
    doc: &Document,
    options: &ConvertOptions,
) -> Result<Vec<Assignment>, ConvertError> {
    let mut assignments = Vec::new();
    let mut seen = HashSet::new();

    for section in doc.sections() {
        for entry in doc.items(section) {
            let raw = if options.interpolate {
                interpolate::interpolate(doc, section, &entry.key, &entry.value)?
            } else {
                entry.value.clone()
            };

            let value = if options.decode_json {
                Value::infer(&raw)
            } else {
                Value::Scalar(raw)
            };

            let name = var_name(section.name(), &entry.key);
            if !shell::is_identifier(&name) {
                warn!(
                    section = section.name(),
                    key = %entry.key,
                    var = %name,
                    "variable name is not a valid shell identifier"
                );
            }
            if !seen.insert(name.clone()) {
                warn!(
                    section = section.name(),
                    key = %entry.key,
                    var = %name,
                    "variable assigned more than once; the last line wins when sourced"
                );
            }

            debug!(var = %name, sequence = value.is_sequence(), "emit");
            assignments.push(Assignment::new(name, value)?);
        }
    }

    Ok(assignments)
}

/// Write assignments one per line.
pub fn write_assignments<W: Write>(out: &mut W, assignments: &[Assignment]) -> io::Result<()> {
    for assignment in assignments {
        writeln!(out, "{assignment}")?;
    }
    out.flush()
}
