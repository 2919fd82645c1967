//! Template generation for `--init` command

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::file::SETTINGS_FILE;

/// Template ini2sh.toml with documentation
pub const SETTINGS_TEMPLATE: &str = r#"# ini2sh.toml - Settings for the ini2sh converter
#
# ini2sh reads an INI file and prints one shell assignment per key:
#
#   [db]                      DB_HOST=localhost
#   host = localhost    =>    DB_PORTS=(5432 5433)
#   ports = [5432, 5433]
#
# Command-line flags override these settings.

[convert]
# Expand %(name)s references to other keys of the same section or of the
# defaults section. Use %% for a literal percent sign.
# Default: true
# interpolate = true

# Decode values starting with [ or " as JSON literals. Arrays become
# shell arrays; strings are unescaped.
# Default: true
# decode_json = true

# Section whose keys are inherited by every other section. It is not
# printed on its own.
# Default: "DEFAULT"
# default_section = "DEFAULT"
"#;

/// Generate ini2sh.toml in the specified directory (or current directory if None).
///
/// Returns an error if ini2sh.toml already exists.
pub fn generate_init_file_in(dir: Option<&Path>) -> io::Result<PathBuf> {
    let path = dir.map_or_else(|| PathBuf::from(SETTINGS_FILE), |d| d.join(SETTINGS_FILE));

    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{SETTINGS_FILE} already exists"),
        ));
    }

    fs::write(&path, SETTINGS_TEMPLATE)?;
    Ok(path)
}

/// Generate ini2sh.toml in the current directory.
pub fn generate_init_file() -> io::Result<PathBuf> {
    generate_init_file_in(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_init_file_creates_file() {
        let dir = TempDir::new().unwrap();

        let path = generate_init_file_in(Some(dir.path())).unwrap();
        assert_eq!(path, dir.path().join(SETTINGS_FILE));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[convert]"));
        assert!(content.contains("default_section"));
    }

    #[test]
    fn test_generate_init_file_fails_if_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "existing").unwrap();

        let err = generate_init_file_in(Some(dir.path())).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_template_is_valid_toml() {
        let parsed: super::super::toml_schema::SettingsToml =
            toml::from_str(SETTINGS_TEMPLATE).unwrap();
        assert!(parsed.convert.interpolate.is_none());
    }
}
