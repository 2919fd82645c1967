//! Shell variable naming and POSIX quoting

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;
use crate::value::Value;

/// Characters in a key that are replaced with `_` to form a variable name.
pub const UNSAFE_KEY_CHARS: &[char] = &[
    '^', '°', '!', '"', '§', '$', '%', '&', '/', '(', ')', '[', ']', '{', '}', '=', '?', ';',
    ':', ',', '.', '-', '<', '>', '|', '\'',
];

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

/// Replace every unsafe character in `key` with `_`.
pub fn sanitize_key(key: &str) -> String {
    key.replace(UNSAFE_KEY_CHARS, "_")
}

/// `SECTION_KEY`, uppercased, with the key sanitized.
pub fn var_name(section: &str, key: &str) -> String {
    format!("{}_{}", section.to_uppercase(), sanitize_key(key).to_uppercase())
}

/// Whether `name` is a portable shell identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Quote `s` so a POSIX shell reads it back as exactly one word equal to `s`.
///
/// Returns `None` for strings containing NUL, which no shell word can hold.
pub fn quote(s: &str) -> Option<Cow<'_, str>> {
    shlex::try_quote(s).ok()
}

/// One `NAME=value` or `NAME=(a b c)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: Value,
    rendered: String,
}

impl Assignment {
    pub fn new(name: String, value: Value) -> Result<Self, ConvertError> {
        let unquotable = || ConvertError::Unquotable { var: name.clone() };

        let rhs = match &value {
            Value::Scalar(s) => quote(s).ok_or_else(unquotable)?.into_owned(),
            Value::Sequence(items) => {
                let quoted = items
                    .iter()
                    .map(|item| quote(item).ok_or_else(unquotable))
                    .collect::<Result<Vec<_>, _>>()?;
                format!("({})", quoted.join(" "))
            }
        };

        let rendered = format!("{name}={rhs}");
        Ok(Self {
            name,
            value,
            rendered,
        })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}
