//! `%(name)s` reference expansion

use std::sync::LazyLock;

use regex::Regex;

use crate::error::InterpolationError;
use crate::ini::{Document, Section};

/// Nesting limit for references that expand to further references.
pub const MAX_DEPTH: usize = 10;

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^%\(([^)]+)\)s").expect("valid reference regex"));

/// Expand references in `value`, which belongs to `key` of `section`.
///
/// `%(name)s` is replaced with the expanded value of `name` from the same
/// section (falling back to the defaults section); `%%` is a literal `%`.
pub fn interpolate(
    doc: &Document,
    section: &Section,
    key: &str,
    value: &str,
) -> Result<String, InterpolationError> {
    let mut out = String::with_capacity(value.len());
    expand(doc, section, key, value, 1, &mut out)?;
    Ok(out)
}

fn expand(
    doc: &Document,
    section: &Section,
    key: &str,
    value: &str,
    depth: usize,
    out: &mut String,
) -> Result<(), InterpolationError> {
    if depth > MAX_DEPTH {
        return Err(InterpolationError::Depth {
            section: section.name().to_string(),
            key: key.to_string(),
            max_depth: MAX_DEPTH,
        });
    }

    let mut rest = value;
    while let Some(p) = rest.find('%') {
        out.push_str(&rest[..p]);
        rest = &rest[p..];

        if let Some(tail) = rest.strip_prefix("%%") {
            out.push('%');
            rest = tail;
            continue;
        }

        let Some(caps) = REFERENCE.captures(rest) else {
            return Err(InterpolationError::Syntax {
                section: section.name().to_string(),
                key: key.to_string(),
                rest: rest.to_string(),
            });
        };
        let whole = caps.get(0).map_or(0, |m| m.end());
        let name = &caps[1];

        let Some(target) = doc.lookup(section, name) else {
            return Err(InterpolationError::Missing {
                section: section.name().to_string(),
                key: key.to_string(),
                reference: name.to_string(),
            });
        };

        if target.contains('%') {
            expand(doc, section, key, target, depth + 1, out)?;
        } else {
            out.push_str(target);
        }
        rest = &rest[whole..];
    }
    out.push_str(rest);

    Ok(())
}
