//! INI document parsing
//!
//! Supported dialect:
//! - `[name]` section headers
//! - `key = value` and `key: value` pairs (first `=` or `:` wins)
//! - full-line `#` and `;` comments
//! - multi-line values continued by deeper indentation
//! - a defaults section whose keys every other section inherits

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, ParseError};

/// Name of the inherited defaults section unless configured otherwise.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A single `key = value` pair as it appeared in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    /// Line the key was last assigned on
    pub line: usize,
}

/// A named section with its entries in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key, ignoring case.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].value.as_str())
    }

    fn position(&self, key: &str) -> Option<usize> {
        let folded = key.to_lowercase();
        self.entries
            .iter()
            .position(|e| e.key.to_lowercase() == folded)
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    fn insert(&mut self, key: String, value: String, line: usize) {
        match self.position(&key) {
            Some(i) => self.entries[i] = Entry { key, value, line },
            None => self.entries.push(Entry { key, value, line }),
        }
    }
}

/// Parsed INI file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    defaults: Section,
    sections: Vec<Section>,
}

impl Document {
    /// The inherited defaults section. Never part of [`Document::sections`].
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Effective entries of a section: the defaults first (in defaults order,
    /// overridden by the section's own value), then the section's own
    /// remaining keys in document order.
    pub fn items<'a>(&'a self, section: &'a Section) -> Vec<&'a Entry> {
        let mut items: Vec<&Entry> = self
            .defaults
            .entries
            .iter()
            .map(|d| {
                section
                    .position(&d.key)
                    .map_or(d, |i| &section.entries[i])
            })
            .collect();

        items.extend(
            section
                .entries
                .iter()
                .filter(|e| self.defaults.position(&e.key).is_none()),
        );

        items
    }

    /// Resolve a key for interpolation: the section first, then the defaults.
    pub fn lookup<'a>(&'a self, section: &'a Section, key: &str) -> Option<&'a str> {
        section.get(key).or_else(|| self.defaults.get(key))
    }
}

/// Value being accumulated while continuation lines may still follow.
struct Pending {
    section: Option<usize>,
    key: String,
    lines: Vec<String>,
    indent: usize,
    line: usize,
}

struct Parser<'a> {
    source_name: &'a str,
    default_section: &'a str,
    defaults: Section,
    sections: Vec<Section>,
    /// Index into `sections`, or `None` for the defaults section
    current: Option<Option<usize>>,
    pending: Option<Pending>,
}

impl<'a> Parser<'a> {
    fn new(source_name: &'a str, default_section: &'a str) -> Self {
        Self {
            source_name,
            default_section,
            defaults: Section::new(default_section),
            sections: Vec::new(),
            current: None,
            pending: None,
        }
    }

    fn section_mut(&mut self, index: Option<usize>) -> &mut Section {
        match index {
            Some(i) => &mut self.sections[i],
            None => &mut self.defaults,
        }
    }

    fn flush(&mut self) {
        if let Some(p) = self.pending.take() {
            let value = p.lines.join("\n").trim_end().to_string();
            self.section_mut(p.section).insert(p.key, value, p.line);
        }
    }

    fn open_section(&mut self, name: &str) {
        if name == self.default_section {
            self.current = Some(None);
            return;
        }
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(i) => i,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        self.current = Some(Some(index));
    }

    fn feed(&mut self, lineno: usize, raw: &str) -> Result<(), ParseError> {
        let text = raw.trim();

        if text.starts_with('#') || text.starts_with(';') {
            return Ok(());
        }

        if text.is_empty() {
            if let Some(p) = self.pending.as_mut() {
                p.lines.push(String::new());
            }
            return Ok(());
        }

        let indent = raw.len() - raw.trim_start().len();

        if let Some(p) = self.pending.as_mut() {
            if indent > p.indent {
                p.lines.push(text.to_string());
                return Ok(());
            }
        }
        self.flush();

        if let Some(name) = section_header(text) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ParseError::EmptySectionName {
                    source_name: self.source_name.to_string(),
                    line: lineno,
                });
            }
            self.open_section(name);
            return Ok(());
        }

        let Some(section) = self.current else {
            return Err(ParseError::MissingSectionHeader {
                source_name: self.source_name.to_string(),
                line: lineno,
                text: text.to_string(),
            });
        };

        let Some(split) = text.find(['=', ':']) else {
            return Err(ParseError::InvalidLine {
                source_name: self.source_name.to_string(),
                line: lineno,
                text: text.to_string(),
            });
        };

        let key = text[..split].trim();
        if key.is_empty() {
            return Err(ParseError::EmptyKey {
                source_name: self.source_name.to_string(),
                line: lineno,
                text: text.to_string(),
            });
        }
        let value = text[split + 1..].trim();

        self.pending = Some(Pending {
            section,
            key: key.to_string(),
            lines: vec![value.to_string()],
            indent,
            line: lineno,
        });

        Ok(())
    }

    fn finish(mut self) -> Document {
        self.flush();
        Document {
            defaults: self.defaults,
            sections: self.sections,
        }
    }
}

/// Return the header name if `text` is a `[name]` line.
fn section_header(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    Some(&rest[..end])
}

/// Parse INI text. `source_name` labels errors, usually the file path.
pub fn parse_str(
    content: &str,
    source_name: &str,
    default_section: &str,
) -> Result<Document, ParseError> {
    let mut parser = Parser::new(source_name, default_section);
    for (i, line) in content.lines().enumerate() {
        parser.feed(i + 1, line)?;
    }
    let doc = parser.finish();
    debug!(
        source = source_name,
        sections = doc.sections.len(),
        defaults = doc.defaults.entries.len(),
        "parsed INI document"
    );
    Ok(doc)
}

/// Read and parse an INI file.
pub fn parse_file(path: &Path, default_section: &str) -> Result<Document, ConvertError> {
    let label = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Io {
        path: label.clone(),
        source,
    })?;
    Ok(parse_str(&content, &label, default_section)?)
}
