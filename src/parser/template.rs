//! Line templates from the `FORMAT` directive.
//!
//! A template such as `(%y...%x)` describes where the coordinates sit in a
//! line. Everything except the first `%x` and the first `%y` is literal text.

use crate::error::{PlotError, Result};
use regex::Regex;
use std::fmt;

/// A compiled record template.
#[derive(Clone)]
pub struct RecordTemplate {
    source: String,
    pattern: Regex,
}

/// The pieces of a line matched by a [`RecordTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    /// Text captured for the x coordinate.
    pub x: &'a str,
    /// Text captured for the y coordinate.
    pub y: &'a str,
    /// Whitespace-separated text after the record, searched for specifiers.
    pub trailing: Option<&'a str>,
}

impl RecordTemplate {
    /// Compile a template. It must contain both `%x` and `%y`.
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = || PlotError::invalid_directive("FORMAT", template);
        let x_at = template.find("%x").ok_or_else(invalid)?;
        let y_at = template.find("%y").ok_or_else(invalid)?;

        let (first, second) = if x_at < y_at {
            ((x_at, "x"), (y_at, "y"))
        } else {
            ((y_at, "y"), (x_at, "x"))
        };

        let mut pattern = String::new();
        pattern.push_str(&regex::escape(&template[..first.0]));
        pattern.push_str(&format!("(?P<{}>.+?)", first.1));
        pattern.push_str(&regex::escape(&template[first.0 + 2..second.0]));
        pattern.push_str(&format!("(?P<{}>.+?)", second.1));
        pattern.push_str(&regex::escape(&template[second.0 + 2..]));
        pattern.push_str(r"(?:\s+(?P<trailing>.*)|$)");

        let pattern = Regex::new(&pattern).map_err(|_| invalid())?;
        Ok(Self {
            source: template.to_string(),
            pattern,
        })
    }

    /// The template text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match a line, returning `None` when the template does not apply.
    pub fn captures<'a>(&self, line: &'a str) -> Option<RecordFields<'a>> {
        let caps = self.pattern.captures(line)?;
        Some(RecordFields {
            x: caps.name("x")?.as_str(),
            y: caps.name("y")?.as_str(),
            trailing: caps.name("trailing").map(|m| m.as_str()),
        })
    }
}

impl fmt::Debug for RecordTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordTemplate").field(&self.source).finish()
    }
}

impl PartialEq for RecordTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}
