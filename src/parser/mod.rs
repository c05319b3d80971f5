//! Text-to-point parsing.
//!
//! The default grammar is a stream of whitespace-separated tokens: each
//! record is an `x y` pair, optionally followed by a `{R,G,B}` colour
//! specifier and then a `[S]` size specifier. Leading `##KEY: VALUE` header
//! lines adjust the [`ParserConfig`]; a `FORMAT` directive switches the body
//! to line-based records matched by a [`RecordTemplate`].

mod header;
mod specifier;
mod template;

pub use header::{split_header, Directive, Header};
pub use template::{RecordFields, RecordTemplate};

use crate::data::{Point, Rgb, DEFAULT_POINT_SIZE};
use crate::error::{PlotError, Result};

/// Parser settings. Directives derive a new value instead of mutating one.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// Colour for points without a `{R,G,B}` specifier.
    pub default_color: Rgb,
    /// Size for points without a `[S]` specifier.
    pub default_size: u32,
    /// Line template; `None` selects the token grammar.
    pub record_template: Option<RecordTemplate>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_color: Rgb::BLACK,
            default_size: DEFAULT_POINT_SIZE,
            record_template: None,
        }
    }
}

impl ParserConfig {
    /// Set the default colour.
    pub fn with_default_color(mut self, color: Rgb) -> Self {
        self.default_color = color;
        self
    }

    /// Set the default size.
    pub fn with_default_size(mut self, size: u32) -> Self {
        self.default_size = size;
        self
    }

    /// Set the line template.
    pub fn with_record_template(mut self, template: RecordTemplate) -> Self {
        self.record_template = Some(template);
        self
    }

    /// Derive the configuration produced by a header directive.
    pub fn apply(self, directive: &Directive) -> Result<Self> {
        let invalid = || PlotError::invalid_directive(&directive.key, &directive.value);

        match directive.key.as_str() {
            "FORMAT" => Ok(self.with_record_template(RecordTemplate::parse(&directive.value)?)),
            "SIZEDEFAULT" => {
                let size = directive.value.parse().map_err(|_| invalid())?;
                Ok(self.with_default_size(size))
            },
            "COLORDEFAULT" => {
                let color = specifier::find_color(&directive.value).ok_or_else(invalid)?;
                Ok(self.with_default_color(color))
            },
            other => {
                tracing::warn!("Ignoring unknown directive {}", other);
                Ok(self)
            },
        }
    }

    /// Base configuration from command-line options. Unset options keep the
    /// built-in defaults; header directives in the file still override these.
    pub fn from_options(
        size: Option<u32>,
        color: Option<Rgb>,
        template: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();
        if let Some(size) = size {
            config = config.with_default_size(size);
        }
        if let Some(color) = color {
            config = config.with_default_color(color);
        }
        if let Some(template) = template {
            config = config.with_record_template(RecordTemplate::parse(template)?);
        }
        Ok(config)
    }

    /// Parse a colour in `{R,G,B}` form, as accepted on the command line.
    pub fn parse_color(text: &str) -> Option<Rgb> {
        specifier::color_from_token(text.trim())
    }
}

/// Turns file contents into points.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    config: ParserConfig,
}

impl RecordParser {
    /// Create a parser with a base configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a whole file. Any malformed record fails the entire parse.
    pub fn parse(&self, content: &str) -> Result<Vec<Point>> {
        let header = split_header(content);

        let mut config = self.config.clone();
        for directive in &header.directives {
            tracing::debug!("Directive {}: {}", directive.key, directive.value);
            config = config.apply(directive)?;
        }

        let points = match &config.record_template {
            Some(template) => parse_lines(&config, template, header.body, header.body_line)?,
            None => parse_tokens(&config, header.body)?,
        };

        tracing::info!("Parsed {} points", points.len());
        Ok(points)
    }
}

fn parse_tokens(config: &ParserConfig, body: &str) -> Result<Vec<Point>> {
    let mut tokens = body.split_whitespace().peekable();
    let mut points = Vec::new();
    let mut record = 0;

    while let Some(x_token) = tokens.next() {
        record += 1;
        let x = parse_coordinate(record, "x", x_token)?;
        let y_token = tokens.next().ok_or_else(|| {
            malformed(
                record,
                format!("x coordinate {x_token:?} has no matching y coordinate"),
            )
        })?;
        let y = parse_coordinate(record, "y", y_token)?;

        let mut point = Point::new(x, y)
            .with_color(config.default_color)
            .with_size(config.default_size);

        // A size specifier is only recognised after a colour specifier.
        if let Some(color) = tokens.peek().and_then(|t| specifier::color_from_token(t)) {
            tokens.next();
            point.color = color;

            if let Some(token) = tokens.peek().copied() {
                if let Some(digits) = specifier::size_digits_from_token(token) {
                    point.size = parse_size(record, token, digits)?;
                    tokens.next();
                }
            }
        }

        points.push(point);
    }

    Ok(points)
}

fn parse_lines(
    config: &ParserConfig,
    template: &RecordTemplate,
    body: &str,
    first_line: usize,
) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (i, line) in body.lines().enumerate() {
        let line_no = first_line + i;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let Some(fields) = template.captures(line) else {
            tracing::debug!("Line {} does not match {:?}, skipping", line_no, template.as_str());
            continue;
        };

        let x = parse_coordinate(line_no, "x", fields.x.trim())?;
        let y = parse_coordinate(line_no, "y", fields.y.trim())?;
        let mut point = Point::new(x, y)
            .with_color(config.default_color)
            .with_size(config.default_size);

        if let Some(trailing) = fields.trailing {
            if let Some(color) = specifier::find_color(trailing) {
                point.color = color;
            }
            if let Some(digits) = specifier::find_size_digits(trailing) {
                point.size = parse_size(line_no, trailing, digits)?;
            }
        }

        points.push(point);
    }

    Ok(points)
}

fn parse_coordinate(record: usize, axis: &str, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(
            record,
            format!("expected {axis} coordinate, found {token:?}"),
        )),
    }
}

fn parse_size(record: usize, token: &str, digits: &str) -> Result<u32> {
    digits
        .parse()
        .map_err(|_| malformed(record, format!("size out of range in {token:?}")))
}

fn malformed(record: usize, reason: String) -> PlotError {
    tracing::error!("Malformed record {}: {}", record, reason);
    PlotError::malformed(record, reason)
}
