//! `##KEY: VALUE` header directives.

/// One header line, key upper-cased and both sides trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Directive name, e.g. `FORMAT`.
    pub key: String,
    /// Everything after the first `:`.
    pub value: String,
}

impl Directive {
    /// Parse a single header line.
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.trim().strip_prefix("##")?;
        let (key, value) = body.split_once(':')?;
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_uppercase(),
            value: value.to_string(),
        })
    }
}

/// A file split into its leading directives and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// Directives in file order.
    pub directives: Vec<Directive>,
    /// Text following the header.
    pub body: &'a str,
    /// 1-based line number of the first body line.
    pub body_line: usize,
}

/// Split leading directives (and blank lines between them) off `content`.
pub fn split_header(content: &str) -> Header<'_> {
    let mut directives = Vec::new();
    let mut offset = 0;
    let mut line_no = 1;

    for line in content.split_inclusive('\n') {
        if !line.trim().is_empty() {
            match Directive::parse(line) {
                Some(directive) => directives.push(directive),
                None => break,
            }
        }
        offset += line.len();
        line_no += 1;
    }

    Header {
        directives,
        body: &content[offset..],
        body_line: line_no,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_splits_at_first_colon() {
        let d = Directive::parse("##format: %x:%y").unwrap();
        assert_eq!(d.key, "FORMAT");
        assert_eq!(d.value, "%x:%y");
    }

    #[test]
    fn lines_without_marker_or_value_are_not_directives() {
        assert!(Directive::parse("# SIZEDEFAULT: 3").is_none());
        assert!(Directive::parse("##SIZEDEFAULT").is_none());
        assert!(Directive::parse("##SIZEDEFAULT:   ").is_none());
    }

    #[test]
    fn header_stops_at_first_data_line() {
        let content = "\n##SIZEDEFAULT: 3\r\n\n##COLORDEFAULT: {1,2,3}\n1 2\n##FORMAT: %x %y\n";
        let header = split_header(content);
        assert_eq!(header.directives.len(), 2);
        assert_eq!(header.body, "1 2\n##FORMAT: %x %y\n");
        assert_eq!(header.body_line, 5);
    }

    #[test]
    fn file_without_header_is_all_body() {
        let header = split_header("3 5\n");
        assert!(header.directives.is_empty());
        assert_eq!(header.body, "3 5\n");
        assert_eq!(header.body_line, 1);
    }
}
