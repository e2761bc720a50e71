//! URL template with named placeholders.
//!
//! A template such as `https://host/{prefix}{code}{suffix}?wid={wid}` is
//! parsed once into literal and placeholder segments; rendering inserts the
//! variant fields verbatim, with no escaping.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::codes::ProductCode;
use crate::variant::VariantDescriptor;

/// Template used by the scene7 image service the tool was built for.
pub const DEFAULT_URL_TEMPLATE: &str = "https://underarmour.scene7.com/is/image/Underarmour/\
{prefix}{code}{suffix}?qty={qty}&size={size}&wid={wid}&hei={hei}&fmt={fmt}&extend={extend}\
&{column1}&{column2}";

/// Values a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Prefix,
    Code,
    Suffix,
    Qty,
    Size,
    Wid,
    Hei,
    Fmt,
    Extend,
    Column1,
    Column2,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "prefix" => Placeholder::Prefix,
            "code" => Placeholder::Code,
            "suffix" => Placeholder::Suffix,
            "qty" => Placeholder::Qty,
            "size" => Placeholder::Size,
            "wid" => Placeholder::Wid,
            "hei" => Placeholder::Hei,
            "fmt" => Placeholder::Fmt,
            "extend" => Placeholder::Extend,
            "column1" => Placeholder::Column1,
            "column2" => Placeholder::Column2,
            _ => return None,
        })
    }

    fn value<'a>(self, code: &'a ProductCode, variant: &'a VariantDescriptor) -> &'a str {
        match self {
            Placeholder::Prefix => &variant.prefix,
            Placeholder::Code => code.as_str(),
            Placeholder::Suffix => &variant.suffix,
            Placeholder::Qty => &variant.quantity,
            Placeholder::Size => &variant.size,
            Placeholder::Wid => &variant.width,
            Placeholder::Hei => &variant.height,
            Placeholder::Fmt => &variant.format,
            Placeholder::Extend => &variant.extend,
            Placeholder::Column1 => &variant.column1,
            Placeholder::Column2 => &variant.column2,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("unknown placeholder {{{0}}} in URL template")]
    UnknownPlaceholder(String),
    #[error("unterminated placeholder at byte {0} in URL template")]
    Unterminated(usize),
    #[error("URL template has no {{code}} placeholder")]
    MissingCode,
    #[error("URL template does not produce a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl UrlTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or(TemplateError::Unterminated(offset + open))?;
            let name = &after[..close];
            let slot = Placeholder::from_name(name)
                .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
            segments.push(Segment::Slot(slot));
            let consumed = open + 1 + close + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if !segments.contains(&Segment::Slot(Placeholder::Code)) {
            return Err(TemplateError::MissingCode);
        }

        let template = Self {
            source: source.to_string(),
            segments,
        };
        let probe = ProductCode::parse("probe").ok_or(TemplateError::MissingCode)?;
        url::Url::parse(&template.render(&probe, &VariantDescriptor::default()))?;
        Ok(template)
    }

    /// Fills every placeholder from `code` and `variant`.
    pub fn render(&self, code: &ProductCode, variant: &VariantDescriptor) -> String {
        let mut out = String::with_capacity(self.source.len() + 32);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => out.push_str(slot.value(code, variant)),
            }
        }
        out
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for UrlTemplate {
    fn default() -> Self {
        Self {
            source: DEFAULT_URL_TEMPLATE.to_string(),
            segments: Self::parse(DEFAULT_URL_TEMPLATE)
                .map(|t| t.segments)
                .unwrap_or_default(),
        }
    }
}

impl FromStr for UrlTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
