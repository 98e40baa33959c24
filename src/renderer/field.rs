//! Field descriptors mapping result fields to template files

/// Template file type a field is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    /// Plain text, read from `{field}.txt`
    Text,
    /// HTML, read from `{stem}.html`
    Html { stem: &'static str },
}

impl TemplateFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateFormat::Text => "txt",
            TemplateFormat::Html { .. } => "html",
        }
    }
}

/// One declared output field of a rendered message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the result shape
    pub name: &'static str,
    /// Template file the field is rendered from
    pub format: TemplateFormat,
}

impl FieldSpec {
    /// A plain text field rendered from `{name}.txt`
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            format: TemplateFormat::Text,
        }
    }

    /// An HTML field rendered from `{stem}.html`
    pub const fn html(name: &'static str, stem: &'static str) -> Self {
        Self {
            name,
            format: TemplateFormat::Html { stem },
        }
    }

    /// Template file name for this field
    pub fn filename(&self) -> String {
        match self.format {
            TemplateFormat::Text => format!("{}.txt", self.name),
            TemplateFormat::Html { stem } => format!("{}.html", stem),
        }
    }
}
