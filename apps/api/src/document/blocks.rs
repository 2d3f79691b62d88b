//! Intermediate representation of a rendered resume.
//!
//! Units follow OOXML: spacing in twentieths of a point, indentation in twips,
//! run size in half-points.

/// Left indent for bulleted and detail lines (0.5 inch).
pub const DETAIL_INDENT: i32 = 720;
/// Contact line size (10pt).
pub const CONTACT_SIZE: usize = 20;
/// Headline run size (11pt).
pub const HEADLINE_SIZE: usize = 22;
pub const SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub const fn new(before: u32, after: u32) -> Self {
        Spacing { before, after }
    }
}

/// A contiguous span of text sharing one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    /// `None` inherits the document default.
    pub size: Option<usize>,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
            size: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            bold: true,
            ..Run::plain(text)
        }
    }

    pub fn sized(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading {
        text: String,
        level: HeadingLevel,
        alignment: Alignment,
        spacing: Spacing,
    },
    Paragraph {
        runs: Vec<Run>,
        alignment: Alignment,
        indent_left: Option<i32>,
        spacing: Spacing,
    },
    /// Rendered with a literal "• " prefix rather than Word numbering.
    BulletItem {
        text: String,
        indent_left: i32,
        spacing: Spacing,
    },
}

impl Block {
    /// A left-aligned paragraph made of a single plain run.
    pub fn text(text: impl Into<String>, spacing: Spacing) -> Self {
        Block::Paragraph {
            runs: vec![Run::plain(text)],
            alignment: Alignment::Left,
            indent_left: None,
            spacing,
        }
    }

    /// An empty paragraph used to separate multi-item sections.
    pub fn spacer(after: u32) -> Self {
        Block::Paragraph {
            runs: vec![],
            alignment: Alignment::Left,
            indent_left: None,
            spacing: Spacing::new(0, after),
        }
    }

    pub fn is_heading(&self, level: HeadingLevel) -> bool {
        matches!(self, Block::Heading { level: l, .. } if *l == level)
    }

    /// Concatenated text of the block, without bullet prefixes.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } | Block::BulletItem { text, .. } => text.clone(),
            Block::Paragraph { runs, .. } => runs.iter().map(|r| r.text.as_str()).collect(),
        }
    }
}
