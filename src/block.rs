/// Inline formatting tokens nested inside a block's textual content.
///
/// `Break` and `FootnoteRef` carry no card mapping; the converter rejects
/// them instead of dropping content silently.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text {
        text: String,
        raw: String,
    },
    /// Backslash-escaped character, already unescaped.
    Escape {
        text: String,
        raw: String,
    },
    /// Inner source text of a bold span, delimiters stripped.
    Bold {
        text: String,
        raw: String,
    },
    Italic {
        text: String,
        raw: String,
    },
    Strikethrough {
        text: String,
        raw: String,
    },
    Link {
        text: String,
        href: String,
        raw: String,
    },
    /// Inline code span.
    Code {
        text: String,
        raw: String,
    },
    /// Raw inline HTML.
    Html {
        raw: String,
    },
    Image {
        href: String,
        title: Option<String>,
        text: String,
        raw: String,
    },
    /// Hard line break.
    Break {
        raw: String,
    },
    FootnoteRef {
        label: String,
        raw: String,
    },
}

impl Inline {
    /// Name of the markdown construct, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Inline::Text { .. } => "text",
            Inline::Escape { .. } => "escape",
            Inline::Bold { .. } => "bold",
            Inline::Italic { .. } => "italic",
            Inline::Strikethrough { .. } => "strikethrough",
            Inline::Link { .. } => "link",
            Inline::Code { .. } => "code",
            Inline::Html { .. } => "html",
            Inline::Image { .. } => "image",
            Inline::Break { .. } => "line break",
            Inline::FootnoteRef { .. } => "footnote reference",
        }
    }

    /// Original source span of the token.
    pub fn raw(&self) -> &str {
        match self {
            Inline::Text { raw, .. }
            | Inline::Escape { raw, .. }
            | Inline::Bold { raw, .. }
            | Inline::Italic { raw, .. }
            | Inline::Strikethrough { raw, .. }
            | Inline::Link { raw, .. }
            | Inline::Code { raw, .. }
            | Inline::Html { raw }
            | Inline::Image { raw, .. }
            | Inline::Break { raw }
            | Inline::FootnoteRef { raw, .. } => raw,
        }
    }
}

/// Block-level tokens parsed from Markdown.
///
/// `Space` and `Rule` are markers rather than content: during conversion they
/// adjust the spacing and separator of neighboring elements instead of
/// producing elements of their own. `Footnote` has no card mapping and makes
/// the conversion fail.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A run of blank lines between sibling blocks.
    Space {
        raw: String,
    },
    /// Horizontal rule.
    Rule {
        raw: String,
    },
    Heading {
        level: u8,
        content: Vec<Inline>,
        raw: String,
    },
    Paragraph {
        content: Vec<Inline>,
        raw: String,
    },
    /// Lists keep only their raw source; there is no structural mapping.
    List {
        raw: String,
    },
    CodeBlock {
        language: Option<String>,
        content: String,
        raw: String,
    },
    Table {
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
        raw: String,
    },
    Blockquote {
        children: Vec<Block>,
        raw: String,
    },
    /// A paragraph whose only content is a single image.
    Image {
        href: String,
        title: Option<String>,
        text: String,
        raw: String,
    },
    /// Raw HTML block, kept verbatim.
    Html {
        raw: String,
    },
    /// Link reference definition.
    Def {
        href: String,
        title: Option<String>,
        raw: String,
    },
    /// Footnote definition.
    Footnote {
        label: String,
        raw: String,
    },
}

impl Block {
    /// Name of the markdown construct, used in error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Space { .. } => "space",
            Block::Rule { .. } => "rule",
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::CodeBlock { .. } => "code",
            Block::Table { .. } => "table",
            Block::Blockquote { .. } => "blockquote",
            Block::Image { .. } => "image",
            Block::Html { .. } => "html",
            Block::Def { .. } => "def",
            Block::Footnote { .. } => "footnote",
        }
    }

    /// Original source span of the token.
    pub fn raw(&self) -> &str {
        match self {
            Block::Space { raw }
            | Block::Rule { raw }
            | Block::Heading { raw, .. }
            | Block::Paragraph { raw, .. }
            | Block::List { raw }
            | Block::CodeBlock { raw, .. }
            | Block::Table { raw, .. }
            | Block::Blockquote { raw, .. }
            | Block::Image { raw, .. }
            | Block::Html { raw }
            | Block::Def { raw, .. }
            | Block::Footnote { raw, .. } => raw,
        }
    }
}
