use serde::Serialize;

pub const SCHEMA_URL: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const DEFAULT_VERSION: &str = "1.6";

/// Root card document: the wire envelope around an ordered body of elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "type")]
    tag: &'static str,
    #[serde(rename = "$schema")]
    schema: &'static str,
    pub version: String,
    pub body: Vec<Element>,
}

impl AdaptiveCard {
    pub fn new() -> Self {
        Self {
            tag: "AdaptiveCard",
            schema: SCHEMA_URL,
            version: DEFAULT_VERSION.to_string(),
            body: Vec::new(),
        }
    }

    /// Render compact wire JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Render human-readable wire JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for AdaptiveCard {
    fn default() -> Self {
        Self::new()
    }
}

/// A body element: its concrete kind plus the attributes shared by every
/// kind. `spacing` and `separator` stay off the wire until something sets
/// them, so untouched elements keep the host's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Spacing::is_none")]
    pub spacing: Spacing,
    #[serde(skip_serializing_if = "is_false")]
    pub separator: bool,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            spacing: Spacing::None,
            separator: false,
        }
    }

    pub fn text_block(text: impl Into<String>) -> Self {
        Self::new(ElementKind::TextBlock { text: text.into() })
    }

    pub fn rich_text(inlines: Vec<TextRun>) -> Self {
        Self::new(ElementKind::RichTextBlock { inlines })
    }

    pub fn code_block(code_snippet: impl Into<String>, language: Option<String>) -> Self {
        Self::new(ElementKind::CodeBlock {
            code_snippet: code_snippet.into(),
            language,
        })
    }

    pub fn container(items: Vec<Element>) -> Self {
        Self::new(ElementKind::Container {
            items,
            show_border: false,
        })
    }

    pub fn table(columns: Vec<ColumnDefinition>, rows: Vec<TableRow>) -> Self {
        Self::new(ElementKind::Table { columns, rows })
    }

    pub fn image(url: impl Into<String>, alt_text: Option<String>) -> Self {
        Self::new(ElementKind::Image {
            url: url.into(),
            alt_text,
        })
    }

    /// Toggle the border of a container; other kinds are left unchanged.
    pub fn with_border(mut self, show: bool) -> Self {
        if let ElementKind::Container { show_border, .. } = &mut self.kind {
            *show_border = show;
        }
        self
    }
}

/// The element kinds the converter emits. Serialized internally tagged, so
/// each element carries its `"type"` discriminant inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ElementKind {
    TextBlock {
        text: String,
    },
    RichTextBlock {
        inlines: Vec<TextRun>,
    },
    CodeBlock {
        #[serde(rename = "codeSnippet")]
        code_snippet: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Container {
        items: Vec<Element>,
        #[serde(rename = "showBorder", skip_serializing_if = "is_false")]
        show_border: bool,
    },
    Table {
        columns: Vec<ColumnDefinition>,
        rows: Vec<TableRow>,
    },
    Image {
        url: String,
        #[serde(rename = "altText", skip_serializing_if = "Option::is_none")]
        alt_text: Option<String>,
    },
}

/// Per-column table configuration. Converted tables carry no column settings,
/// so this serializes as an empty object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColumnDefinition {}

/// One table row. The header row of a converted table carries the emphasis
/// style; data rows carry none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "type")]
    tag: &'static str,
    pub cells: Vec<TableCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<RowStyle>,
    #[serde(skip_serializing_if = "Spacing::is_none")]
    pub spacing: Spacing,
    #[serde(skip_serializing_if = "is_false")]
    pub separator: bool,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            tag: "TableRow",
            cells,
            style: None,
            spacing: Spacing::None,
            separator: false,
        }
    }

    pub fn with_style(mut self, style: RowStyle) -> Self {
        self.style = Some(style);
        self
    }
}

/// One table cell wrapping its content element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    #[serde(rename = "type")]
    tag: &'static str,
    pub items: Vec<Element>,
    #[serde(skip_serializing_if = "Spacing::is_none")]
    pub spacing: Spacing,
    #[serde(skip_serializing_if = "is_false")]
    pub separator: bool,
}

impl TableCell {
    pub fn new(content: Element) -> Self {
        Self {
            tag: "TableCell",
            items: vec![content],
            spacing: Spacing::None,
            separator: false,
        }
    }
}

/// A styled fragment of text inside a rich text block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRun {
    #[serde(rename = "type")]
    tag: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(rename = "fontType", skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(rename = "selectAction", skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Action>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            tag: "TextRun",
            text: text.into(),
            size: None,
            weight: None,
            italic: false,
            strikethrough: false,
            font_type: None,
            color: None,
            select_action: None,
        }
    }

    pub fn with_size(mut self, size: FontSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_strikethrough(mut self, strikethrough: bool) -> Self {
        self.strikethrough = strikethrough;
        self
    }

    pub fn with_font_type(mut self, font_type: FontType) -> Self {
        self.font_type = Some(font_type);
        self
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_select_action(mut self, action: Action) -> Self {
        self.select_action = Some(action);
        self
    }
}

/// Action attached to a text run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl { url: String },
}

impl Action {
    pub fn open_url(url: impl Into<String>) -> Self {
        Action::OpenUrl { url: url.into() }
    }
}

/// Vertical gap above an element. `None` doubles as "unset": it is skipped on
/// the wire so the host's default gap applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum Spacing {
    #[default]
    None,
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Spacing {
    /// Step to the next larger level, saturating at `ExtraLarge`.
    pub fn escalate(self) -> Spacing {
        match self {
            Spacing::None => Spacing::ExtraSmall,
            Spacing::ExtraSmall => Spacing::Small,
            Spacing::Small => Spacing::Medium,
            Spacing::Medium => Spacing::Large,
            Spacing::Large => Spacing::ExtraLarge,
            Spacing::ExtraLarge => Spacing::ExtraLarge,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Spacing::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontSize {
    Small,
    Default,
    Medium,
    Large,
    ExtraLarge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontWeight {
    Lighter,
    Default,
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontType {
    Default,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextColor {
    Default,
    Dark,
    Light,
    Accent,
    Good,
    Warning,
    Attention,
}

/// Row styles follow the container style palette; wire values are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStyle {
    Default,
    Emphasis,
    Good,
    Attention,
    Warning,
    Accent,
}

fn is_false(value: &bool) -> bool {
    !*value
}
