use thiserror::Error;

use crate::block::{Block, Inline};
use crate::card::{
    Action, AdaptiveCard, ColumnDefinition, Element, FontSize, FontType, FontWeight, RowStyle,
    TableCell, TableRow, TextColor, TextRun,
};

/// Error raised when the token tree contains a construct the card mapping
/// does not cover. Conversion is fail-fast: the first unsupported token
/// aborts the whole pass, whatever its position.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConvertError {
    #[error("can't convert {kind} block: {raw:?}")]
    UnsupportedBlock { kind: &'static str, raw: String },
    #[error("can't convert {kind} inline: {raw:?}")]
    UnsupportedInline { kind: &'static str, raw: String },
}

/// Convert a block token sequence into a complete card document.
pub fn blocks_to_card(blocks: &[Block]) -> Result<AdaptiveCard, ConvertError> {
    let mut builder = CardBuilder::new();
    builder.push_blocks(blocks)?;
    let mut card = AdaptiveCard::new();
    card.body = builder.finish();
    Ok(card)
}

/// Single-pass builder for a card body. Carries the cross-sibling state:
/// a separator deferred by a rule token, and (through the body's tail) the
/// spacing target for blank-line runs.
struct CardBuilder {
    body: Vec<Element>,
    pending_separator: bool,
}

impl CardBuilder {
    fn new() -> Self {
        Self {
            body: Vec::new(),
            pending_separator: false,
        }
    }

    fn push_blocks(&mut self, blocks: &[Block]) -> Result<(), ConvertError> {
        for block in blocks {
            match block {
                Block::Space { .. } => self.add_space(),
                Block::Rule { .. } => self.add_rule(),
                other => self.push(element_for(other)?),
            }
        }
        Ok(())
    }

    /// Append an element, stamping any deferred separator onto it.
    fn push(&mut self, mut element: Element) {
        if self.pending_separator {
            element.separator = true;
            self.pending_separator = false;
        }
        self.body.push(element);
    }

    /// Blank-line run: escalate the spacing of the most recent element. With
    /// nothing appended yet, an empty container is appended first so the gap
    /// has somewhere to land.
    fn add_space(&mut self) {
        if self.body.is_empty() {
            self.push(Element::container(Vec::new()));
        }
        if let Some(last) = self.body.last_mut() {
            last.spacing = last.spacing.escalate();
        }
    }

    /// Horizontal rule: defer a separator onto the next appended element.
    fn add_rule(&mut self) {
        self.pending_separator = true;
    }

    /// Flush a still-deferred separator into an empty bordered container so
    /// a trailing rule stays visible in the output.
    fn finish(mut self) -> Vec<Element> {
        if self.pending_separator {
            self.push(Element::container(Vec::new()).with_border(true));
        }
        self.body
    }
}

fn element_for(block: &Block) -> Result<Element, ConvertError> {
    match block {
        Block::Heading { level, content, .. } => {
            let size = heading_size(*level);
            let runs = inline_runs(content)?
                .into_iter()
                .map(|run| run.with_size(size).with_weight(FontWeight::Bolder))
                .collect();
            Ok(Element::rich_text(runs))
        }
        Block::Paragraph { content, .. } => Ok(Element::rich_text(inline_runs(content)?)),
        Block::List { raw } => Ok(Element::text_block(raw.clone())),
        Block::CodeBlock {
            language, content, ..
        } => Ok(Element::code_block(content.clone(), language.clone())),
        Block::Table { headers, rows, .. } => {
            let columns = headers.iter().map(|_| ColumnDefinition::default()).collect();
            let header = table_row(headers)?.with_style(RowStyle::Emphasis);
            let mut table_rows = vec![header];
            for row in rows {
                table_rows.push(table_row(row)?);
            }
            Ok(Element::table(columns, table_rows))
        }
        Block::Blockquote { children, .. } => {
            let mut builder = CardBuilder::new();
            builder.push_blocks(children)?;
            Ok(Element::container(builder.finish()).with_border(true))
        }
        Block::Image {
            href, title, text, ..
        } => {
            let alt = title.clone().unwrap_or_else(|| text.clone());
            Ok(Element::image(href.clone(), Some(alt)))
        }
        Block::Html { raw } => Ok(Element::text_block(raw.clone())),
        Block::Def { href, title, .. } => {
            let label = title.clone().unwrap_or_else(|| href.clone());
            Ok(Element::rich_text(vec![link_run(label, href.clone())]))
        }
        other => Err(ConvertError::UnsupportedBlock {
            kind: other.kind(),
            raw: other.raw().to_string(),
        }),
    }
}

fn table_row(cells: &[Vec<Inline>]) -> Result<TableRow, ConvertError> {
    let cells = cells
        .iter()
        .map(|cell| Ok(TableCell::new(Element::rich_text(inline_runs(cell)?))))
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(TableRow::new(cells))
}

fn heading_size(level: u8) -> FontSize {
    match level {
        1 => FontSize::ExtraLarge,
        2 => FontSize::Large,
        3 => FontSize::Medium,
        4 => FontSize::Default,
        _ => FontSize::Small,
    }
}

/// Map inline tokens to styled text runs. Stateless; fails on the first token
/// without a run form.
fn inline_runs(inlines: &[Inline]) -> Result<Vec<TextRun>, ConvertError> {
    let mut runs = Vec::new();
    for inline in inlines {
        match inline {
            Inline::Text { text, .. } | Inline::Escape { text, .. } => {
                runs.push(TextRun::new(text.clone()));
            }
            Inline::Bold { text, .. } => {
                runs.push(TextRun::new(text.clone()).with_weight(FontWeight::Bolder));
            }
            Inline::Italic { text, .. } => {
                runs.push(TextRun::new(text.clone()).with_italic(true));
            }
            Inline::Strikethrough { text, .. } => {
                runs.push(TextRun::new(text.clone()).with_strikethrough(true));
            }
            Inline::Link { text, href, .. } => {
                runs.push(link_run(text.clone(), href.clone()));
            }
            Inline::Code { text, .. } => {
                runs.push(TextRun::new(text.clone()).with_font_type(FontType::Monospace));
            }
            Inline::Html { raw } => {
                runs.push(TextRun::new(raw.clone()).with_font_type(FontType::Monospace));
            }
            Inline::Image {
                href, title, text, ..
            } => {
                // no run form of its own; keep the content as a link instead
                // of dropping it
                let label = title.clone().unwrap_or_else(|| text.clone());
                runs.push(link_run(label, href.clone()));
            }
            other => {
                return Err(ConvertError::UnsupportedInline {
                    kind: other.kind(),
                    raw: other.raw().to_string(),
                });
            }
        }
    }
    Ok(runs)
}

fn link_run(text: String, href: String) -> TextRun {
    TextRun::new(text)
        .with_color(TextColor::Accent)
        .with_select_action(Action::open_url(href))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{ElementKind, Spacing};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(s: &str) -> Inline {
        Inline::Text {
            text: s.into(),
            raw: s.into(),
        }
    }

    fn paragraph(s: &str) -> Block {
        Block::Paragraph {
            content: vec![text(s)],
            raw: format!("{s}\n"),
        }
    }

    fn heading(level: u8, s: &str) -> Block {
        Block::Heading {
            level,
            content: vec![text(s)],
            raw: format!("{} {s}\n", "#".repeat(level as usize)),
        }
    }

    fn space() -> Block {
        Block::Space { raw: "\n".into() }
    }

    fn rule() -> Block {
        Block::Rule { raw: "---\n".into() }
    }

    fn body(blocks: &[Block]) -> Vec<Element> {
        blocks_to_card(blocks).unwrap().body
    }

    #[test]
    fn empty_sequence_yields_empty_body() {
        assert_eq!(body(&[]), Vec::<Element>::new());
    }

    #[test]
    fn paragraph_maps_to_rich_text() {
        assert_eq!(
            body(&[paragraph("plain")]),
            vec![Element::rich_text(vec![TextRun::new("plain")])]
        );
    }

    #[test]
    fn rule_defers_separator_to_next_element() {
        let mut b = Element::rich_text(vec![TextRun::new("B")]);
        b.separator = true;
        assert_eq!(
            body(&[paragraph("A"), rule(), paragraph("B")]),
            vec![Element::rich_text(vec![TextRun::new("A")]), b]
        );
    }

    #[test]
    fn separator_waits_through_blank_runs() {
        let mut a = Element::rich_text(vec![TextRun::new("A")]);
        a.spacing = Spacing::ExtraSmall;
        let mut b = Element::rich_text(vec![TextRun::new("B")]);
        b.separator = true;
        assert_eq!(
            body(&[paragraph("A"), rule(), space(), paragraph("B")]),
            vec![a, b]
        );
    }

    #[test]
    fn trailing_rule_flushes_bordered_placeholder() {
        let mut placeholder = Element::container(Vec::new()).with_border(true);
        placeholder.separator = true;
        assert_eq!(
            body(&[paragraph("A"), rule()]),
            vec![Element::rich_text(vec![TextRun::new("A")]), placeholder]
        );
    }

    #[test]
    fn rule_only_sequence_flushes_placeholder() {
        let mut placeholder = Element::container(Vec::new()).with_border(true);
        placeholder.separator = true;
        assert_eq!(body(&[rule()]), vec![placeholder]);
    }

    #[test]
    fn blank_runs_escalate_spacing_of_preceding_element() {
        let mut title = Element::rich_text(vec![
            TextRun::new("Title")
                .with_size(FontSize::ExtraLarge)
                .with_weight(FontWeight::Bolder),
        ]);
        title.spacing = Spacing::Small;
        assert_eq!(
            body(&[heading(1, "Title"), space(), space(), paragraph("Body")]),
            vec![title, Element::rich_text(vec![TextRun::new("Body")])]
        );
    }

    #[test]
    fn spacing_saturates_at_extra_large() {
        let mut blocks = vec![paragraph("A")];
        blocks.extend(std::iter::repeat_with(space).take(7));
        let body = body(&blocks);
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].spacing, Spacing::ExtraLarge);
    }

    #[test]
    fn space_before_any_element_creates_placeholder() {
        let mut placeholder = Element::container(Vec::new());
        placeholder.spacing = Spacing::ExtraSmall;
        assert_eq!(body(&[space()]), vec![placeholder]);
    }

    #[test]
    fn pending_separator_lands_on_space_placeholder() {
        let mut placeholder = Element::container(Vec::new());
        placeholder.spacing = Spacing::ExtraSmall;
        placeholder.separator = true;
        assert_eq!(body(&[rule(), space()]), vec![placeholder]);
    }

    #[test]
    fn heading_sizes_follow_depth() {
        let expected = [
            (1, FontSize::ExtraLarge),
            (2, FontSize::Large),
            (3, FontSize::Medium),
            (4, FontSize::Default),
            (5, FontSize::Small),
            (6, FontSize::Small),
        ];
        for (level, size) in expected {
            let run = TextRun::new("T").with_size(size).with_weight(FontWeight::Bolder);
            assert_eq!(
                body(&[heading(level, "T")]),
                vec![Element::rich_text(vec![run])],
                "level {level}"
            );
        }
    }

    #[test]
    fn heading_styles_every_run() {
        let link = Inline::Link {
            text: "docs".into(),
            href: "https://d.example".into(),
            raw: "[docs](https://d.example)".into(),
        };
        let block = Block::Heading {
            level: 2,
            content: vec![text("See "), link],
            raw: "## See [docs](https://d.example)\n".into(),
        };
        let expected = Element::rich_text(vec![
            TextRun::new("See ")
                .with_size(FontSize::Large)
                .with_weight(FontWeight::Bolder),
            TextRun::new("docs")
                .with_color(TextColor::Accent)
                .with_select_action(Action::open_url("https://d.example"))
                .with_size(FontSize::Large)
                .with_weight(FontWeight::Bolder),
        ]);
        assert_eq!(body(&[block]), vec![expected]);
    }

    #[test]
    fn list_and_html_degrade_to_raw_text_blocks() {
        let list = Block::List {
            raw: "- one\n- two\n".into(),
        };
        let html = Block::Html {
            raw: "<div>\nx\n</div>\n".into(),
        };
        assert_eq!(
            body(&[list, html]),
            vec![
                Element::text_block("- one\n- two\n"),
                Element::text_block("<div>\nx\n</div>\n"),
            ]
        );
    }

    #[test]
    fn code_block_keeps_language() {
        let code = Block::CodeBlock {
            language: Some("rust".into()),
            content: "let x = 1;".into(),
            raw: "```rust\nlet x = 1;\n```\n".into(),
        };
        assert_eq!(
            body(&[code]),
            vec![Element::code_block("let x = 1;", Some("rust".into()))]
        );
        let plain = Block::CodeBlock {
            language: None,
            content: "x".into(),
            raw: "```\nx\n```\n".into(),
        };
        assert_eq!(body(&[plain]), vec![Element::code_block("x", None)]);
    }

    #[test]
    fn table_header_styled_and_column_defs_empty() {
        let table = Block::Table {
            headers: vec![vec![text("foo")], vec![text("bar")]],
            rows: vec![vec![vec![text("baz")], vec![text("bim")]]],
            raw: "| foo | bar |\n| --- | --- |\n| baz | bim |\n".into(),
        };
        let body = body(&[table]);
        let ElementKind::Table { columns, rows } = &body[0].kind else {
            panic!("expected a table, got {:?}", body[0].kind);
        };
        assert_eq!(columns.len(), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].style, Some(RowStyle::Emphasis));
        assert_eq!(rows[1].style, None);
        assert_eq!(rows[0].cells.len(), 2);
        assert_eq!(
            rows[1].cells[0].items,
            vec![Element::rich_text(vec![TextRun::new("baz")])]
        );
    }

    #[test]
    fn blockquote_wraps_children_in_bordered_container() {
        let quote = Block::Blockquote {
            children: vec![paragraph("q1"), space(), paragraph("q2")],
            raw: "> q1\n>\n> q2\n".into(),
        };
        let mut first = Element::rich_text(vec![TextRun::new("q1")]);
        first.spacing = Spacing::ExtraSmall;
        let expected = Element::container(vec![
            first,
            Element::rich_text(vec![TextRun::new("q2")]),
        ])
        .with_border(true);
        assert_eq!(body(&[quote]), vec![expected]);
    }

    #[test]
    fn blockquote_rule_defers_within_quote() {
        let quote = Block::Blockquote {
            children: vec![paragraph("a"), rule(), paragraph("b")],
            raw: "> a\n> ---\n> b\n".into(),
        };
        let mut second = Element::rich_text(vec![TextRun::new("b")]);
        second.separator = true;
        let expected = Element::container(vec![
            Element::rich_text(vec![TextRun::new("a")]),
            second,
        ])
        .with_border(true);
        assert_eq!(body(&[quote]), vec![expected]);
    }

    #[test]
    fn blockquote_trailing_rule_flushes_inside_quote() {
        let quote = Block::Blockquote {
            children: vec![paragraph("a"), rule()],
            raw: "> a\n> ---\n".into(),
        };
        let mut placeholder = Element::container(Vec::new()).with_border(true);
        placeholder.separator = true;
        let expected = Element::container(vec![
            Element::rich_text(vec![TextRun::new("a")]),
            placeholder,
        ])
        .with_border(true);
        assert_eq!(body(&[quote]), vec![expected]);
    }

    #[test]
    fn image_block_prefers_title_for_alt() {
        let image = Block::Image {
            href: "https://e.com/a.png".into(),
            title: Some("Title".into()),
            text: "alt".into(),
            raw: "![alt](https://e.com/a.png \"Title\")\n".into(),
        };
        assert_eq!(
            body(&[image]),
            vec![Element::image("https://e.com/a.png", Some("Title".into()))]
        );
        let untitled = Block::Image {
            href: "https://e.com/a.png".into(),
            title: None,
            text: "alt".into(),
            raw: "![alt](https://e.com/a.png)\n".into(),
        };
        assert_eq!(
            body(&[untitled]),
            vec![Element::image("https://e.com/a.png", Some("alt".into()))]
        );
    }

    #[test]
    fn def_renders_as_link() {
        let def = Block::Def {
            href: "https://e.com".into(),
            title: Some("Example".into()),
            raw: "[e]: https://e.com \"Example\"\n".into(),
        };
        assert_eq!(
            body(&[def]),
            vec![Element::rich_text(vec![
                TextRun::new("Example")
                    .with_color(TextColor::Accent)
                    .with_select_action(Action::open_url("https://e.com")),
            ])]
        );
        let bare = Block::Def {
            href: "https://e.com".into(),
            title: None,
            raw: "[e]: https://e.com\n".into(),
        };
        assert_eq!(
            body(&[bare]),
            vec![Element::rich_text(vec![
                TextRun::new("https://e.com")
                    .with_color(TextColor::Accent)
                    .with_select_action(Action::open_url("https://e.com")),
            ])]
        );
    }

    #[test]
    fn inline_styles_map_to_run_attributes() {
        let content = vec![
            Inline::Escape {
                text: "*".into(),
                raw: "\\*".into(),
            },
            Inline::Bold {
                text: "b".into(),
                raw: "**b**".into(),
            },
            Inline::Italic {
                text: "i".into(),
                raw: "_i_".into(),
            },
            Inline::Strikethrough {
                text: "s".into(),
                raw: "~~s~~".into(),
            },
            Inline::Code {
                text: "c".into(),
                raw: "`c`".into(),
            },
            Inline::Html {
                raw: "<b>".into(),
            },
        ];
        let para = Block::Paragraph {
            content,
            raw: String::new(),
        };
        let expected = Element::rich_text(vec![
            TextRun::new("*"),
            TextRun::new("b").with_weight(FontWeight::Bolder),
            TextRun::new("i").with_italic(true),
            TextRun::new("s").with_strikethrough(true),
            TextRun::new("c").with_font_type(FontType::Monospace),
            TextRun::new("<b>").with_font_type(FontType::Monospace),
        ]);
        assert_eq!(body(&[para]), vec![expected]);
    }

    #[test]
    fn inline_image_renders_as_link_run() {
        let image = Inline::Image {
            href: "https://e.com/d.png".into(),
            title: None,
            text: "diagram".into(),
            raw: "![diagram](https://e.com/d.png)".into(),
        };
        let para = Block::Paragraph {
            content: vec![text("see "), image],
            raw: String::new(),
        };
        let expected = Element::rich_text(vec![
            TextRun::new("see "),
            TextRun::new("diagram")
                .with_color(TextColor::Accent)
                .with_select_action(Action::open_url("https://e.com/d.png")),
        ]);
        assert_eq!(body(&[para]), vec![expected]);

        let titled = Inline::Image {
            href: "https://e.com/d.png".into(),
            title: Some("Diagram".into()),
            text: "alt".into(),
            raw: "![alt](https://e.com/d.png \"Diagram\")".into(),
        };
        let para = Block::Paragraph {
            content: vec![titled],
            raw: String::new(),
        };
        let expected = Element::rich_text(vec![
            TextRun::new("Diagram")
                .with_color(TextColor::Accent)
                .with_select_action(Action::open_url("https://e.com/d.png")),
        ]);
        assert_eq!(body(&[para]), vec![expected]);
    }

    #[test]
    fn unsupported_block_fails_conversion() {
        let footnote = Block::Footnote {
            label: "1".into(),
            raw: "[^1]: note\n".into(),
        };
        let expected = ConvertError::UnsupportedBlock {
            kind: "footnote",
            raw: "[^1]: note\n".into(),
        };
        assert_eq!(
            blocks_to_card(&[paragraph("A"), footnote.clone()]),
            Err(ConvertError::UnsupportedBlock {
                kind: "footnote",
                raw: "[^1]: note\n".into(),
            })
        );
        assert_eq!(blocks_to_card(&[footnote, paragraph("A")]), Err(expected));
    }

    #[test]
    fn unsupported_child_inside_blockquote_propagates() {
        let quote = Block::Blockquote {
            children: vec![Block::Footnote {
                label: "1".into(),
                raw: "[^1]: note\n".into(),
            }],
            raw: "> [^1]: note\n".into(),
        };
        assert_eq!(
            blocks_to_card(&[quote]),
            Err(ConvertError::UnsupportedBlock {
                kind: "footnote",
                raw: "[^1]: note\n".into(),
            })
        );
    }

    #[test]
    fn unsupported_inline_fails_conversion() {
        let para = Block::Paragraph {
            content: vec![
                text("a"),
                Inline::Break {
                    raw: "  \n".into(),
                },
            ],
            raw: "a  \nb\n".into(),
        };
        assert_eq!(
            blocks_to_card(&[para]),
            Err(ConvertError::UnsupportedInline {
                kind: "line break",
                raw: "  \n".into(),
            })
        );

        let para = Block::Paragraph {
            content: vec![Inline::FootnoteRef {
                label: "1".into(),
                raw: "[^1]".into(),
            }],
            raw: "[^1]\n".into(),
        };
        assert_eq!(
            blocks_to_card(&[para]),
            Err(ConvertError::UnsupportedInline {
                kind: "footnote reference",
                raw: "[^1]".into(),
            })
        );
    }

    #[test]
    fn error_messages_name_the_construct() {
        let err = ConvertError::UnsupportedBlock {
            kind: "footnote",
            raw: "[^1]: note".into(),
        };
        assert_eq!(err.to_string(), "can't convert footnote block: \"[^1]: note\"");
        let err = ConvertError::UnsupportedInline {
            kind: "line break",
            raw: "  \n".into(),
        };
        assert_eq!(err.to_string(), "can't convert line break inline: \"  \\n\"");
    }

    #[test]
    fn conversion_is_deterministic() {
        let blocks = vec![
            heading(2, "T"),
            space(),
            paragraph("body"),
            rule(),
            paragraph("tail"),
        ];
        assert_eq!(blocks_to_card(&blocks), blocks_to_card(&blocks));
    }

    #[test]
    fn empty_input_end_to_end() {
        let json = crate::markdown_to_card("").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "AdaptiveCard",
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                "version": "1.6",
                "body": [],
            })
        );
    }

    #[test]
    fn footnotes_fail_conversion_end_to_end() {
        let err = crate::markdown_to_card("hi[^1]\n\n[^1]: note").unwrap_err();
        assert_eq!(err, "can't convert footnote reference inline: \"[^1]\"");
    }

    #[test]
    fn hard_breaks_fail_conversion_end_to_end() {
        let err = crate::markdown_to_card("a  \nb").unwrap_err();
        assert!(
            err.starts_with("can't convert line break inline:"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn demo_document_end_to_end() {
        let md = "\
# Hello!

This converter turns Markdown into cards

List:
- one
- two
- three

```rust
let foo = \"bar\";
```

| foo | bar |
| --- | --- |
| baz | bim |

> This is a quote

This is **great**! _And just ok_
";
        let json = crate::markdown_to_card(md).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "AdaptiveCard",
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
                "version": "1.6",
                "body": [
                    {
                        "type": "RichTextBlock",
                        "inlines": [{
                            "type": "TextRun",
                            "text": "Hello!",
                            "size": "ExtraLarge",
                            "weight": "Bolder",
                        }],
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "RichTextBlock",
                        "inlines": [{
                            "type": "TextRun",
                            "text": "This converter turns Markdown into cards",
                        }],
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "RichTextBlock",
                        "inlines": [{ "type": "TextRun", "text": "List:" }],
                    },
                    {
                        "type": "TextBlock",
                        "text": "- one\n- two\n- three\n",
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "CodeBlock",
                        "codeSnippet": "let foo = \"bar\";",
                        "language": "rust",
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "Table",
                        "columns": [{}, {}],
                        "rows": [
                            {
                                "type": "TableRow",
                                "style": "emphasis",
                                "cells": [
                                    {
                                        "type": "TableCell",
                                        "items": [{
                                            "type": "RichTextBlock",
                                            "inlines": [{ "type": "TextRun", "text": "foo" }],
                                        }],
                                    },
                                    {
                                        "type": "TableCell",
                                        "items": [{
                                            "type": "RichTextBlock",
                                            "inlines": [{ "type": "TextRun", "text": "bar" }],
                                        }],
                                    },
                                ],
                            },
                            {
                                "type": "TableRow",
                                "cells": [
                                    {
                                        "type": "TableCell",
                                        "items": [{
                                            "type": "RichTextBlock",
                                            "inlines": [{ "type": "TextRun", "text": "baz" }],
                                        }],
                                    },
                                    {
                                        "type": "TableCell",
                                        "items": [{
                                            "type": "RichTextBlock",
                                            "inlines": [{ "type": "TextRun", "text": "bim" }],
                                        }],
                                    },
                                ],
                            },
                        ],
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "Container",
                        "items": [{
                            "type": "RichTextBlock",
                            "inlines": [{ "type": "TextRun", "text": "This is a quote" }],
                        }],
                        "showBorder": true,
                        "spacing": "ExtraSmall",
                    },
                    {
                        "type": "RichTextBlock",
                        "inlines": [
                            { "type": "TextRun", "text": "This is " },
                            { "type": "TextRun", "text": "great", "weight": "Bolder" },
                            { "type": "TextRun", "text": "! " },
                            { "type": "TextRun", "text": "And just ok", "italic": true },
                        ],
                    },
                ],
            })
        );
    }
}
