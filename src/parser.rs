use std::mem;
use std::ops::Range;

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, OffsetIter, Options, Parser, Tag, TagEnd,
};

use crate::block::{Block, Inline};

/// Parse markdown text into the block token sequence the converter consumes.
///
/// Tokens keep their raw source spans, and runs of blank lines between
/// sibling blocks become explicit `Space` tokens.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    let parser = Parser::new_ext(markdown, options);

    // Link reference definitions produce no events; collect them with their
    // spans and weave them back in by position below.
    let defs: Vec<(Range<usize>, Block)> = parser
        .reference_definitions()
        .iter()
        .map(|(_, def)| {
            let span = trim_trailing_blank_lines(markdown, def.span.clone());
            let block = Block::Def {
                href: def.dest.to_string(),
                title: def.title.as_ref().map(|t| t.to_string()),
                raw: markdown[span.clone()].to_string(),
            };
            (span, block)
        })
        .collect();

    let mut lexer = Lexer {
        src: markdown,
        events: parser.into_offset_iter(),
    };
    let mut items = lexer.block_run(None);
    merge_defs(&mut items, defs);
    insert_spaces(markdown, 0..markdown.len(), items)
}

struct Lexer<'a> {
    src: &'a str,
    events: OffsetIter<'a>,
}

impl<'a> Lexer<'a> {
    /// Lex a run of sibling blocks until `until` closes (or input ends),
    /// keeping each block's source range for the gap walker.
    fn block_run(&mut self, until: Option<TagEnd>) -> Vec<(Range<usize>, Block)> {
        let mut out = Vec::new();
        while let Some((event, range)) = self.events.next() {
            let mut range = trim_trailing_blank_lines(self.src, range);
            match event {
                Event::End(end) if Some(end) == until => break,
                Event::Start(Tag::Paragraph) => {
                    let content = self.inline_run(TagEnd::Paragraph);
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, paragraph_or_image(content, raw)));
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    let content = self.inline_run(TagEnd::Heading(level));
                    let raw = self.src[range.clone()].to_string();
                    out.push((
                        range,
                        Block::Heading {
                            level: heading_level_to_u8(level),
                            content,
                            raw,
                        },
                    ));
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    let language = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.into_string();
                            if lang.is_empty() { None } else { Some(lang) }
                        }
                        CodeBlockKind::Indented => {
                            // the range starts at the content, past the
                            // indentation; widen it back to the line start
                            range.start = line_start(self.src, range.start);
                            None
                        }
                    };
                    let mut content = String::new();
                    while let Some((event, _)) = self.events.next() {
                        match event {
                            Event::End(TagEnd::CodeBlock) => break,
                            Event::Text(text) => content.push_str(&text),
                            _ => {}
                        }
                    }
                    // the final newline belongs to the fence, not the snippet
                    if content.ends_with('\n') {
                        content.pop();
                    }
                    let raw = self.src[range.clone()].to_string();
                    out.push((
                        range,
                        Block::CodeBlock {
                            language,
                            content,
                            raw,
                        },
                    ));
                }
                Event::Start(tag @ Tag::List(_)) => {
                    let end = tag.to_end();
                    self.skip_to(end);
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, Block::List { raw }));
                }
                Event::Start(tag @ Tag::BlockQuote(_)) => {
                    let inner = self.block_run(Some(tag.to_end()));
                    let children = insert_spaces(self.src, range.clone(), inner);
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, Block::Blockquote { children, raw }));
                }
                Event::Start(Tag::Table(_)) => {
                    let mut headers = Vec::new();
                    let mut rows = Vec::new();
                    let mut current: Vec<Vec<Inline>> = Vec::new();
                    while let Some((event, _)) = self.events.next() {
                        match event {
                            Event::End(TagEnd::Table) => break,
                            Event::End(TagEnd::TableHead) => headers = mem::take(&mut current),
                            Event::Start(Tag::TableRow) => current.clear(),
                            Event::End(TagEnd::TableRow) => rows.push(mem::take(&mut current)),
                            Event::Start(Tag::TableCell) => {
                                current.push(self.inline_run(TagEnd::TableCell));
                            }
                            _ => {}
                        }
                    }
                    let raw = self.src[range.clone()].to_string();
                    out.push((
                        range,
                        Block::Table {
                            headers,
                            rows,
                            raw,
                        },
                    ));
                }
                Event::Start(Tag::HtmlBlock) => {
                    self.skip_to(TagEnd::HtmlBlock);
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, Block::Html { raw }));
                }
                Event::Start(Tag::FootnoteDefinition(label)) => {
                    let label = label.to_string();
                    self.skip_to(TagEnd::FootnoteDefinition);
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, Block::Footnote { label, raw }));
                }
                Event::Rule => {
                    let raw = self.src[range.clone()].to_string();
                    out.push((range, Block::Rule { raw }));
                }
                _ => {}
            }
        }
        out
    }

    /// Lex inline content until `until` closes. Contiguous text events and
    /// soft breaks merge into single `Text` tokens spanning their combined
    /// source range.
    fn inline_run(&mut self, until: TagEnd) -> Vec<Inline> {
        let mut inlines = Vec::new();
        let mut text = String::new();
        let mut text_span: Option<Range<usize>> = None;

        while let Some((event, range)) = self.events.next() {
            match event {
                Event::End(end) if end == until => break,
                Event::Text(t) => {
                    // escape processing starts a fresh text event just past
                    // the backslash, leaving the backslash outside every
                    // range; split the escaped first character back out
                    match t.chars().next() {
                        Some(first) if escaped_at(self.src, range.start) => {
                            flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                            let end = range.start + first.len_utf8();
                            inlines.push(Inline::Escape {
                                text: first.to_string(),
                                raw: self.src[range.start - 1..end].to_string(),
                            });
                            let rest = &t[first.len_utf8()..];
                            if !rest.is_empty() {
                                text.push_str(rest);
                                extend_span(&mut text_span, end..range.end);
                            }
                        }
                        _ => {
                            text.push_str(&t);
                            extend_span(&mut text_span, range);
                        }
                    }
                }
                Event::SoftBreak => {
                    text.push('\n');
                    extend_span(&mut text_span, range);
                }
                Event::Code(t) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    inlines.push(Inline::Code {
                        text: t.to_string(),
                        raw: self.src[range].to_string(),
                    });
                }
                Event::InlineHtml(t) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    inlines.push(Inline::Html {
                        raw: t.to_string(),
                    });
                }
                Event::HardBreak => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    inlines.push(Inline::Break {
                        raw: self.src[range].to_string(),
                    });
                }
                Event::FootnoteReference(label) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    inlines.push(Inline::FootnoteRef {
                        label: label.to_string(),
                        raw: self.src[range].to_string(),
                    });
                }
                Event::Start(Tag::Strong) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    let raw = self.src[range].to_string();
                    self.skip_to(TagEnd::Strong);
                    inlines.push(Inline::Bold {
                        text: strip_delimiters(&raw, 2),
                        raw,
                    });
                }
                Event::Start(Tag::Emphasis) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    let raw = self.src[range].to_string();
                    self.skip_to(TagEnd::Emphasis);
                    inlines.push(Inline::Italic {
                        text: strip_delimiters(&raw, 1),
                        raw,
                    });
                }
                Event::Start(Tag::Strikethrough) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    let raw = self.src[range].to_string();
                    self.skip_to(TagEnd::Strikethrough);
                    let width = if raw.starts_with("~~") { 2 } else { 1 };
                    inlines.push(Inline::Strikethrough {
                        text: strip_delimiters(&raw, width),
                        raw,
                    });
                }
                Event::Start(Tag::Link { dest_url, .. }) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    let raw = self.src[range].to_string();
                    let inner = self.consume_inner(TagEnd::Link);
                    let label = inner
                        .map(|span| self.src[span].to_string())
                        .unwrap_or_default();
                    inlines.push(Inline::Link {
                        text: label,
                        href: dest_url.into_string(),
                        raw,
                    });
                }
                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => {
                    flush_text(self.src, &mut text_span, &mut text, &mut inlines);
                    let raw = self.src[range].to_string();
                    let inner = self.consume_inner(TagEnd::Image);
                    let alt = inner
                        .map(|span| self.src[span].to_string())
                        .unwrap_or_default();
                    let title = (!title.is_empty()).then(|| title.into_string());
                    inlines.push(Inline::Image {
                        href: dest_url.into_string(),
                        title,
                        text: alt,
                        raw,
                    });
                }
                _ => {}
            }
        }
        flush_text(self.src, &mut text_span, &mut text, &mut inlines);
        inlines
    }

    /// Consume events through the matching `end` tag.
    fn skip_to(&mut self, end: TagEnd) {
        let mut depth = 0usize;
        while let Some((event, _)) = self.events.next() {
            match event {
                Event::Start(tag) if tag.to_end() == end => depth += 1,
                Event::End(e) if e == end => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
        }
    }

    /// Consume a span's inner events through the matching `end` tag,
    /// returning the source range the children cover (None when empty).
    fn consume_inner(&mut self, end: TagEnd) -> Option<Range<usize>> {
        let mut depth = 0usize;
        let mut inner: Option<Range<usize>> = None;
        while let Some((event, range)) = self.events.next() {
            match event {
                Event::Start(tag) if tag.to_end() == end => depth += 1,
                Event::End(e) if e == end => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            extend_span(&mut inner, range);
        }
        inner
    }
}

/// A paragraph whose only content is one image renders as a block image.
fn paragraph_or_image(content: Vec<Inline>, raw: String) -> Block {
    if let [Inline::Image {
        href, title, text, ..
    }] = content.as_slice()
    {
        return Block::Image {
            href: href.clone(),
            title: title.clone(),
            text: text.clone(),
            raw,
        };
    }
    Block::Paragraph { content, raw }
}

fn flush_text(
    src: &str,
    span: &mut Option<Range<usize>>,
    text: &mut String,
    inlines: &mut Vec<Inline>,
) {
    if let Some(span) = span.take() {
        inlines.push(Inline::Text {
            text: mem::take(text),
            raw: src[span].to_string(),
        });
    }
}

fn extend_span(span: &mut Option<Range<usize>>, range: Range<usize>) {
    match span {
        Some(span) => span.end = range.end,
        None => *span = Some(range),
    }
}

fn strip_delimiters(raw: &str, width: usize) -> String {
    if raw.len() >= width * 2 {
        raw[width..raw.len() - width].to_string()
    } else {
        raw.to_string()
    }
}

/// Whether the character starting at `pos` is backslash-escaped. A run of
/// backslashes ending just before `pos` escapes it only when the run has
/// odd length; an even run is all literal pairs.
fn escaped_at(src: &str, pos: usize) -> bool {
    let run = src.as_bytes()[..pos]
        .iter()
        .rev()
        .take_while(|&&b| b == b'\\')
        .count();
    run % 2 == 1
}

/// Some block ranges swallow the blank lines that follow them; pull those
/// back out of the range so the gap walker sees them.
fn trim_trailing_blank_lines(src: &str, mut range: Range<usize>) -> Range<usize> {
    loop {
        let slice = &src[range.clone()];
        let Some(stripped) = slice.strip_suffix('\n') else {
            break;
        };
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        if stripped.ends_with('\n') {
            range.end = range.start + stripped.len();
        } else {
            break;
        }
    }
    range
}

/// Walk back from `pos` over spaces and tabs to the start of its line.
fn line_start(src: &str, mut pos: usize) -> usize {
    let bytes = src.as_bytes();
    while pos > 0 && matches!(bytes[pos - 1], b' ' | b'\t') {
        pos -= 1;
    }
    pos
}

/// Link reference definitions sit outside the event stream; splice them into
/// the sibling run by source position. Definitions nested inside another
/// block's span (a blockquote, say) are dropped rather than hoisted.
fn merge_defs(items: &mut Vec<(Range<usize>, Block)>, defs: Vec<(Range<usize>, Block)>) {
    for (span, def) in defs {
        let contained = items
            .iter()
            .any(|(range, _)| range.start <= span.start && span.end <= range.end);
        if !contained {
            items.push((span, def));
        }
    }
    items.sort_by_key(|(range, _)| range.start);
}

/// Weave `Space` tokens into a lexed sibling run wherever the source gap
/// between neighbors holds a line break. Block ranges end after their own
/// trailing newline, so any newline in a gap means a blank line.
fn insert_spaces(src: &str, region: Range<usize>, items: Vec<(Range<usize>, Block)>) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut cursor = region.start;
    for (range, block) in items {
        push_gap(src, cursor..range.start, &mut blocks);
        cursor = range.end;
        blocks.push(block);
    }
    push_gap(src, cursor..region.end, &mut blocks);
    blocks
}

fn push_gap(src: &str, gap: Range<usize>, blocks: &mut Vec<Block>) {
    if gap.start >= gap.end {
        return;
    }
    let raw = &src[gap];
    if raw.contains('\n') {
        blocks.push(Block::Space {
            raw: raw.to_string(),
        });
    }
}

fn heading_level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
