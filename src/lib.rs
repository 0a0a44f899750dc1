mod block;
mod card;
mod config;
mod convert;
mod parser;

pub use block::{Block, Inline};
pub use card::{
    Action, AdaptiveCard, ColumnDefinition, Element, ElementKind, FontSize, FontType, FontWeight,
    RowStyle, Spacing, TableCell, TableRow, TextColor, TextRun,
};
pub use config::Config;
pub use convert::{ConvertError, blocks_to_card};

/// Parse markdown text into a vector of blocks.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(markdown)
}

/// Convert markdown to Adaptive Card JSON using default config.
pub fn markdown_to_card(markdown: &str) -> Result<String, String> {
    markdown_to_card_with_config(markdown, &Config::default())
}

/// Convert markdown to Adaptive Card JSON with custom config.
pub fn markdown_to_card_with_config(markdown: &str, config: &Config) -> Result<String, String> {
    let blocks = parse(markdown);
    let mut card = blocks_to_card(&blocks).map_err(|e| e.to_string())?;
    card.version = config.card.version.clone();

    let json = if config.output.pretty {
        card.to_json_pretty()
    } else {
        card.to_json()
    };
    json.map_err(|e| e.to_string())
}
