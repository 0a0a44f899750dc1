use std::fs;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "md2ac")]
#[command(about = "Convert Markdown files to Adaptive Card JSON")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output JSON file (defaults to input name with .json extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config TOML file
    #[arg(short, long, default_value = "md2ac.toml")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = md2ac::Config::load(&cli.config);

    // Convert markdown to a card
    let mut json = match md2ac::markdown_to_card_with_config(&markdown, &config) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    json.push('\n');

    // Determine output path
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("json"));

    // Write card JSON
    if let Err(e) = fs::write(&output, json) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
