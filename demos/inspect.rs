fn main() {
    let args: Vec<String> = std::env::args().collect();
    let md = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        "# Overview\n\nSome **bold** text".to_string()
    };

    // Load config from current directory
    let config = md2ac::Config::load(std::path::Path::new("md2ac.toml"));
    match md2ac::markdown_to_card_with_config(&md, &config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
