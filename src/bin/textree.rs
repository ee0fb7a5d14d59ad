//! Command-line interface for textree
//!
//! Usage:
//!   textree parse `<path>` [--format `<format>`] [--config `<file>`]  - Parse a file and print its tree
//!   textree formats                                                - List available output formats

use clap::{Arg, ArgAction, Command};
use textree::textree::config::Loader;
use textree::textree::error::Result;
use textree::textree::formats::FormatRegistry;
use textree::textree::loader::DocumentLoader;
use textree::textree::parser::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn cli() -> Command {
    Command::new("textree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decompose text into paragraphs, sentences, words and symbols")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Increase log verbosity (-d info, -dd debug, -ddd trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a text file and print its tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the text file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see `textree formats`)")
                        .default_value("treeviz"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in configuration"),
                ),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
}

fn main() {
    let matches = cli().get_matches();
    setup_logging(matches.get_count("debug"));

    let result = match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches
                .get_one::<String>("path")
                .expect("path is required");
            let format = parse_matches
                .get_one::<String>("format")
                .expect("format has a default");
            let config = parse_matches.get_one::<String>("config");
            handle_parse_command(path, format, config.map(String::as_str))
        }
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn handle_parse_command(path: &str, format: &str, config: Option<&str>) -> Result<()> {
    let mut loader = Loader::new();
    if let Some(config_path) = config {
        loader = loader.with_file(config_path);
    }
    let parser = Parser::from_config(&loader.build()?)?;

    let tree = DocumentLoader::from_path(path)?.parse_with(&parser);
    let output = FormatRegistry::with_defaults().serialize(&tree, format)?;
    print!("{}", output);
    Ok(())
}

fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {name}");
        println!("    {description}");
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}
