// crates/read_more_cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use content_splitter::{ContentSplitter, ReadMoreOptions};
use read_more_plugin::{register_splitter, InMemoryRegistry};
use read_more_tag::{EXCERPT_FILTER, HAS_MORETAG_FILTER, READ_MORE_SHORTCODE};

/// Printed between the excerpt and the rest of the page by `split`. Page
/// content may contain the same line, so the output is for reading only.
const SPLIT_SEPARATOR: &str = "\n--- read more ---\n";

fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(clap::value_parser!(PathBuf))
        .help("Page content to read (defaults to stdin)")
}

fn cli() -> Command {
    Command::new("read_more")
        .version("0.1.0")
        .about("Previews excerpts and \"read more\" output for page content")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("read_more_tag")
                .long("read-more-tag")
                .num_args(1)
                .allow_hyphen_values(true)
                .global(true)
                .help("Marker separating the excerpt from the rest (default <!--more-->)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .help("JSON options file, e.g. {\"readMoreTag\": \"<!--read-more-->\"}"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("excerpt")
                .about("Print the text before the first marker")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("has-more")
                .about("Print whether the content contains the marker")
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("render")
                .about("Render the readMore shortcode for the content")
                .arg(
                    Arg::new("inner")
                        .long("inner")
                        .num_args(1)
                        .allow_hyphen_values(true)
                        .required(true)
                        .help("Inner content of the shortcode, usually a link"),
                )
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("split")
                .about("Print the excerpt and the rest of the content")
                .long_about(
                    "Print the excerpt, a \"--- read more ---\" separator line and the rest of \
                     the content. The separator is not escaped, so a page that contains the \
                     same line produces ambiguous output.",
                )
                .arg(file_arg()),
        )
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the options from `--config`, then lets `--read-more-tag` override.
fn load_options(matches: &ArgMatches) -> Result<ReadMoreOptions> {
    let mut options = match matches.get_one::<PathBuf>("config") {
        Some(path) => ReadMoreOptions::from_json_file(path)?,
        None => ReadMoreOptions::default(),
    };
    if let Some(tag) = matches.get_one::<String>("read_more_tag") {
        options = options.with_read_more_tag(tag.as_str());
    }
    Ok(options)
}

fn read_content(matches: &ArgMatches) -> Result<String> {
    match matches.get_one::<PathBuf>("file") {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read content from stdin")?;
            Ok(content)
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String> {
    let options = load_options(matches)?;

    let splitter = Arc::new(ContentSplitter::from_options(Some(&options)));
    let mut registry = InMemoryRegistry::new();
    register_splitter(&mut registry, Arc::clone(&splitter));

    let (command, sub_matches) = matches
        .subcommand()
        .context("No subcommand given")?;
    let content = read_content(sub_matches)?;
    tracing::debug!(command, bytes = content.len(), "Read page content");

    let output = match command {
        "excerpt" => registry.apply_filter(EXCERPT_FILTER, &content)?.to_string(),
        "has-more" => format!("{}\n", registry.apply_filter(HAS_MORETAG_FILTER, &content)?),
        "render" => {
            let inner = sub_matches
                .get_one::<String>("inner")
                .context("--inner is required")?;
            registry.render_paired_shortcode(READ_MORE_SHORTCODE, inner, &content)?
        }
        // Same splitter the registered callables hold.
        "split" => match splitter.split(&content) {
            (excerpt, Some(rest)) => format!("{}{}{}", excerpt, SPLIT_SEPARATOR, rest),
            (whole, None) => {
                tracing::info!(read_more_tag = splitter.read_more_tag(), "No marker found");
                whole.to_string()
            }
        },
        other => anyhow::bail!("Unknown command '{}'", other),
    };
    Ok(output)
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
