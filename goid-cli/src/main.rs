//! Command-line interface for GO ID list files
//! Reads a list of GO IDs, optionally grouped into `# SECTION:` blocks, and prints what it held.
//!
//! Usage:
//!   goids `<path>` [--format `<format>`] [--config `<file>`]   - Read GO IDs or sections
//!   goids `<path>` --sections [--exclude-ungrouped]          - Read only the sections
//!
//! Warnings and the read summary go to stderr; the result goes to stdout.

mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use goid_config::{GoidsConfig, Loader, OutputFormat};
use goid_reader::{
    read_goids, GoidReader, NoReport, ReadResult, ReaderOptions, ReportSink, WriterSink,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("goids")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read GO IDs, optionally grouped into sections, from a text file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the GO ID list file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration layered over the built-in defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::ALL),
        )
        .arg(
            Arg::new("goids-only")
                .long("goids-only")
                .help("Ignore section markers and print every GO ID")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("exclude-ungrouped")
                .long("exclude-ungrouped")
                .help("Drop the default section and its GO IDs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("default-section")
                .long("default-section")
                .help("Name of the default section (default: Misc.)"),
        )
        .arg(
            Arg::new("sections")
                .long("sections")
                .help("Only read sections; a missing file is reported, not fatal")
                .conflicts_with("goids-only")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress warnings and the read summary")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser decisions to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    tracing::debug!(?config, "loaded configuration");

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");

    if matches.get_flag("sections") {
        handle_sections_command(path, config);
    } else {
        handle_read_command(path, config);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then `--config`, then individual flags.
fn load_config(matches: &ArgMatches) -> Result<GoidsConfig, goid_config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(name) = matches.get_one::<String>("default-section") {
        loader = loader.set_override("reader.default_section", name.as_str())?;
    }
    if matches.get_flag("goids-only") {
        loader = loader.set_override("reader.identifiers_only", true)?;
    }
    if matches.get_flag("exclude-ungrouped") {
        loader = loader.set_override("reader.exclude_default_section", true)?;
    }
    if matches.get_flag("quiet") {
        loader = loader.set_override("output.quiet", true)?;
    }
    loader.build()
}

fn report_sink(quiet: bool) -> Box<dyn ReportSink> {
    if quiet {
        Box::new(NoReport)
    } else {
        Box::new(WriterSink::new(std::io::stderr()))
    }
}

/// Handle a plain read: flat GO IDs or sections, whichever the file holds
fn handle_read_command(path: &str, config: GoidsConfig) {
    let mut sink = report_sink(config.output.quiet);
    let options = ReaderOptions::from(config.reader);

    let result = read_goids(path, options, sink.as_mut()).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });

    if let Some(result) = result {
        print_result(&result, config.output.format);
    }
}

/// Handle `--sections`: only sections, and a missing file is not fatal
fn handle_sections_command(path: &str, config: GoidsConfig) {
    let mut sink = report_sink(config.output.quiet);
    let options = ReaderOptions {
        identifiers_only: false,
        ..ReaderOptions::from(config.reader)
    };

    let sections = GoidReader::new(options)
        .read_sections(path, sink.as_mut())
        .unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", path, e);
            std::process::exit(1);
        });

    if let Some(sections) = sections {
        print_result(&ReadResult::Sections(sections), config.output.format);
    }
}

fn print_result(result: &ReadResult, format: OutputFormat) {
    let formatted = output::render(result, format).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    print!("{}", formatted);
}
