use clap::Parser;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use jini::{
    error::{IoError, ParseError, ParseErrorKind, Result},
    formatter::{FormatConfig, Formatter, IniFormatter, JsonFormatter},
    parser::Features,
    utils::{parse_ini, parse_json_with, read_file, write_file},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    file: String,

    /// Allow line and block comments in JSON input
    #[arg(long)]
    allow_comments: bool,

    /// Allow trailing commas in JSON objects and arrays
    #[arg(long)]
    allow_trailing_commas: bool,

    /// Allow a bare scalar as the top-level JSON value
    #[arg(long)]
    allow_any_type: bool,

    /// Output format (json/ini); defaults to the input format
    #[arg(long)]
    format: Option<String>,

    /// Emit single-line output with no indentation
    #[arg(long)]
    compact: bool,

    /// Output file path
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Read input file
    info!("Reading file: {}", args.file);
    let content = read_file(&args.file)?;

    // Determine input format from file extension
    let input_ext = Path::new(&args.file)
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::Io(IoError::UnknownFormat(args.file.clone())))
        })?;

    let mut features = Features::strict();
    if args.allow_comments {
        features = features.with_comments();
    }
    if args.allow_trailing_commas {
        features = features.with_trailing_comma();
    }
    if args.allow_any_type {
        features = features.with_any_type();
    }

    // Parse input
    let parsed_value = match input_ext.to_lowercase().as_str() {
        "json" => parse_json_with(&content, features)?,
        "ini" => parse_ini(&content)?,
        _ => {
            return Err(ParseError::new(ParseErrorKind::Io(IoError::UnknownFormat(
                args.file.clone(),
            ))))
        }
    };

    let Some(value) = parsed_value else {
        info!("Input holds no document");
        return Ok(());
    };

    // Format the output
    let config = if args.compact {
        FormatConfig::compact()
    } else {
        FormatConfig::default()
    };

    let output_format = args
        .format
        .unwrap_or_else(|| input_ext.to_lowercase());

    let formatted_output = match output_format.as_str() {
        "json" => JsonFormatter.format(&value, &config)?,
        "ini" => IniFormatter.format(&value, &config)?,
        _ => {
            return Err(ParseError::new(ParseErrorKind::Io(IoError::UnknownFormat(
                output_format,
            ))))
        }
    };

    // Write to file or print to stdout
    if let Some(output_path) = args.output {
        write_file(&output_path, &formatted_output)?;
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}
