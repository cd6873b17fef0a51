//! # readable-lottie
//!
//! Converts minified Lottie JSON into readable keys and back.
//!
//! ## Commands
//! - `convert`: minified document to readable form
//! - `revert`: readable document to minified form
//! - `schemas`: print the key tables used by both directions

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lottie_readable::{ConvertOptions, Remapper};
use lottie_schema::{Direction, Schema, SchemaRegistry};
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "readable-lottie")]
#[command(about = "Translate Lottie documents between minified and readable keys")]
#[command(version)]
struct Cli {
    /// Log each dropped key and decoded value
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a minified document to readable form
    Convert(ConvertArgs),

    /// Restore a minified document from its readable form
    Revert(ConvertArgs),

    /// Print the schema tables
    Schemas {
        /// Only print this schema (e.g. "layer")
        #[arg(short, long)]
        name: Option<String>,

        /// Print the inverted tables used by `revert`
        #[arg(long)]
        reverse: bool,

        /// Emit JSON instead of a listing
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Input document, or "-" for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep supplementary keys under `extra`
    #[arg(short, long)]
    extra: bool,

    /// Write JSON without indentation
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "readable_lottie=debug,lottie_readable=trace"
    } else {
        "readable_lottie=info,lottie_readable=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Commands::Convert(args) => cmd_convert(&args, Direction::Forward),
        Commands::Revert(args) => cmd_convert(&args, Direction::Reverse),
        Commands::Schemas {
            name,
            reverse,
            json,
        } => cmd_schemas(name.as_deref(), reverse, json),
    }
}

fn cmd_convert(args: &ConvertArgs, direction: Direction) -> Result<()> {
    let text = read_input(&args.input)?;
    let document: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", args.input.display()))?;

    let options = ConvertOptions {
        include_extra: args.extra,
        direction,
    };
    let converted = Remapper::with_builtin(options)?
        .convert(&document)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    let rendered = if args.compact {
        serde_json::to_string(&converted)?
    } else {
        serde_json::to_string_pretty(&converted)?
    };
    write_output(args.output.as_deref(), &rendered)?;

    info!(
        input = %args.input.display(),
        direction = ?direction,
        bytes = rendered.len(),
        "conversion finished"
    );
    Ok(())
}

fn cmd_schemas(name: Option<&str>, reverse: bool, json: bool) -> Result<()> {
    let registry = SchemaRegistry::global()?;
    let direction = if reverse {
        Direction::Reverse
    } else {
        Direction::Forward
    };

    let schemas: Vec<&Schema> = match name {
        Some(name) => vec![registry.lookup_named(name, direction)?],
        None => registry.schemas(direction).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    for schema in schemas {
        print!("{}", render_schema(schema));
    }
    Ok(())
}

fn render_schema(schema: &Schema) -> String {
    let mut out = format!("{} ({:?})\n", schema.id(), schema.direction());
    if let Some(child) = schema.child() {
        out.push_str(&format!("  members: {child}\n"));
    }
    for field in schema.fields() {
        out.push_str(&format!(
            "  • {:<12} -> {:<18} {:?}\n",
            field.source, field.target, field.kind
        ));
    }
    if !schema.extra().is_empty() {
        out.push_str("  extra:\n");
        for extra in schema.extra() {
            out.push_str(&format!("    {:<14} -> {}\n", extra.source, extra.target));
        }
    }
    out.push('\n');
    out
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lottie_schema::SchemaId;

    #[test]
    fn test_parse_convert_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["readable-lottie", "convert"]).unwrap();
        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input, PathBuf::from("-"));
        assert!(!args.extra);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parse_revert_flags() {
        let cli = Cli::try_parse_from([
            "readable-lottie",
            "-v",
            "revert",
            "anim.json",
            "--extra",
            "--compact",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Revert(args) = cli.command else {
            panic!("expected revert");
        };
        assert_eq!(args.input, PathBuf::from("anim.json"));
        assert!(args.extra && args.compact);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_render_schema_lists_extra() {
        let registry = SchemaRegistry::global().unwrap();
        let schema = registry
            .lookup(SchemaId::Keyframe, Direction::Forward)
            .unwrap();
        let listing = render_schema(schema);
        assert!(listing.starts_with("KEYFRAME (Forward)"));
        assert!(listing.contains("startValue"));
        assert!(listing.contains("easingName"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        fs::write(&input, r#"{"nm": "c", "fr": 24, "op": 30}"#).unwrap();

        let args = ConvertArgs {
            input,
            output: Some(output.clone()),
            extra: false,
            compact: true,
        };
        cmd_convert(&args, Direction::Forward).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!({"name": "c", "frameRate": 24, "lastFrame": 30, "duration": "1:5"})
        );
    }

    #[test]
    fn test_missing_input_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConvertArgs {
            input: dir.path().join("absent.json"),
            output: None,
            extra: false,
            compact: false,
        };
        let err = cmd_convert(&args, Direction::Forward).unwrap_err();
        assert!(format!("{err}").contains("absent.json"));
    }
}
