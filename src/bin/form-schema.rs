//! Form Schema CLI
//!
//! Prints, writes and lints the bundled sample forms.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use form_schema::samples::{sample, SAMPLE_NAMES};
use form_schema::{lint, to_json, write_file, FormDocument, Severity};

#[derive(Parser)]
#[command(name = "form-schema")]
#[command(about = "Build JSON Schema forms with a react-jsonschema-form UI sidecar")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bundled sample forms
    List,

    /// Print a sample form document
    Sample {
        /// Sample name (see `list`)
        name: String,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Leave out the UI document
        #[arg(long)]
        no_ui: bool,
    },

    /// Check a sample form for inconsistent constraints and dangling UI entries
    Lint {
        /// Sample name (see `list`)
        name: String,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_schema=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => {
            for name in SAMPLE_NAMES {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Sample {
            name,
            output,
            pretty,
            no_ui,
        } => run_sample(&name, output, pretty, no_ui),
        Commands::Lint {
            name,
            format,
            strict,
        } => run_lint(&name, &format, strict),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn load_sample(name: &str) -> Result<FormDocument, u8> {
    sample(name).ok_or_else(|| {
        eprintln!(
            "Error: unknown sample \"{}\": expected one of {}",
            name,
            SAMPLE_NAMES.join(", ")
        );
        2u8
    })
}

fn run_sample(name: &str, output: Option<PathBuf>, pretty: bool, no_ui: bool) -> Result<(), u8> {
    let mut document = load_sample(name)?;
    if no_ui {
        document.ui = None;
    }
    tracing::info!(sample = name, "rendering sample");

    match output {
        Some(path) => write_file(&document, &path, pretty).map_err(|e| {
            eprintln!("Error: {}", e);
            e.exit_code() as u8
        }),
        None => {
            let json = to_json(&document, pretty).map_err(|e| {
                eprintln!("Error: {}", e);
                e.exit_code() as u8
            })?;
            println!("{}", json);
            Ok(())
        }
    }
}

fn run_lint(name: &str, format: &str, strict: bool) -> Result<(), u8> {
    let document = load_sample(name)?;
    let result = lint(&document, strict);

    if format == "json" {
        let json = serde_json::to_string_pretty(&result).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?;
        println!("{}", json);
    } else {
        for diag in &result.diagnostics {
            let (color, label) = match diag.severity {
                Severity::Error => ("\x1b[31m", "error"),
                Severity::Warning => ("\x1b[33m", "warning"),
            };
            println!(
                "  {}{}[{}]\x1b[0m: {} - {}",
                color, label, diag.code, diag.path, diag.message
            );
        }

        if result.is_ok() {
            println!("\x1b[32m✓ {} passed\x1b[0m", name);
        } else {
            println!(
                "\x1b[31m✗ {} failed ({} errors, {} warnings)\x1b[0m",
                name, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() {
        Ok(())
    } else {
        Err(1)
    }
}
