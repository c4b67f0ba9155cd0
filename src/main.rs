//! flagbind - bind single-dash flags to a record declared as JSON.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flagbind::{parse, render_json_string, write_output, DynamicRecord, Schema};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Bind single-dash flags to a record declared as JSON.
#[derive(Parser, Debug)]
#[command(name = "flagbind", version, about, disable_help_subcommand = true)]
struct Cli {
    /// Log binding decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the record schema comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SchemaSource {
    /// JSON schema of the record to bind
    #[arg(long)]
    schema: Option<String>,

    /// Path to a JSON schema file
    #[arg(long, env = "FLAGBIND_SCHEMA_FILE")]
    schema_file: Option<PathBuf>,
}

impl SchemaSource {
    fn load(&self) -> Result<Schema> {
        let schema = match (&self.schema, &self.schema_file) {
            (Some(json), _) => Schema::from_json(json).context("failed to parse schema JSON")?,
            (None, Some(path)) => Schema::from_file(path)
                .with_context(|| format!("failed to load schema from {}", path.display()))?,
            (None, None) => anyhow::bail!("one of --schema or --schema-file is required"),
        };
        schema.validate().context("invalid schema")?;
        Ok(schema)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bind flags to the record and print it as JSON
    Bind {
        #[command(flatten)]
        source: SchemaSource,

        /// Write the JSON to a temporary file and print its path instead
        #[arg(long)]
        to_file: bool,

        /// Flags to bind
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Validate a schema
    Check {
        #[command(flatten)]
        source: SchemaSource,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Bind {
            source,
            to_file,
            tokens,
        } => {
            let schema = source.load()?;
            let mut record = DynamicRecord::new(&schema);
            debug!(fields = schema.fields.len(), tokens = tokens.len(), "binding");

            parse(&mut record, &tokens).context("failed to bind flags")?;

            if to_file {
                let path = write_output(&record).context("failed to write output file")?;
                println!("{}", path.display());
            } else {
                print!("{}", render_json_string(&record)?);
            }
        }
        Commands::Check { source } => {
            source.load()?;
            println!("ok");
        }
    }

    Ok(())
}
