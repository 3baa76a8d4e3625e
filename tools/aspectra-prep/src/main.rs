//! Aspect tagging preparation tool
//!
//! Loads a tagged titles table, merges split aspect values, converts labels
//! to IOB tags and writes the result as TSV or JSON lines.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aspectra_core::{GroupOrder, Pipeline, PipelineConfig, PipelineOutput, TaggedToken};
use aspectra_data::{load_tagged_titles, merged_distribution, prepare_rows, tagged_distribution};

/// CLI arguments
#[derive(Parser)]
#[command(name = "aspectra-prep")]
#[command(about = "Merge split aspect values and emit IOB-tagged tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Label literal marking tokens outside any aspect
    #[arg(long, global = true, env = "ASPECTRA_OUTSIDE_MARKER", default_value = "O")]
    outside_marker: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge fragments and write IOB-encoded rows
    Encode {
        /// Tagged titles table (.tsv or .tsv.gz)
        #[arg(env = "ASPECTRA_INPUT")]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, env = "ASPECTRA_OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, env = "ASPECTRA_FORMAT", default_value_t = Format::Tsv)]
        format: Format,

        /// Order in which records are emitted
        #[arg(long, value_enum, env = "ASPECTRA_GROUP_ORDER", default_value_t = Order::FirstAppearance)]
        group_order: Order,

        /// Process each record independently
        #[arg(long)]
        per_record: bool,
    },
    /// Print label counts before and after merging
    Distribution {
        /// Tagged titles table (.tsv or .tsv.gz)
        #[arg(env = "ASPECTRA_INPUT")]
        input: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Tsv,
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    FirstAppearance,
    AscendingKey,
}

impl From<Order> for GroupOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::FirstAppearance => GroupOrder::FirstAppearance,
            Order::AscendingKey => GroupOrder::AscendingKey,
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_output(output: &PipelineOutput, format: Format, writer: Box<dyn Write>) -> Result<()> {
    match format {
        Format::Tsv => aspectra_data::write_tsv(writer, output)?,
        Format::Jsonl => aspectra_data::write_jsonl(writer, output)?,
    }
    Ok(())
}

fn encode_table(pipeline: &Pipeline, rows: &[TaggedToken], per_record: bool) -> Result<PipelineOutput> {
    let encoded = if per_record {
        pipeline.process_records(rows)
    } else {
        pipeline.run(rows)
    };
    encoded.context("Failed to encode rows")
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            format,
            group_order,
            per_record,
        } => {
            let raw = load_tagged_titles(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let table = prepare_rows(raw).context("Failed to prepare rows")?;

            let config = PipelineConfig::new()
                .with_group_order(group_order.into())
                .with_outside_marker(cli.outside_marker);
            let pipeline = Pipeline::new(config);
            let encoded = encode_table(&pipeline, &table.rows, per_record)?;

            info!(
                rows_in = table.rows.len(),
                dropped = table.dropped,
                rows_out = encoded.len(),
                "encoded table"
            );

            let writer = open_output(output.as_deref())?;
            write_output(&encoded, format, writer).context("Failed to write output")?;
        }
        Commands::Distribution { input } => {
            let raw = load_tagged_titles(&input)
                .with_context(|| format!("Failed to load {}", input.display()))?;
            let table = prepare_rows(raw).context("Failed to prepare rows")?;
            let pipeline = Pipeline::new(PipelineConfig::new().with_outside_marker(cli.outside_marker));
            let encoded = pipeline.run(&table.rows).context("Failed to merge rows")?;

            println!("# raw tags");
            for count in tagged_distribution(&table.rows) {
                println!("{count}");
            }
            println!();
            println!("# merged aspect names");
            for count in merged_distribution(&encoded.rows) {
                println!("{count}");
            }
        }
    }

    Ok(())
}
