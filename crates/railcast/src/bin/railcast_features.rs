//! Builds the wagon feature table from raw tables.
//!
//! Usage: `cargo run --bin railcast-features --features cli -- --targets T --dislocations D
//! --repairs R --params P [--output features.csv] [--training] [--drop-unknown]`
//!
//! Inputs may be CSV or parquet, chosen by file extension. Every path can also
//! be given through its `RAILCAST_*` environment variable.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use polars::prelude::*;
use railcast::{
    features::{
        ExtractorConfig, HistoryFeatureExtractor, HistoryIndex, StaticParameterIndex,
        dispositions_from_frame, parameters_from_frame, repairs_from_frame, targets_from_frame,
    },
    model::{SampleBuilder, SampleConfig, SampleMode},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "railcast-features")]
#[command(about = "Build the wagon repair feature table")]
struct Args {
    /// Target list: wagnum, month (and target_month, target_day with --training)
    #[arg(long, env = "RAILCAST_TARGETS")]
    targets: PathBuf,

    /// Disposition history
    #[arg(long, env = "RAILCAST_DISLOCATIONS")]
    dislocations: PathBuf,

    /// Repair events
    #[arg(long, env = "RAILCAST_REPAIRS")]
    repairs: PathBuf,

    /// Static wagon parameters
    #[arg(long, env = "RAILCAST_PARAMS")]
    params: PathBuf,

    /// Output CSV path
    #[arg(short, long, env = "RAILCAST_OUTPUT", default_value = "features.csv")]
    output: PathBuf,

    /// Read ground-truth labels from the target list
    #[arg(long)]
    training: bool,

    /// Drop targets of wagons without parameters instead of failing
    #[arg(long)]
    drop_unknown: bool,

    /// Lookback window for recently active wagons, in days
    #[arg(long, default_value_t = 180)]
    lookback_days: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let dispositions = dispositions_from_frame(&read_table(&args.dislocations)?)
        .context("reading disposition table")?;
    let repairs = repairs_from_frame(&read_table(&args.repairs)?).context("reading repair table")?;
    let params = StaticParameterIndex::build(
        parameters_from_frame(&read_table(&args.params)?).context("reading wagon parameters")?,
    )?;
    let mut targets =
        targets_from_frame(&read_table(&args.targets)?, args.training).context("reading targets")?;
    info!(
        dispositions = dispositions.len(),
        repairs = repairs.len(),
        wagons = params.len(),
        targets = targets.len(),
        "loaded tables"
    );

    if args.drop_unknown {
        targets = params.retain_known(targets);
    }

    let history = HistoryIndex::build(dispositions, repairs)?;
    let extractor = HistoryFeatureExtractor::with_config(ExtractorConfig {
        lookback_days: args.lookback_days,
        ..ExtractorConfig::default()
    });
    let config = SampleConfig {
        mode: if args.training { SampleMode::Training } else { SampleMode::Prediction },
        ..SampleConfig::default()
    };

    let mut table = SampleBuilder::with_extractor(config, extractor)
        .build(&targets, &history, &params)
        .context("building feature table")?;

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut table)?;

    info!(rows = table.height(), output = %args.output.display(), "wrote feature table");
    Ok(())
}

/// Read a CSV or parquet table, by extension.
fn read_table(path: &Path) -> Result<DataFrame> {
    let df = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => CsvReadOptions::default()
            .with_has_header(true)
            .map_parse_options(|opts| opts.with_try_parse_dates(true))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish(),
        Some("parquet") => ParquetReader::new(File::open(path)?).finish(),
        _ => bail!("unsupported table format: {}", path.display()),
    }
    .with_context(|| format!("reading {}", path.display()))?;

    info!(path = %path.display(), rows = df.height(), "read table");
    Ok(df)
}
