//! Deprecia CLI
//!
//! Values fixed assets under DS 24051 with optional UFV re-expression.
//!
//! Commands:
//! - `catalog` - list asset types and their useful lives
//! - `compute` - value one asset at a date
//! - `batch` - value up to five assets at once
//! - `project` - book value at a future offset or date

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deprecia_core::batch::BatchService;
use deprecia_core::catalog::InMemoryCatalog;
use deprecia_core::depreciation::{
    AssetRecord, DepreciationEngine, DepreciationOptions, DepreciationResult, fiscal_year_end,
};
use deprecia_core::index::IndexSeries;
use deprecia_core::projection::{LinearTrend, value_at_offset, year_offset};
use deprecia_data::{load_catalog, load_ufv_series};
use deprecia_shared::types::YearBasis;
use deprecia_shared::{AppConfig, AppError};

#[derive(Parser)]
#[command(
    name = "deprecia",
    about = "Deprecia - DS 24051 depreciation with UFV re-expression"
)]
struct Cli {
    /// Asset catalog CSV. Overrides `data.catalog_path`.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// UFV series CSV. Overrides `data.ufv_path`.
    #[arg(long, global = true)]
    ufv: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List asset types and their useful lives.
    Catalog,
    /// Value one asset.
    Compute {
        #[command(flatten)]
        asset: AssetArgs,

        #[command(flatten)]
        valuation: ValuationArgs,

        /// Also print the year-by-year schedule.
        #[arg(long, default_value_t = false)]
        schedule: bool,
    },
    /// Value up to five assets at once.
    Batch {
        /// Asset as `NAME|VALUE|YYYY-MM-DD`. Repeat up to five times.
        #[arg(long = "entry", required = true, value_parser = parse_entry)]
        entries: Vec<AssetRecord>,

        #[command(flatten)]
        valuation: ValuationArgs,
    },
    /// Project book value at a future offset or date.
    Project {
        #[command(flatten)]
        asset: AssetArgs,

        #[command(flatten)]
        valuation: ValuationArgs,

        /// Years since acquisition; fractions allowed.
        #[arg(long, conflicts_with = "on", required_unless_present = "on")]
        offset: Option<Decimal>,

        /// Calendar date to project to.
        #[arg(long, value_parser = parse_date)]
        on: Option<NaiveDate>,
    },
}

#[derive(Args)]
struct AssetArgs {
    /// Asset type name as listed by `deprecia catalog`.
    #[arg(long)]
    asset: String,

    /// Purchase value in bolivianos.
    #[arg(long)]
    value: Decimal,

    /// Acquisition date (YYYY-MM-DD or DD/MM/YYYY).
    #[arg(long, value_parser = parse_date)]
    acquired: NaiveDate,
}

impl AssetArgs {
    fn into_record(self) -> AssetRecord {
        AssetRecord::new(self.asset, self.value, self.acquired)
    }
}

#[derive(Args)]
struct ValuationArgs {
    /// Evaluation date. Defaults to today.
    #[arg(long, value_parser = parse_date)]
    at: Option<NaiveDate>,

    /// Evaluate at December 31 of the evaluation year.
    #[arg(long, default_value_t = false)]
    year_end: bool,

    /// Day-count basis: 365 or 365.25. Overrides `engine.year_basis`.
    #[arg(long)]
    basis: Option<YearBasis>,

    /// Depreciate the historical value without UFV re-expression.
    #[arg(long, default_value_t = false)]
    no_ufv: bool,
}

/// Everything a computation needs besides the asset itself.
struct Valuation {
    evaluation_date: NaiveDate,
    options: DepreciationOptions,
    series: Option<IndexSeries>,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deprecia=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("Failed to load configuration")?;
    let decimal_places = config.report.decimal_places;

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.catalog_path));
    let catalog = load_catalog(&catalog_path).map_err(AppError::from)?;
    for row in &catalog.row_errors {
        warn!(%row, "Catalog row skipped");
    }
    let catalog = catalog.catalog;

    match cli.command {
        Commands::Catalog => report::print_catalog(&catalog, cli.json),
        Commands::Compute {
            asset,
            valuation,
            schedule,
        } => {
            let valuation = prepare(&valuation, &config, cli.ufv.as_ref())?;
            let record = asset.into_record();
            let result = compute_one(&catalog, &record, &valuation)?;
            report::print_result(&record, &result, schedule, decimal_places, cli.json)
        }
        Commands::Batch { entries, valuation } => {
            let valuation = prepare(&valuation, &config, cli.ufv.as_ref())?;
            let outcomes = BatchService::compute(
                &catalog,
                &entries,
                valuation.evaluation_date,
                valuation.series.as_ref(),
                valuation.options,
            )
            .map_err(AppError::from)?;
            report::print_batch(&outcomes, decimal_places, cli.json)
        }
        Commands::Project {
            asset,
            valuation,
            offset,
            on,
        } => {
            let valuation = prepare(&valuation, &config, cli.ufv.as_ref())?;
            let record = asset.into_record();
            let result = compute_one(&catalog, &record, &valuation)?;

            let offset = match (offset, on) {
                (Some(offset), _) => offset,
                (None, Some(date)) => year_offset(&result, date).map_err(AppError::from)?,
                (None, None) => {
                    return Err(
                        AppError::Validation("either --offset or --on is required".into()).into(),
                    );
                }
            };
            let exact = value_at_offset(&result, offset).map_err(AppError::from)?;
            let fitted = match LinearTrend::fit(&result.series)
                .and_then(|trend| trend.predict(offset))
            {
                Ok(fitted) => Some(fitted),
                Err(err) => {
                    warn!(%err, "Trend cross-check unavailable");
                    None
                }
            };

            report::print_projection(
                &record,
                &result,
                &report::Projection {
                    offset,
                    exact,
                    fitted,
                },
                decimal_places,
                cli.json,
            )
        }
    }
}

/// Resolves evaluation date, engine options and the UFV series.
///
/// Command-line flags win over configuration.
fn prepare(
    args: &ValuationArgs,
    config: &AppConfig,
    ufv_override: Option<&PathBuf>,
) -> Result<Valuation> {
    let year_basis = args.basis.unwrap_or(config.engine.year_basis);
    let apply_reexpression = config.engine.apply_reexpression && !args.no_ufv;

    let base_date = args.at.unwrap_or_else(|| Local::now().date_naive());
    let evaluation_date = if args.year_end {
        fiscal_year_end(base_date)
    } else {
        base_date
    };

    let series = if apply_reexpression {
        let path = ufv_override
            .cloned()
            .unwrap_or_else(|| PathBuf::from(&config.data.ufv_path));
        let load = load_ufv_series(&path).map_err(AppError::from)?;
        for row in &load.row_errors {
            warn!(%row, "UFV row skipped");
        }
        Some(load.series)
    } else {
        None
    };

    info!(
        %evaluation_date,
        %year_basis,
        reexpression = apply_reexpression,
        "Valuation settings resolved"
    );

    Ok(Valuation {
        evaluation_date,
        options: DepreciationOptions {
            year_basis,
            apply_reexpression,
        },
        series,
    })
}

fn compute_one(
    catalog: &InMemoryCatalog,
    record: &AssetRecord,
    valuation: &Valuation,
) -> Result<DepreciationResult> {
    if let Some(series) = &valuation.series {
        for (label, date) in [
            ("acquisition", record.acquisition_date),
            ("evaluation", valuation.evaluation_date),
        ] {
            if !series.covers(date) {
                warn!(%date, label, "Date outside the published UFV range; using the closest value");
            }
        }
    }

    let result = DepreciationEngine::compute_for_record(
        catalog,
        record,
        valuation.evaluation_date,
        valuation.series.as_ref(),
        valuation.options,
    )
    .map_err(AppError::from)?;
    Ok(result)
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    deprecia_data::ufv::parse_date(raw).ok_or_else(|| format!("invalid date '{raw}'"))
}

/// Parses `NAME|VALUE|DATE`.
fn parse_entry(raw: &str) -> Result<AssetRecord, String> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [name, value, date] = parts.as_slice() else {
        return Err(format!("expected NAME|VALUE|DATE, got '{raw}'"));
    };
    if name.is_empty() {
        return Err("asset name is empty".to_string());
    }
    let value: Decimal = value
        .parse()
        .map_err(|err| format!("invalid purchase value '{value}': {err}"))?;
    Ok(AssetRecord::new(*name, value, parse_date(date)?))
}
