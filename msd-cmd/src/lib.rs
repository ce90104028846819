//! Command implementations for the msd CLI.
//!
//! One subcommand per dashboard endpoint: each builds the same
//! `ViewQuery` the dashboard would, fetches through the native API
//! client, runs the matching view transformer, and prints the result.
//! Handy for spot-checking a backend without a browser.

use clap::Subcommand;

use msd_core::api::ApiClient;
use msd_core::column::MeasureColumn;
use msd_core::filter::FilterState;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch observation records from /data as a time series
    Data {
        /// Column to chart
        #[arg(short, long, default_value = "malinc")]
        column: String,

        /// Optional region filter
        #[arg(long)]
        region: Option<String>,

        /// Optional site filter
        #[arg(long)]
        site: Option<String>,
    },

    /// Fetch an ARIMA forecast from /forecast
    Forecast {
        /// Column to forecast
        #[arg(short, long, default_value = "malinc")]
        column: String,

        /// Number of months to forecast
        #[arg(short, long, default_value_t = 12)]
        steps: u32,
    },

    /// Fetch summary statistics from /summary_stats
    Summary {
        /// Column to summarize
        #[arg(short, long, default_value = "malinc")]
        column: String,

        /// Optional region filter
        #[arg(long)]
        region: Option<String>,

        /// Optional site filter
        #[arg(long)]
        site: Option<String>,
    },

    /// Fetch per-region distributions from /box_data
    Distribution {
        /// Column to group
        #[arg(short, long, default_value = "malinc")]
        column: String,
    },

    /// Fetch the region-by-month matrix from /heatmap_data
    Heatmap {
        /// Column to average
        #[arg(short, long, default_value = "malinc")]
        column: String,
    },
}

pub async fn run(base_url: &str, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url)?;
    match command {
        Command::Data {
            column,
            region,
            site,
        } => {
            let filters = filters(&column, None, region, site)?;
            report::time_series(&client, &filters).await
        }
        Command::Forecast { column, steps } => {
            let filters = filters(&column, Some(steps), None, None)?;
            report::forecast(&client, &filters).await
        }
        Command::Summary {
            column,
            region,
            site,
        } => {
            let filters = filters(&column, None, region, site)?;
            report::summary(&client, &filters).await
        }
        Command::Distribution { column } => {
            let filters = filters(&column, None, None, None)?;
            report::distribution(&client, &filters).await
        }
        Command::Heatmap { column } => {
            let filters = filters(&column, None, None, None)?;
            report::heatmap(&client, &filters).await
        }
    }
}

fn filters(
    column: &str,
    steps: Option<u32>,
    region: Option<String>,
    site: Option<String>,
) -> anyhow::Result<FilterState> {
    let column: MeasureColumn = column
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown column {column:?} (expected malinc, propsuspected, or TPR)"))?;
    let mut filters = FilterState {
        column,
        region,
        site,
        ..FilterState::default()
    };
    if let Some(steps) = steps {
        anyhow::ensure!(steps >= 1, "steps must be at least 1");
        filters.forecast_steps = steps;
    }
    Ok(filters)
}
