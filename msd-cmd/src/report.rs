//! Fetch-and-print implementations for each subcommand.

use log::info;

use msd_core::api::ApiClient;
use msd_core::filter::FilterState;
use msd_core::query::{build, ViewKind};
use msd_data::transform;

pub async fn time_series(client: &ApiClient, filters: &FilterState) -> anyhow::Result<()> {
    let query = build(ViewKind::TimeSeries, filters);
    let payload = client.fetch(&query).await?;
    let records = transform::parse_records(&payload)?;
    let series = transform::to_time_series(&records, filters.column);

    info!(
        "{} non-null {} observations",
        series.y.len(),
        filters.column
    );
    for (date, value) in series.x.iter().zip(&series.y) {
        println!("{date}\t{value}");
    }
    Ok(())
}

pub async fn forecast(client: &ApiClient, filters: &FilterState) -> anyhow::Result<()> {
    let query = build(ViewKind::Forecast, filters);
    let payload = client.fetch(&query).await?;
    let series = transform::to_forecast(&payload)?;

    info!(
        "{}-month {} forecast",
        filters.forecast_steps, filters.column
    );
    for (date, value) in series.x.iter().zip(&series.y) {
        println!("{date}\t{value}");
    }
    Ok(())
}

pub async fn summary(client: &ApiClient, filters: &FilterState) -> anyhow::Result<()> {
    let query = build(ViewKind::SummaryStats, filters);
    let payload = client.fetch(&query).await?;
    let stats = transform::to_summary_stats(&payload)?;

    println!("column\t{}", stats.column);
    println!("count\t{}", stats.count);
    println!("mean\t{}", stats.mean);
    println!("median\t{}", stats.median);
    println!("min\t{}", stats.min);
    println!("max\t{}", stats.max);
    println!("std\t{}", stats.std);
    Ok(())
}

pub async fn distribution(client: &ApiClient, filters: &FilterState) -> anyhow::Result<()> {
    let query = build(ViewKind::Distribution, filters);
    let payload = client.fetch(&query).await?;
    let groups = transform::to_grouped_distribution(&payload, filters.column)?;

    info!("{} region groups", groups.len());
    for group in &groups {
        let min = group.values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = group
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        if group.values.is_empty() {
            println!("{}\t0 values", group.label);
        } else {
            println!(
                "{}\t{} values\tmin {min}\tmax {max}",
                group.label,
                group.values.len()
            );
        }
    }
    Ok(())
}

pub async fn heatmap(client: &ApiClient, filters: &FilterState) -> anyhow::Result<()> {
    let query = build(ViewKind::Heatmap, filters);
    let payload = client.fetch(&query).await?;
    let heatmap = transform::to_heatmap(&payload)?;

    info!(
        "{} regions x {} months",
        heatmap.rows.len(),
        heatmap.cols.len()
    );
    println!("region\t{}", heatmap.cols.join("\t"));
    for (region, row) in heatmap.rows.iter().zip(&heatmap.matrix) {
        let cells = row
            .iter()
            .map(|value| format!("{value:.2}"))
            .collect::<Vec<_>>()
            .join("\t");
        println!("{region}\t{cells}");
    }
    Ok(())
}
