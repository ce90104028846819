//! Summary statistics card.

use dioxus::prelude::*;

use msd_data::shapes::SummaryStats;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryStatsCardProps {
    pub stats: SummaryStats,
}

/// Renders the `/summary_stats` pass-through as a labeled list. The
/// only non-chart view; numbers arrive pre-rounded from the backend.
#[component]
pub fn SummaryStatsCard(props: SummaryStatsCardProps) -> Element {
    let stats = &props.stats;
    rsx! {
        div {
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px;",
                "Summary Statistics for {stats.column}"
            }
            ul {
                style: "margin: 0; padding-left: 20px; line-height: 1.7;",
                li { "Count: {stats.count}" }
                li { "Mean: {stats.mean}" }
                li { "Median: {stats.median}" }
                li { "Min: {stats.min}" }
                li { "Max: {stats.max}" }
                li { "Std: {stats.std}" }
            }
        }
    }
}
