//! Malaria surveillance dashboard.
//!
//! A filter panel (column, forecast horizon, region, site) drives six
//! independently loading visualizations: time series, forecast, summary
//! statistics, box and violin distributions, and a region-by-month
//! heatmap.
//!
//! Data flow:
//! 1. A control edit patches the shared `FilterState` signal.
//! 2. Each view's fetch effect rebuilds its `ViewQuery`; the view's
//!    loader no-ops when the query is unchanged, otherwise issues a
//!    browser fetch.
//! 3. The response is transformed into the view's chart shape and the
//!    loader transitions to Ready or Failed; responses for superseded
//!    queries are discarded by token.
//! 4. Render effects hand Ready data to Plotly; the shell renders
//!    loading and error states per view card.
//!
//! The hosting page loads Plotly from a CDN script tag and provides the
//! `dashboard-root` element.

use dioxus::prelude::*;

use msd_chart_ui::components::{
    ChartContainer, ChartHeader, ColumnSelector, ErrorDisplay, ForecastStepsInput, InfoModal,
    LoadingSpinner, RegionSelector, SiteSelector, SummaryStatsCard,
};
use msd_chart_ui::state::DashboardState;
use msd_chart_ui::{fetch, js_bridge};
use msd_core::error::FetchError;
use msd_core::query::{self, ViewKind, ViewQuery};
use msd_core::record::SurveillanceRecord;
use msd_core::view::{ViewLoader, ViewState};
use msd_data::shapes::{ForecastSeries, GroupDistribution, HeatmapData, SummaryStats};
use msd_data::transform;

/// Chart container DOM element IDs used by the Plotly bridge.
const TIME_SERIES_CHART_ID: &str = "time-series-chart";
const FORECAST_CHART_ID: &str = "forecast-chart";
const BOX_CHART_ID: &str = "box-chart";
const VIOLIN_CHART_ID: &str = "violin-chart";
const HEATMAP_CHART_ID: &str = "heatmap-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// Top-level pages. Full client routing is presentation shell only; a
/// page switch covers the original's two routes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Page {
    Home,
    Dashboard,
}

/// View tabs inside the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tab {
    ForecastData,
    AdvancedVisuals,
}

#[component]
fn App() -> Element {
    let mut page = use_signal(|| Page::Home);

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",
            nav {
                style: "display: flex; gap: 16px; align-items: center; padding: 10px 16px; background: #212529; color: white;",
                span {
                    style: "font-weight: bold; font-size: 18px;",
                    "Malaria Dashboard"
                }
                a {
                    style: "color: #ccc; cursor: pointer;",
                    onclick: move |_| page.set(Page::Home),
                    "Home"
                }
                a {
                    style: "color: #ccc; cursor: pointer;",
                    onclick: move |_| page.set(Page::Dashboard),
                    "Dashboard"
                }
            }
            {match page() {
                Page::Home => rsx! { Home {} },
                Page::Dashboard => rsx! { Dashboard {} },
            }}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            style: "padding: 24px;",
            h1 { "Welcome to the Malaria Dashboard" }
            p { "Please use the navigation bar above to access the Dashboard." }
        }
    }
}

/// Start a fetch for one view if its query changed.
///
/// `begin` hands back a token only when the query differs from the
/// in-flight or last-completed one, so redundant filter edits and
/// unrelated filter changes never refetch. The async block resolves the
/// token against the loader on completion; stale responses are dropped
/// there.
fn load_view<T, F>(mut loader: Signal<ViewLoader<T>>, query: ViewQuery, transform: F)
where
    T: 'static,
    F: FnOnce(&serde_json::Value) -> Result<T, FetchError> + 'static,
{
    let Some(token) = loader.write().begin(query.clone()) else {
        return;
    };
    spawn(async move {
        let result = fetch::fetch_json(&query)
            .await
            .and_then(|payload| transform(&payload));
        loader.write().finish(token, result);
    });
}

/// Loading/error/chart-container branches shared by the five chart
/// views. The chart itself is drawn by a render effect once Plotly and
/// the container exist.
fn chart_card<T>(loader: &ViewLoader<T>, chart_id: &str, loading_message: &str) -> Element {
    match loader.state() {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingSpinner { message: loading_message.to_string() }
        },
        ViewState::Failed(message) => rsx! {
            ErrorDisplay { message: message.clone() }
        },
        ViewState::Ready(_) => rsx! {
            ChartContainer { id: chart_id.to_string() }
        },
    }
}

#[component]
fn Dashboard() -> Element {
    let state = use_context_provider(DashboardState::new);
    let mut show_modal = use_signal(|| false);
    let tab = use_signal(|| Tab::ForecastData);

    // One loader per visualization. Box and violin issue the same query
    // but load and fail independently. The time-series loader stores
    // parsed records: its /data query depends only on region/site, and
    // the column-specific series is derived at render time.
    let time_series = use_signal(ViewLoader::<Vec<SurveillanceRecord>>::new);
    let forecast = use_signal(ViewLoader::<ForecastSeries>::new);
    let summary = use_signal(ViewLoader::<SummaryStats>::new);
    let box_dist = use_signal(ViewLoader::<Vec<GroupDistribution>>::new);
    let violin_dist = use_signal(ViewLoader::<Vec<GroupDistribution>>::new);
    let heatmap = use_signal(ViewLoader::<HeatmapData>::new);

    // Fetch effects. Each snapshots the filters, rebuilds its query,
    // and lets the loader decide whether a fetch is due. All views load
    // regardless of the active tab, like the original page.
    use_effect(move || {
        let filters = state.filters.read().clone();
        load_view(
            time_series,
            query::build(ViewKind::TimeSeries, &filters),
            |payload| transform::parse_records(payload),
        );
    });
    use_effect(move || {
        let filters = state.filters.read().clone();
        load_view(
            forecast,
            query::build(ViewKind::Forecast, &filters),
            |payload| transform::to_forecast(payload),
        );
    });
    use_effect(move || {
        let filters = state.filters.read().clone();
        load_view(
            summary,
            query::build(ViewKind::SummaryStats, &filters),
            |payload| transform::to_summary_stats(payload),
        );
    });
    use_effect(move || {
        let filters = state.filters.read().clone();
        let column = filters.column;
        load_view(
            box_dist,
            query::build(ViewKind::Distribution, &filters),
            move |payload| transform::to_grouped_distribution(payload, column),
        );
    });
    use_effect(move || {
        let filters = state.filters.read().clone();
        let column = filters.column;
        load_view(
            violin_dist,
            query::build(ViewKind::Distribution, &filters),
            move |payload| transform::to_grouped_distribution(payload, column),
        );
    });
    use_effect(move || {
        let filters = state.filters.read().clone();
        load_view(
            heatmap,
            query::build(ViewKind::Heatmap, &filters),
            |payload| transform::to_heatmap(payload),
        );
    });

    // Render effects. Each reads its loader plus the active tab so a
    // chart is redrawn when its container remounts after a tab switch.
    use_effect(move || {
        if tab() != Tab::ForecastData {
            return;
        }
        let column = state.filters.read().column;
        if let ViewState::Ready(records) = time_series.read().state() {
            let series = transform::to_time_series(records, column);
            js_bridge::render_time_series(TIME_SERIES_CHART_ID, &series, column.as_str());
        } else {
            js_bridge::destroy_chart(TIME_SERIES_CHART_ID);
        }
    });
    use_effect(move || {
        if tab() != Tab::ForecastData {
            return;
        }
        let filters = state.filters.read().clone();
        if let ViewState::Ready(series) = forecast.read().state() {
            js_bridge::render_forecast(
                FORECAST_CHART_ID,
                series,
                filters.column.as_str(),
                filters.forecast_steps,
            );
        } else {
            js_bridge::destroy_chart(FORECAST_CHART_ID);
        }
    });
    use_effect(move || {
        if tab() != Tab::AdvancedVisuals {
            return;
        }
        let column = state.filters.read().column;
        if let ViewState::Ready(groups) = box_dist.read().state() {
            js_bridge::render_box(BOX_CHART_ID, groups, column.as_str());
        } else {
            js_bridge::destroy_chart(BOX_CHART_ID);
        }
    });
    use_effect(move || {
        if tab() != Tab::AdvancedVisuals {
            return;
        }
        let column = state.filters.read().column;
        if let ViewState::Ready(groups) = violin_dist.read().state() {
            js_bridge::render_violin(VIOLIN_CHART_ID, groups, column.as_str());
        } else {
            js_bridge::destroy_chart(VIOLIN_CHART_ID);
        }
    });
    use_effect(move || {
        if tab() != Tab::AdvancedVisuals {
            return;
        }
        let column = state.filters.read().column;
        if let ViewState::Ready(data) = heatmap.read().state() {
            js_bridge::render_heatmap(HEATMAP_CHART_ID, data, column.as_str());
        } else {
            js_bridge::destroy_chart(HEATMAP_CHART_ID);
        }
    });

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; padding: 16px; align-items: flex-start;",

            // Controls sidebar
            div {
                style: "flex: 0 0 260px; background: #F8F9FA; border: 1px solid #DEE2E6; border-radius: 6px; padding: 12px 16px;",
                h3 {
                    style: "margin: 0 0 8px 0; font-size: 16px;",
                    "Dashboard Controls"
                }
                ColumnSelector {}
                ForecastStepsInput {}
                RegionSelector {}
                SiteSelector {}
                button {
                    style: "margin-top: 12px;",
                    onclick: move |_| show_modal.set(true),
                    "More Details"
                }
            }

            // Main content area
            div {
                style: "flex: 1 1 600px; min-width: 0;",
                TabBar { tab }
                {match tab() {
                    Tab::ForecastData => rsx! {
                        ViewCard {
                            title: "Time Series Plot".to_string(),
                            body: chart_card(&time_series.read(), TIME_SERIES_CHART_ID, "Loading Time Series..."),
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            div {
                                style: "flex: 1 1 300px;",
                                ViewCard {
                                    title: "Forecast Plot".to_string(),
                                    body: chart_card(&forecast.read(), FORECAST_CHART_ID, "Loading Forecast..."),
                                }
                            }
                            div {
                                style: "flex: 1 1 300px;",
                                ViewCard {
                                    title: "Summary Statistics".to_string(),
                                    body: summary_card(&summary.read()),
                                }
                            }
                        }
                    },
                    Tab::AdvancedVisuals => rsx! {
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 16px;",
                            div {
                                style: "flex: 1 1 300px;",
                                ViewCard {
                                    title: "Box Plot".to_string(),
                                    body: chart_card(&box_dist.read(), BOX_CHART_ID, "Loading Box Plot..."),
                                }
                            }
                            div {
                                style: "flex: 1 1 300px;",
                                ViewCard {
                                    title: "Violin Plot".to_string(),
                                    body: chart_card(&violin_dist.read(), VIOLIN_CHART_ID, "Loading Violin Plot..."),
                                }
                            }
                        }
                        ViewCard {
                            title: "Heatmap".to_string(),
                            body: chart_card(&heatmap.read(), HEATMAP_CHART_ID, "Loading Heatmap..."),
                        }
                    },
                }}
            }
        }
        InfoModal {
            show: show_modal(),
            on_close: move |_| show_modal.set(false),
        }
    }
}

fn summary_card(loader: &ViewLoader<SummaryStats>) -> Element {
    match loader.state() {
        ViewState::Idle | ViewState::Loading => rsx! {
            LoadingSpinner { message: "Loading Summary Stats...".to_string() }
        },
        ViewState::Failed(message) => rsx! {
            ErrorDisplay { message: message.clone() }
        },
        ViewState::Ready(stats) => rsx! {
            SummaryStatsCard { stats: stats.clone() }
        },
    }
}

#[derive(Props, Clone, PartialEq)]
struct TabBarProps {
    tab: Signal<Tab>,
}

#[component]
fn TabBar(mut props: TabBarProps) -> Element {
    let active = (props.tab)();
    let style_for = |this: Tab| {
        if this == active {
            "padding: 6px 12px; border: 1px solid #DEE2E6; border-bottom: none; border-radius: 4px 4px 0 0; background: white; font-weight: bold; cursor: pointer;"
        } else {
            "padding: 6px 12px; border: none; background: none; color: #0D6EFD; cursor: pointer;"
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #DEE2E6; margin-bottom: 12px;",
            button {
                style: style_for(Tab::ForecastData),
                onclick: move |_| props.tab.set(Tab::ForecastData),
                "Forecast & Data"
            }
            button {
                style: style_for(Tab::AdvancedVisuals),
                onclick: move |_| props.tab.set(Tab::AdvancedVisuals),
                "Advanced Visuals"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ViewCardProps {
    title: String,
    body: Element,
}

/// Card wrapper: header plus whatever state branch the view is in.
#[component]
fn ViewCard(props: ViewCardProps) -> Element {
    rsx! {
        div {
            style: "background: white; border: 1px solid #DEE2E6; border-radius: 6px; padding: 12px 16px; margin-bottom: 16px;",
            ChartHeader { title: props.title.clone() }
            {props.body}
        }
    }
}
