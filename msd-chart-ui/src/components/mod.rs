//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod column_selector;
mod error_display;
mod forecast_steps_input;
mod info_modal;
mod loading_spinner;
mod region_selector;
mod site_selector;
mod summary_stats_card;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use column_selector::ColumnSelector;
pub use error_display::ErrorDisplay;
pub use forecast_steps_input::ForecastStepsInput;
pub use info_modal::InfoModal;
pub use loading_spinner::LoadingSpinner;
pub use region_selector::RegionSelector;
pub use site_selector::SiteSelector;
pub use summary_stats_card::SummaryStatsCard;
