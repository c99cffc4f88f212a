//! Reusable Dioxus RSX components for the earthquake dashboard.

mod axis_selector;
mod chart_container;
mod chart_header;
mod earthquake_table;
mod error_display;
mod loading_spinner;
mod pagination_bar;
mod search_box;
mod selected_detail;
mod stats_cards;

pub use axis_selector::AxisSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use earthquake_table::EarthquakeTable;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use pagination_bar::PaginationBar;
pub use search_box::SearchBox;
pub use selected_detail::SelectedDetail;
pub use stats_cards::StatsCards;
