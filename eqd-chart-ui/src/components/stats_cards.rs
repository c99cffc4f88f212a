//! Summary statistic cards.

use dioxus::prelude::*;
use eqd_core::stats::Statistics;
use eqd_utils::numbers::{format_count, format_fixed};

#[derive(Props, Clone, PartialEq)]
pub struct StatsCardsProps {
    pub stats: Option<Statistics>,
    /// Events in the last 24 hours
    pub recent: usize,
}

#[derive(Props, Clone, PartialEq)]
struct CardProps {
    #[props(into)]
    label: String,
    value: String,
}

#[component]
fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 140px; padding: 12px 16px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px;",
            div { style: "font-size: 12px; color: #666;", "{props.label}" }
            div { style: "font-size: 22px; font-weight: bold;", "{props.value}" }
        }
    }
}

/// Total, largest magnitude, average depth and recent activity.
#[component]
pub fn StatsCards(props: StatsCardsProps) -> Element {
    let total = props.stats.map(|s| s.count).unwrap_or(0);
    let max_mag = props.stats.and_then(|s| s.magnitude.max);
    let mean_depth = props.stats.and_then(|s| s.depth.mean);

    rsx! {
        div {
            style: "display: flex; gap: 12px; margin: 8px 0; flex-wrap: wrap;",
            Card { label: "Total events", value: format_count(total) }
            Card { label: "Largest magnitude", value: format_fixed(max_mag, 1) }
            Card { label: "Average depth (km)", value: format_fixed(mean_depth, 1) }
            Card { label: "Last 24 hours", value: format_count(props.recent) }
        }
    }
}
