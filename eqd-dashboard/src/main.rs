//! USGS Earthquake Dashboard
//!
//! Loads the past month of earthquakes from the USGS CSV feed and shows them
//! as a scatter chart, a searchable paged table, and summary cards. The chart
//! and the table share one selection: clicking or hovering in either view
//! highlights the same record in the other.
//!
//! Data flow:
//! 1. On mount (and on each Retry) the feed is fetched and normalized into
//!    the full record set.
//! 2. The chart samples the full set down to `MAX_CHART_POINTS`, keeping the
//!    selected and hovered records, and projects it onto the chosen axes.
//! 3. The table filters the full set by the debounced query, then pages it.
//! 4. Summary cards aggregate the full set.

use chrono::{Duration, Utc};
use dioxus::prelude::*;
use eqd_chart_ui::components::{
    AxisSelector, ChartContainer, ChartHeader, EarthquakeTable, ErrorDisplay, LoadingSpinner,
    PaginationBar, SearchBox, SelectedDetail, StatsCards,
};
use eqd_chart_ui::js_bridge::{self, PointEvent};
use eqd_chart_ui::state::AppState;
use eqd_core::normalize::{normalize, ColumnAliases};
use eqd_core::project::{project, ChartPoint};
use eqd_core::sample::sample;
use eqd_core::search::filter;
use eqd_core::stats::{aggregate, count_recent, Statistics};
use eqd_core::{EarthquakeRecord, NumericField, FEED_URL, MAX_CHART_POINTS, RECENT_WINDOW_HOURS};

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "earthquake-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("eqd-root"))
        .launch(App);
}

/// One rendered table page.
#[derive(Clone, PartialEq)]
struct TableView {
    rows: Vec<EarthquakeRecord>,
    page: usize,
    total_pages: usize,
    showing: (usize, usize, usize),
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Chart clicks and hovers write the shared selection
    use_hook(move || {
        js_bridge::on_point_event(move |event| match event {
            PointEvent::Select(id) => state.selection.write().set_selected(Some(id)),
            PointEvent::Hover(id) => state.selection.write().set_hovered(Some(id)),
            PointEvent::Leave => state.selection.write().set_hovered(None),
        });
    });

    // Fetch and normalize the feed on mount and whenever Retry is pressed
    use_effect(move || {
        let attempt = (state.reload)();
        js_bridge::init_charts();
        state.loading.set(true);
        state.error_msg.set(None);

        spawn(async move {
            log::info!("[EQD] dashboard: loading feed (attempt {})", attempt + 1);
            let loaded = match js_bridge::fetch_text(FEED_URL).await {
                Ok(body) => normalize(&body, &ColumnAliases::default()),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(records) => state.set_records(records),
                Err(e) => {
                    log::error!("Failed to load earthquake feed: {}", e);
                    js_bridge::destroy_chart(CHART_ID);
                    state.error_msg.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    });

    // Filtered set for the table. Page moves re-run the filter but leave the
    // result equal, so subscribers are not notified.
    let filtered = use_memo(move || {
        let records = state.records.read();
        let table = state.table.read();
        filter(&records, table.query())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let table = use_memo(move || {
        let filtered = filtered.read();
        let table = state.table.read();
        let page = table.slice(&filtered);
        TableView {
            rows: page.items.to_vec(),
            page: page.page,
            total_pages: page.total_pages,
            showing: page.showing(),
        }
    });

    let summary = use_memo(move || -> (Option<Statistics>, usize) {
        let records = state.records.read();
        let recent = count_recent(
            records.iter(),
            Utc::now(),
            Duration::hours(RECENT_WINDOW_HOURS),
        );
        (aggregate(records.iter()), recent)
    });

    // Points to plot. Only changes when the sample itself changes, so a
    // hover over an already-drawn point does not redraw the chart.
    let chart_points = use_memo(move || -> Vec<ChartPoint> {
        let records = state.records.read();
        let pinned = state.selection.read().pinned_ids();
        let sampled = sample(&records, MAX_CHART_POINTS, &pinned);
        project(sampled, (state.x_axis)(), (state.y_axis)())
    });

    // Draw the chart whenever the plotted points change
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let points = chart_points.read();
        let x_axis = *state.x_axis.peek();
        let y_axis = *state.y_axis.peek();
        let selection = state.selection.peek().snapshot();

        let data_json = serde_json::to_string(&*points).unwrap_or_default();
        let config_json = serde_json::to_string(&serde_json::json!({
            "xLabel": x_axis.label(),
            "yLabel": y_axis.label(),
            "invertY": y_axis == NumericField::Depth,
            "selectedId": selection.selected_id,
            "hoveredId": selection.hovered_id,
        }))
        .unwrap_or_default();

        js_bridge::render_scatter_chart(CHART_ID, &data_json, &config_json);
    });

    // Restyle points on every selection change
    use_effect(move || {
        let selection = state.selection.read().snapshot();
        js_bridge::highlight_points(
            CHART_ID,
            selection.selected_id.as_deref(),
            selection.hovered_id.as_deref(),
        );
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();
    let view = table();
    let (stats, recent) = summary();
    let unfiltered = state.records.read().len();
    let plotted = chart_points.read().len();
    let selected = state
        .selection
        .read()
        .resolve_selected(&state.records.read())
        .cloned();

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 1100px; margin: 0 auto; padding: 16px;",
            h2 { style: "margin: 0 0 8px 0;", "Earthquakes: Past 30 Days" }

            if let Some(err) = error {
                ErrorDisplay {
                    message: err,
                    on_retry: move |_| {
                        let next = *state.reload.peek() + 1;
                        state.reload.set(next);
                    },
                }
            } else if loading {
                LoadingSpinner {}
            } else {
                StatsCards { stats, recent }

                ChartHeader {
                    title: "Magnitude and Depth",
                    subtitle: "Click a point to select it; the table highlights the same event.",
                }
                AxisSelector {}
                ChartContainer {
                    id: CHART_ID.to_string(),
                    caption: format!("{} of {} events plotted", plotted, unfiltered),
                }
                SelectedDetail { record: selected }

                ChartHeader { title: "Events" }
                SearchBox {}
                PaginationBar {
                    page: view.page,
                    total_pages: view.total_pages,
                    showing: view.showing,
                    unfiltered,
                }
                EarthquakeTable { rows: view.rows }
            }
        }
    }
}
