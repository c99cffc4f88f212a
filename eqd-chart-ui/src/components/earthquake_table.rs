//! Paged earthquake table with selection and hover highlighting.

use crate::state::AppState;
use dioxus::prelude::*;
use eqd_core::selection::Highlight;
use eqd_core::EarthquakeRecord;
use eqd_utils::{dates, numbers, severity};

#[derive(Props, Clone, PartialEq)]
pub struct EarthquakeTableProps {
    /// Rows of the current page
    pub rows: Vec<EarthquakeRecord>,
}

fn row_style(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Selected => "background: #BBDEFB; cursor: pointer;",
        Highlight::Hovered => "background: #E3F2FD; cursor: pointer;",
        Highlight::None => "cursor: pointer;",
    }
}

/// Clicking a row selects it; hovering a row highlights the matching chart point.
#[component]
pub fn EarthquakeTable(props: EarthquakeTableProps) -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection.read().clone();

    if props.rows.is_empty() {
        return rsx! {
            p {
                style: "padding: 24px; text-align: center; color: #666;",
                "No earthquakes found"
            }
        };
    }

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; font-size: 13px;",
            thead {
                tr {
                    style: "text-align: left; border-bottom: 2px solid #ddd;",
                    th { style: "padding: 6px;", "Time" }
                    th { style: "padding: 6px;", "Place" }
                    th { style: "padding: 6px;", "Mag" }
                    th { style: "padding: 6px;", "Depth (km)" }
                    th { style: "padding: 6px;", "Id" }
                }
            }
            tbody {
                for record in props.rows.iter() {
                    {
                        let select_id = record.id.clone();
                        let hover_id = record.id.clone();
                        let style = format!(
                            "{} border-bottom: 1px solid #eee;",
                            row_style(selection.highlight(&record.id))
                        );
                        let dot = severity::band(record.magnitude).color();
                        let time = dates::format_timestamp(record.time);
                        let magnitude = numbers::format_fixed(Some(record.magnitude), 1);
                        let depth = numbers::format_fixed(record.depth, 1);
                        rsx! {
                            tr {
                                key: "{record.id}",
                                style: "{style}",
                                onclick: move |_| state.selection.write().set_selected(Some(select_id.clone())),
                                onmouseenter: move |_| state.selection.write().set_hovered(Some(hover_id.clone())),
                                onmouseleave: move |_| state.selection.write().set_hovered(None),
                                td { style: "padding: 6px; white-space: nowrap;", "{time}" }
                                td { style: "padding: 6px;", "{record.place}" }
                                td {
                                    style: "padding: 6px; white-space: nowrap;",
                                    span { style: "display: inline-block; width: 8px; height: 8px; border-radius: 50%; margin-right: 6px; background: {dot};" }
                                    "{magnitude}"
                                }
                                td { style: "padding: 6px;", "{depth}" }
                                td { style: "padding: 6px; font-family: monospace;", "{record.id}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
