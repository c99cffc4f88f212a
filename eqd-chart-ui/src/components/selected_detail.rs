//! Details for the selected earthquake.

use crate::state::AppState;
use dioxus::prelude::*;
use eqd_core::EarthquakeRecord;
use eqd_utils::{dates, numbers};

#[derive(Props, Clone, PartialEq)]
pub struct SelectedDetailProps {
    /// `None` when nothing is selected or the selected id is no longer loaded
    pub record: Option<EarthquakeRecord>,
}

#[component]
pub fn SelectedDetail(props: SelectedDetailProps) -> Element {
    let mut state = use_context::<AppState>();
    let Some(record) = props.record else {
        return rsx! {};
    };

    let time = dates::format_timestamp(record.time);
    let iso = dates::format_iso(record.time).unwrap_or_default();
    let depth = numbers::format_fixed(record.depth, 1);
    let latitude = numbers::format_fixed(record.latitude, 3);
    let longitude = numbers::format_fixed(record.longitude, 3);
    let magnitude = numbers::format_fixed(Some(record.magnitude), 1);
    let event_url = format!(
        "https://earthquake.usgs.gov/earthquakes/eventpage/{}",
        record.id
    );

    rsx! {
        div {
            style: "margin: 8px 0; padding: 12px 16px; border: 1px solid #90CAF9; background: #E3F2FD; border-radius: 4px; font-size: 13px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                strong { "M {magnitude} {record.place}" }
                button {
                    style: "margin-left: auto; padding: 2px 10px; cursor: pointer;",
                    onclick: move |_| state.selection.write().set_selected(None),
                    "Clear selection"
                }
            }
            div {
                time { datetime: "{iso}", "{time}" }
                " | depth {depth} km | {latitude}, {longitude} | {record.mag_type} | {record.status}"
            }
            a { href: "{event_url}", target: "_blank", "{record.id} on USGS" }
        }
    }
}
