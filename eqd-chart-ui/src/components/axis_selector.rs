//! X/Y axis selectors for the scatter chart.

use crate::state::AppState;
use dioxus::prelude::*;
use eqd_core::NumericField;

/// Two dropdowns choosing which numeric fields the chart plots.
#[component]
pub fn AxisSelector() -> Element {
    let mut state = use_context::<AppState>();
    let x_axis = (state.x_axis)();
    let y_axis = (state.y_axis)();

    let on_x_change = move |evt: Event<FormData>| match evt.value().parse::<NumericField>() {
        Ok(field) => state.x_axis.set(field),
        Err(e) => log::warn!("[EQD] axis selector: {}", e),
    };
    let on_y_change = move |evt: Event<FormData>| match evt.value().parse::<NumericField>() {
        Ok(field) => state.y_axis.set(field),
        Err(e) => log::warn!("[EQD] axis selector: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "X axis: "
                select {
                    onchange: on_x_change,
                    for field in NumericField::ALL {
                        option {
                            key: "{field.key()}",
                            value: "{field.key()}",
                            selected: field == x_axis,
                            "{field.label()}"
                        }
                    }
                }
            }
            label {
                style: "font-weight: bold;",
                "Y axis: "
                select {
                    onchange: on_y_change,
                    for field in NumericField::ALL {
                        option {
                            key: "{field.key()}",
                            value: "{field.key()}",
                            selected: field == y_axis,
                            "{field.label()}"
                        }
                    }
                }
            }
        }
    }
}
