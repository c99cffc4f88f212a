//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 480)]
    pub min_height: u32,
    /// Shown under the chart, e.g. how many points were drawn
    #[props(default = String::new())]
    pub caption: String,
}

/// A container div for the D3.js scatter chart with loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
        if !props.caption.is_empty() {
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                "{props.caption}"
            }
        }
    }
}
