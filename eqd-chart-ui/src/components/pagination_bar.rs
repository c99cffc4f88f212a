//! "Showing a-b of n" caption with page navigation.

use crate::state::AppState;
use dioxus::prelude::*;
use eqd_core::paginate::page_window;
use eqd_core::PAGE_WINDOW;
use eqd_utils::numbers::format_count;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationBarProps {
    pub page: usize,
    pub total_pages: usize,
    /// `(first, last, of)` from `Page::showing`
    pub showing: (usize, usize, usize),
    /// Size of the record set before filtering
    pub unfiltered: usize,
}

#[component]
pub fn PaginationBar(props: PaginationBarProps) -> Element {
    let mut state = use_context::<AppState>();
    let total_pages = props.total_pages;
    let (first, last, of) = props.showing;

    let caption = if of == props.unfiltered {
        format!("Showing {}-{} of {} earthquakes", first, last, format_count(of))
    } else {
        format!(
            "Showing {}-{} of {} earthquakes (filtered from {})",
            first,
            last,
            format_count(of),
            format_count(props.unfiltered)
        )
    };
    let pages: Vec<usize> = page_window(props.page, total_pages, PAGE_WINDOW).collect();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
            span { style: "color: #444; font-size: 13px;", "{caption}" }
            if total_pages > 1 {
                div {
                    style: "margin-left: auto; display: flex; gap: 4px;",
                    button {
                        disabled: props.page <= 1,
                        onclick: move |_| state.table.write().prev(total_pages),
                        "Prev"
                    }
                    for p in pages {
                        button {
                            key: "{p}",
                            style: if p == props.page { "font-weight: bold; background: #1976D2; color: #fff;" } else { "" },
                            onclick: move |_| state.table.write().go_to(p, total_pages),
                            "{p}"
                        }
                    }
                    button {
                        disabled: props.page >= total_pages,
                        onclick: move |_| state.table.write().next(total_pages),
                        "Next"
                    }
                }
            }
        }
    }
}
