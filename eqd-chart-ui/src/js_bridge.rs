//! Typed wrappers around JS interop.
//!
//! The D3.js scatter chart lives in `assets/js/*.js` and is loaded at runtime.
//! The scripts are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes data for those globals and also wraps the few
//! browser APIs the dashboard needs directly: `fetch`, `setTimeout`, and a
//! callback the chart uses to report clicks and hovers.

use eqd_core::IngestionError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// Embed chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('EQD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal. JSON string syntax is valid JS.
fn js_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop. Call once at
/// app startup.
///
/// The scripts are evaluated at global scope via indirect eval once D3 is
/// ready, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SCATTER_CHART_JS].join("\n");

    let store_js = format!("window.__eqdChartScripts = {};", js_literal(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__eqdChartsReady) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__eqdChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__eqdChartScripts);
                    delete window.__eqdChartScripts;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof highlightScatterPoints !== 'undefined') window.highlightScatterPoints = highlightScatterPoints;
                    if (typeof destroyScatterChart !== 'undefined') window.destroyScatterChart = destroyScatterChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__eqdChartsReady = true;
                    console.log('EQD charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the magnitude/depth scatter chart.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to initialize,
/// and the container DOM element to exist before rendering. Re-rendering the
/// same container replaces the previous chart.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    let container = js_literal(container_id);
    let data = js_literal(data_json);
    let config = js_literal(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__eqdChartsReady &&
                    typeof window.renderScatterChart !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.renderScatterChart({container}, {data}, {config});
                    }} catch(e) {{ console.error('[EQD] renderScatterChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Restyle already-drawn points for the current selection without
/// re-rendering the chart. A no-op until the chart exists.
pub fn highlight_points(container_id: &str, selected_id: Option<&str>, hovered_id: Option<&str>) {
    let container = js_literal(container_id);
    let selected = selected_id.map(js_literal).unwrap_or_else(|| "null".to_string());
    let hovered = hovered_id.map(js_literal).unwrap_or_else(|| "null".to_string());
    call_js(&format!(
        "if (typeof window.highlightScatterPoints !== 'undefined') \
         {{ window.highlightScatterPoints({container}, {selected}, {hovered}); }}"
    ));
}

/// Destroy a chart by clearing its container.
pub fn destroy_chart(container_id: &str) {
    let container = js_literal(container_id);
    call_js(&format!(
        "if (typeof window.destroyScatterChart !== 'undefined') {{ window.destroyScatterChart({container}); }} \
         else {{ var el = document.getElementById({container}); if (el) el.innerHTML = ''; }}"
    ));
}

/// A click or hover reported by the scatter chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointEvent {
    Select(String),
    Hover(String),
    Leave,
}

impl PointEvent {
    fn parse(kind: &str, id: String) -> Option<Self> {
        match kind {
            "select" => Some(Self::Select(id)),
            "hover" => Some(Self::Hover(id)),
            "leave" => Some(Self::Leave),
            _ => None,
        }
    }
}

/// Route chart point events to `handler`. The chart calls
/// `window.__eqdPointEvent(kind, id)`; registering again replaces the
/// previous handler.
pub fn on_point_event(mut handler: impl FnMut(PointEvent) + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("[EQD] js_bridge: no window, point events disabled");
        return;
    };
    let callback = Closure::<dyn FnMut(String, String)>::new(move |kind: String, id: String| {
        match PointEvent::parse(&kind, id) {
            Some(event) => handler(event),
            None => log::warn!("[EQD] js_bridge: unknown point event '{}'", kind),
        }
    });
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str("__eqdPointEvent"),
        callback.as_ref(),
    ) {
        log::error!("[EQD] js_bridge: failed to register point handler: {:?}", e);
    }
    // The window keeps calling this for the lifetime of the page.
    callback.forget();
}

/// Fetch `url` with the browser's `fetch` and return the body text.
pub async fn fetch_text(url: &str) -> Result<String, IngestionError> {
    let window = web_sys::window().ok_or_else(|| IngestionError::Fetch("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| IngestionError::Fetch(format!("{:?}", e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|e| IngestionError::Fetch(format!("{:?}", e)))?;
    if !response.ok() {
        return Err(IngestionError::Status(response.status()));
    }
    let text = response
        .text()
        .map_err(|e| IngestionError::Fetch(format!("{:?}", e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| IngestionError::Fetch(format!("{:?}", e)))?;
    body.as_string()
        .ok_or_else(|| IngestionError::Fetch("response body is not text".to_string()))
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_literal_escapes_quotes() {
        assert_eq!(js_literal("it's \"here\""), r#""it's \"here\"""#);
        assert_eq!(js_literal("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_parses_point_events() {
        assert_eq!(
            PointEvent::parse("select", "us1".into()),
            Some(PointEvent::Select("us1".into()))
        );
        assert_eq!(
            PointEvent::parse("hover", "us2".into()),
            Some(PointEvent::Hover("us2".into()))
        );
        assert_eq!(PointEvent::parse("leave", String::new()), Some(PointEvent::Leave));
        assert_eq!(PointEvent::parse("drag", String::new()), None);
    }
}
