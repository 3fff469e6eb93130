//! Browser-side utilities for the report component.
//!
//! - **Dates**: reading the client's local calendar date for the form defaults.
//! - **User feedback**: transient "toast" notifications for validation and
//!   request failures, shown on top of the inline status line.

use chrono::NaiveDate;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Yesterday relative to the browser's local date, as `YYYY-MM-DD`.
///
/// Returns an empty string if the local date cannot be represented, which
/// leaves the inputs blank and lets validation ask for a date.
pub fn default_report_date() -> String {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .map(common::dates::default_report_date)
    .unwrap_or_default()
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a styled `div` appended to `<body>` that removes itself
/// after a few seconds. `message` is inserted as text, never as markup,
/// because it can echo server-provided error strings.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
