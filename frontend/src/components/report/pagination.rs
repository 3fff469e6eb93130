//! Pagination bar under the report table.

use common::pagination::{pagination_view, PageControl};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ReportComponent;

pub fn build_pagination(component: &ReportComponent, link: &Scope<ReportComponent>) -> Html {
    let Some(view) = component.controller.pagination().and_then(pagination_view) else {
        return html! {};
    };

    html! {
        <nav class="pagination">
            <span class="pagination-label">{ view.label.clone() }</span>
            <div class="pagination-controls">
                { for view.controls.iter().map(|control| control_button(control, link)) }
            </div>
        </nav>
    }
}

fn control_button(control: &PageControl, link: &Scope<ReportComponent>) -> Html {
    let (label, class) = match *control {
        PageControl::Previous { .. } => ("« 이전".to_string(), classes!("page-btn", "page-nav")),
        PageControl::Next { .. } => ("다음 »".to_string(), classes!("page-btn", "page-nav")),
        PageControl::Page { number, current } => (
            number.to_string(),
            classes!("page-btn", current.then_some("current")),
        ),
        PageControl::Ellipsis => {
            return html! { <span class="page-ellipsis">{"…"}</span> };
        }
    };

    match control.target() {
        Some(page) => html! {
            <button class={class} onclick={link.callback(move |_| Msg::GoToPage(page))}>
                { label }
            </button>
        },
        None => html! {
            <button class={class} disabled=true aria-current="page">{ label }</button>
        },
    }
}
