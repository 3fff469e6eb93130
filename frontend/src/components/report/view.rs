//! View rendering for the report component.
//!
//! Layout: the request form (dates, password, account), a status line, the
//! report itself and the pagination bar. The report is whatever the
//! controller decided to show: server or locally built table markup
//! inserted verbatim, or a pretty-printed payload in a `<pre>`.
//!
//! Header clicks are caught with a single delegated `onclick` on the report
//! container, since the table markup is not built by Yew. The container is
//! keyed on the rendered report's ticket so every applied payload replaces
//! the DOM, even when its markup equals the (possibly re-sorted) one shown.

use common::controller::{AccountsState, Phase, LOADING_MESSAGE, NO_ACCOUNTS_MESSAGE};
use common::render::ReportView;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::pagination::build_pagination;
use super::state::ReportComponent;
use super::table::header_column;

pub fn view(component: &ReportComponent, ctx: &Context<ReportComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="report-root">
            <h1>{"Facebook 광고 성과 보고서"}</h1>
            { build_form(component, link) }
            { build_status(component) }
            { build_report(component, link) }
            { build_pagination(component, link) }
        </div>
    }
}

fn build_form(component: &ReportComponent, link: &Scope<ReportComponent>) -> Html {
    let form = component.controller.form();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="report-form" {onsubmit}>
            <label for="start-date">{"시작 날짜"}</label>
            <input
                id="start-date"
                type="date"
                value={form.start_date.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetStartDate(input_value(&e)))}
            />
            <label for="end-date">{"종료 날짜"}</label>
            <input
                id="end-date"
                type="date"
                value={form.end_date.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetEndDate(input_value(&e)))}
            />
            <label for="report-password">{"패스워드"}</label>
            <input
                id="report-password"
                type="password"
                autocomplete="current-password"
                value={form.password.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))}
                onblur={link.callback(|_: FocusEvent| Msg::LoadAccounts)}
            />
            <label for="account-select">{"광고 계정"}</label>
            { build_account_select(component, link) }
            <button type="submit" class="submit-btn" disabled={component.controller.is_loading()}>
                {"보고서 생성"}
            </button>
        </form>
    }
}

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn build_account_select(component: &ReportComponent, link: &Scope<ReportComponent>) -> Html {
    let placeholder = |text: &str| {
        html! {
            <select id="account-select" disabled=true>
                <option>{ text.to_string() }</option>
            </select>
        }
    };

    match component.controller.accounts() {
        AccountsState::NotLoaded => placeholder("패스워드를 입력하면 계정을 불러옵니다"),
        AccountsState::Loading => placeholder("계정 목록을 불러오는 중..."),
        AccountsState::Empty => placeholder(NO_ACCOUNTS_MESSAGE),
        AccountsState::Failed(message) => html! {
            <>
                { placeholder("계정을 불러오지 못했습니다") }
                <span class="field-error">{ message.clone() }</span>
            </>
        },
        AccountsState::Loaded(selection) => {
            let onchange = link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::SelectAccount(select.value())
            });
            html! {
                <select id="account-select" {onchange}>
                    { for selection.accounts.iter().map(|account| html! {
                        <option
                            value={account.clone()}
                            selected={selection.selected.as_deref() == Some(account.as_str())}
                        >
                            { account.clone() }
                        </option>
                    }) }
                </select>
            }
        }
    }
}

fn build_status(component: &ReportComponent) -> Html {
    let controller = &component.controller;
    match controller.phase() {
        Phase::Fetching => html! {
            <div class="status loading" role="status">
                <span class="spinner" />
                { LOADING_MESSAGE }
            </div>
        },
        Phase::Errored => {
            let class = classes!(
                "status",
                "error",
                controller.is_network_failure().then_some("network")
            );
            html! {
                <div id="error-message" {class} role="alert">
                    { controller.message().unwrap_or_default().to_string() }
                </div>
            }
        }
        _ => html! {},
    }
}

fn build_report(component: &ReportComponent, link: &Scope<ReportComponent>) -> Html {
    match component.controller.view() {
        Some(ReportView::Table(markup)) => {
            let onclick = link.batch_callback(|e: MouseEvent| header_column(&e).map(Msg::SortColumn));
            let key = component.controller.rendered_sequence().to_string();
            html! {
                <div class="report-slot">
                    <div
                        key={key}
                        id="report-result"
                        class="report-result"
                        ref={component.table_ref.clone()}
                        {onclick}
                    >
                        { Html::from_html_unchecked(AttrValue::from(markup.clone())) }
                    </div>
                </div>
            }
        }
        Some(ReportView::Raw(text)) => html! {
            <pre id="report-result" class="report-raw">{ text.clone() }</pre>
        },
        None => html! {},
    }
}
