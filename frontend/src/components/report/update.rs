//! Update function for the report component.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Form edits are forwarded to the controller.
//! - Account list is fetched when the password field loses focus.
//! - Submit and page clicks validate through the controller, then issue one
//!   request each; outcomes come back as `AccountsLoaded` / `ReportLoaded`
//!   carrying the ticket they were issued with.
//! - Header clicks re-sort the rendered table in place without a request.

use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api::{fetch_accounts, fetch_report};
use super::helpers::show_toast;
use super::messages::Msg;
use super::state::ReportComponent;
use super::table::sort_rendered_table;

pub fn update(component: &mut ReportComponent, ctx: &Context<ReportComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetStartDate(value) => {
            component.controller.set_start_date(value);
            true
        }
        Msg::SetEndDate(value) => {
            component.controller.set_end_date(value);
            true
        }
        Msg::SetPassword(value) => {
            component.controller.set_password(value);
            true
        }
        Msg::LoadAccounts => {
            let Some((ticket, request)) = component.controller.begin_load_accounts() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = fetch_accounts(&request).await;
                link.send_message(Msg::AccountsLoaded { ticket, outcome });
            });
            true
        }
        Msg::AccountsLoaded { ticket, outcome } => {
            if let Err(err) = &outcome {
                console::error!(format!("계정 목록 요청 실패: {:?}", err));
            }
            if !component.controller.finish_load_accounts(ticket, outcome) {
                console::log!("이전 패스워드의 계정 목록 응답을 무시합니다.");
                return false;
            }
            true
        }
        Msg::SelectAccount(account) => component.controller.select_account(&account),
        Msg::Submit => start_report(component, ctx, 1),
        Msg::GoToPage(page) => start_report(component, ctx, page),
        Msg::ReportLoaded { ticket, outcome } => {
            let failure = outcome.as_ref().err().map(ToString::to_string);
            if let Err(err) = &outcome {
                console::error!(format!("보고서 요청 실패 (page {}): {:?}", ticket.page, err));
            }
            if !component.controller.finish_report(ticket, outcome) {
                console::log!(format!("오래된 보고서 응답을 무시합니다 (page {}).", ticket.page));
                return false;
            }
            match failure {
                Some(message) => show_toast(&message),
                None => component.sort.reset(),
            }
            true
        }
        Msg::SortColumn(column) => {
            let direction = component.sort.click(column);
            sort_rendered_table(&component.table_ref, column, direction);
            false
        }
    }
}

/// Validates and, if the form is complete, requests `page`. A validation
/// failure sends nothing and only surfaces the message.
fn start_report(component: &mut ReportComponent, ctx: &Context<ReportComponent>, page: u32) -> bool {
    match component.controller.begin_report(page) {
        Ok((ticket, request)) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = fetch_report(&request).await;
                link.send_message(Msg::ReportLoaded { ticket, outcome });
            });
        }
        Err(err) => show_toast(&err.to_string()),
    }
    true
}
