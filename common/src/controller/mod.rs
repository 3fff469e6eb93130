//! Report form controller.
//!
//! All UI state that used to live in the DOM (form values, account list,
//! current page, last result) is held by `ReportController`. The browser
//! component calls `begin_*` to validate and obtain the request to send,
//! performs the request, and hands the outcome back through `finish_*`.
//!
//! Every request is tagged with a ticket. Only the most recently issued
//! ticket is accepted back, so a slow response can never overwrite the result
//! of a later submit or page click.

mod responses;

pub use responses::{interpret_accounts_response, interpret_report_response};

use crate::dates::parse_report_date;
use crate::error::{FormField, ReportError, ValidationError};
use crate::model::account::AccountSelection;
use crate::model::pagination::PaginationState;
use crate::render::{ReportView, report_view};
use crate::requests::{AccountsRequest, GenerateReportRequest, ReportPayload};

pub const LOADING_MESSAGE: &str = "보고서를 생성 중입니다...";
pub const NO_ACCOUNTS_MESSAGE: &str = "사용 가능한 광고 계정이 없습니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Fetching,
    Rendered,
    Errored,
}

/// Identifies one outbound report request and the page it asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub sequence: u64,
    pub page: u32,
}

/// Identifies one outbound account-list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountsTicket {
    pub sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountsState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(AccountSelection),
    /// The password is valid but no account is configured for it.
    Empty,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportForm {
    pub start_date: String,
    pub end_date: String,
    pub password: String,
}

#[derive(Debug, Default)]
pub struct ReportController {
    form: ReportForm,
    accounts: AccountsState,
    phase: Phase,
    last_sequence: u64,
    pending_report: Option<RequestTicket>,
    pending_accounts: Option<AccountsTicket>,
    view: Option<ReportView>,
    pagination: Option<PaginationState>,
    message: Option<String>,
    network_failure: bool,
    rendered_sequence: u64,
}

impl ReportController {
    /// Creates a controller with both dates set to `default_date`.
    pub fn new(default_date: String) -> Self {
        Self {
            form: ReportForm {
                start_date: default_date.clone(),
                end_date: default_date,
                password: String::new(),
            },
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ReportForm {
        &self.form
    }

    pub fn accounts(&self) -> &AccountsState {
        &self.accounts
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Fetching
    }

    pub fn view(&self) -> Option<&ReportView> {
        self.view.as_ref()
    }

    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    /// Status or error line to show under the form.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the current error came from the transport (no response or a
    /// non-2xx status) rather than from the form or the report service.
    pub fn is_network_failure(&self) -> bool {
        self.phase == Phase::Errored && self.network_failure
    }

    /// Ticket sequence of the report on screen; changes with every applied
    /// payload, even when the payload is identical to the previous one.
    pub fn rendered_sequence(&self) -> u64 {
        self.rendered_sequence
    }

    pub fn set_start_date(&mut self, value: String) {
        self.form.start_date = value;
    }

    pub fn set_end_date(&mut self, value: String) {
        self.form.end_date = value;
    }

    /// Updates the password. A different password invalidates the account
    /// list and any account request still in flight.
    pub fn set_password(&mut self, value: String) {
        if self.form.password != value {
            self.form.password = value;
            self.accounts = AccountsState::NotLoaded;
            self.pending_accounts = None;
        }
    }

    pub fn select_account(&mut self, account: &str) -> bool {
        match &mut self.accounts {
            AccountsState::Loaded(selection) => selection.select(account),
            _ => false,
        }
    }

    pub fn selected_account(&self) -> Option<&str> {
        match &self.accounts {
            AccountsState::Loaded(selection) => selection.selected.as_deref(),
            _ => None,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        self.last_sequence += 1;
        self.last_sequence
    }

    /// Starts loading the account list for the current password. Returns
    /// `None` (and sends nothing) when the password is empty or the list for
    /// this password is already loaded.
    pub fn begin_load_accounts(&mut self) -> Option<(AccountsTicket, AccountsRequest)> {
        if self.form.password.is_empty() {
            return None;
        }
        if matches!(self.accounts, AccountsState::Loaded(_) | AccountsState::Empty) {
            return None;
        }
        let ticket = AccountsTicket {
            sequence: self.next_sequence(),
        };
        self.pending_accounts = Some(ticket);
        self.accounts = AccountsState::Loading;
        Some((
            ticket,
            AccountsRequest {
                password: self.form.password.clone(),
            },
        ))
    }

    /// Applies an account-list outcome. Returns `false` when the ticket is
    /// stale and the outcome was discarded.
    pub fn finish_load_accounts(
        &mut self,
        ticket: AccountsTicket,
        outcome: Result<Vec<String>, ReportError>,
    ) -> bool {
        if self.pending_accounts != Some(ticket) {
            return false;
        }
        self.pending_accounts = None;
        self.accounts = match outcome {
            Ok(accounts) if accounts.is_empty() => AccountsState::Empty,
            Ok(accounts) => AccountsState::Loaded(AccountSelection::new(accounts)),
            Err(err) => AccountsState::Failed(err.to_string()),
        };
        true
    }

    fn validate(&self, page: u32) -> Result<GenerateReportRequest, ValidationError> {
        let required = [
            (FormField::Password, self.form.password.as_str()),
            (FormField::Account, self.selected_account().unwrap_or("")),
            (FormField::StartDate, self.form.start_date.as_str()),
            (FormField::EndDate, self.form.end_date.as_str()),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::Missing(*field));
        }
        for (field, value) in [
            (FormField::StartDate, &self.form.start_date),
            (FormField::EndDate, &self.form.end_date),
        ] {
            if parse_report_date(value).is_none() {
                return Err(ValidationError::InvalidDate(field));
            }
        }

        Ok(GenerateReportRequest {
            start_date: self.form.start_date.trim().to_string(),
            end_date: self.form.end_date.trim().to_string(),
            password: self.form.password.clone(),
            selected_account_key: self.selected_account().unwrap_or_default().to_string(),
            page: page.max(1),
        })
    }

    /// Validates the form and, when it is complete, returns the request for
    /// `page`. On a validation failure nothing is to be sent: the controller
    /// moves to `Errored` with the validation message.
    ///
    /// Any earlier report request still in flight is superseded either way.
    pub fn begin_report(
        &mut self,
        page: u32,
    ) -> Result<(RequestTicket, GenerateReportRequest), ReportError> {
        self.phase = Phase::Validating;
        self.pending_report = None;

        match self.validate(page) {
            Ok(request) => {
                let ticket = RequestTicket {
                    sequence: self.next_sequence(),
                    page: request.page,
                };
                self.pending_report = Some(ticket);
                self.phase = Phase::Fetching;
                self.message = Some(LOADING_MESSAGE.to_string());
                Ok((ticket, request))
            }
            Err(err) => {
                let err = ReportError::from(err);
                self.phase = Phase::Errored;
                self.message = Some(err.to_string());
                self.network_failure = false;
                Err(err)
            }
        }
    }

    /// Page-control entry point; re-validates the held form values.
    pub fn begin_page(
        &mut self,
        page: u32,
    ) -> Result<(RequestTicket, GenerateReportRequest), ReportError> {
        self.begin_report(page)
    }

    /// Applies a report outcome. Returns `false` when the ticket is stale
    /// and the outcome was discarded.
    ///
    /// A successful payload replaces the displayed report and pagination
    /// wholesale; a failure leaves the previous report on screen.
    pub fn finish_report(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ReportPayload, ReportError>,
    ) -> bool {
        if self.pending_report != Some(ticket) {
            return false;
        }
        self.pending_report = None;
        match outcome {
            Ok(payload) => {
                self.view = Some(report_view(&payload));
                self.pagination = payload.pagination;
                self.phase = Phase::Rendered;
                self.message = None;
                self.rendered_sequence = ticket.sequence;
            }
            Err(err) => {
                self.phase = Phase::Errored;
                self.message = Some(err.to_string());
                self.network_failure = err.is_network_failure();
            }
        }
        true
    }
}
