use common::controller::{AccountsTicket, RequestTicket};
use common::error::ReportError;
use common::requests::ReportPayload;

pub enum Msg {
    SetStartDate(String),
    SetEndDate(String),
    SetPassword(String),
    /// Password field lost focus.
    LoadAccounts,
    AccountsLoaded {
        ticket: AccountsTicket,
        outcome: Result<Vec<String>, ReportError>,
    },
    SelectAccount(String),
    Submit,
    GoToPage(u32),
    ReportLoaded {
        ticket: RequestTicket,
        outcome: Result<ReportPayload, ReportError>,
    },
    /// Header of the given column was clicked.
    SortColumn(usize),
}
