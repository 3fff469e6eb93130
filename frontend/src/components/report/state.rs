//! Component state for the report form.

use common::controller::ReportController;
use common::sort::SortState;
use yew::prelude::*;

use super::helpers::default_report_date;

pub struct ReportComponent {
    /// Form values, account list, last report and request bookkeeping.
    pub controller: ReportController,

    /// Last clicked header of the displayed table. Reset whenever a new
    /// report replaces the table.
    pub sort: SortState,

    /// Container the report markup is inserted into.
    pub table_ref: NodeRef,
}

impl ReportComponent {
    /// Both date inputs start at yesterday's local date. The default is taken
    /// once here and never recomputed.
    pub fn new() -> Self {
        Self {
            controller: ReportController::new(default_report_date()),
            sort: SortState::default(),
            table_ref: NodeRef::default(),
        }
    }
}
