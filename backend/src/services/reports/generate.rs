//! `POST /api/generate-report`: one page of the report for an account and
//! date range.

use super::upstream::{ServerError, Upstream};
use actix_web::{web, HttpResponse};
use common::requests::{GenerateReportRequest, GENERATE_REPORT_ENDPOINT};

pub(crate) async fn process(
    upstream: web::Data<Upstream>,
    payload: web::Json<GenerateReportRequest>,
) -> Result<HttpResponse, ServerError> {
    let request = payload.into_inner();
    log::debug!(
        "report request: account={} {}..{} page={}",
        request.selected_account_key,
        request.start_date,
        request.end_date,
        request.page
    );
    upstream.forward(GENERATE_REPORT_ENDPOINT, &request).await
}
