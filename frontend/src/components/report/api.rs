//! Calls to the report-service endpoints.
//!
//! Requests carry no timeout: the browser's own limits apply, and a
//! superseded request is simply ignored when it eventually completes.

use common::controller::{interpret_accounts_response, interpret_report_response};
use common::error::ReportError;
use common::requests::{
    AccountsRequest, GenerateReportRequest, ReportPayload, ACCOUNTS_ENDPOINT,
    GENERATE_REPORT_ENDPOINT,
};
use gloo_net::http::Request;
use serde::Serialize;

pub async fn fetch_accounts(request: &AccountsRequest) -> Result<Vec<String>, ReportError> {
    let (status, body) = post_json(ACCOUNTS_ENDPOINT, request).await?;
    interpret_accounts_response(status, &body)
}

pub async fn fetch_report(request: &GenerateReportRequest) -> Result<ReportPayload, ReportError> {
    let (status, body) = post_json(GENERATE_REPORT_ENDPOINT, request).await?;
    interpret_report_response(status, &body)
}

async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(u16, String), ReportError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ReportError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ReportError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ReportError::Malformed(e.to_string()))?;
    Ok((status, text))
}
