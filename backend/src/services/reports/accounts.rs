//! `POST /api/accounts`: lists the ad accounts a password unlocks.
//!
//! The body is `{ "password": ... }`. The upstream answers with a JSON array
//! of account keys, or `403 {error}` for a wrong password; both are relayed
//! as-is.

use super::upstream::{ServerError, Upstream};
use actix_web::{web, HttpResponse};
use common::requests::{AccountsRequest, ACCOUNTS_ENDPOINT};

pub(crate) async fn process(
    upstream: web::Data<Upstream>,
    payload: web::Json<AccountsRequest>,
) -> Result<HttpResponse, ServerError> {
    upstream.forward(ACCOUNTS_ENDPOINT, &payload.into_inner()).await
}
