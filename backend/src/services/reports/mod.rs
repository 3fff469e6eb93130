mod accounts;
mod generate;
pub mod upstream;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse, ResponseError};
use common::requests::ErrorBody;

const API_PATH: &str = "/api";
const JSON_LIMIT: usize = 1024 * 1024;

/// Configures and returns the Actix `Scope` for the forwarded report routes.
pub fn configure_routes() -> actix_web::Scope {
    web::scope(API_PATH)
        .route("/accounts", web::post().to(accounts::process))
        .route("/generate-report", web::post().to(generate::process))
}

/// JSON extractor settings for the API: 1 MiB bodies, and decode failures
/// answered with the same `{error}` shape the upstream uses.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            log::warn!("rejected request body: {err}");
            let response = HttpResponse::build(err.status_code()).json(ErrorBody {
                error: format!("요청 본문을 해석할 수 없습니다: {err}"),
            });
            InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::upstream::Upstream;
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App, HttpServer};

    fn report_body() -> serde_json::Value {
        serde_json::json!({
            "start_date": "2024-05-01",
            "end_date": "2024-05-07",
            "password": "secret",
            "selected_account_key": "main",
            "page": 2
        })
    }

    macro_rules! report_app {
        ($upstream:expr) => {
            test::init_service(
                App::new()
                    .app_data(json_config())
                    .app_data(web::Data::new($upstream))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn unconfigured_upstream_is_service_unavailable() {
        let app = report_app!(Upstream::new(None, None).unwrap());

        let req = test::TestRequest::post()
            .uri("/api/accounts")
            .set_json(serde_json::json!({ "password": "secret" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());
    }

    #[actix_web::test]
    async fn malformed_body_is_bad_request() {
        let app = report_app!(Upstream::new(None, None).unwrap());

        let req = test::TestRequest::post()
            .uri("/api/generate-report")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"start_date": "2024-05-01""#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorBody = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());
    }

    #[actix_web::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let app = report_app!(Upstream::new(Some("http://127.0.0.1:9".into()), None).unwrap());

        let req = test::TestRequest::post()
            .uri("/api/generate-report")
            .set_json(report_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn relays_upstream_status_and_body() {
        async fn reject_password(payload: web::Json<serde_json::Value>) -> HttpResponse {
            assert_eq!(payload["password"], "wrong");
            HttpResponse::Forbidden().json(ErrorBody {
                error: "비밀번호가 올바르지 않습니다.".into(),
            })
        }

        async fn second_page(payload: web::Json<serde_json::Value>) -> HttpResponse {
            let page = payload["page"].as_u64().unwrap_or_default();
            HttpResponse::Ok().json(serde_json::json!({
                "html_table": "<table></table>",
                "pagination": { "current_page": page, "total_pages": 3 }
            }))
        }

        let server = HttpServer::new(|| {
            App::new()
                .route("/api/accounts", web::post().to(reject_password))
                .route("/api/generate-report", web::post().to(second_page))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let app = report_app!(Upstream::new(Some(format!("http://{addr}/")), None).unwrap());

        let req = test::TestRequest::post()
            .uri("/api/accounts")
            .set_json(serde_json::json!({ "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: ErrorBody = test::read_body_json(resp).await;
        assert_eq!(body.error, "비밀번호가 올바르지 않습니다.");

        let req = test::TestRequest::post()
            .uri("/api/generate-report")
            .set_json(report_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["pagination"]["current_page"], 2);

        handle.stop(true).await;
    }
}
