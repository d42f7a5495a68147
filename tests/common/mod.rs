#![allow(dead_code)]

use actix_web::{App, dev::ServiceResponse, test, web};
use chrono::{DateTime, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::env;

use carelink_be::handlers::shared::ApiResponse;
use carelink_be::middleware::RequestIdMiddleware;
use carelink_be::{AppState, Config, routes};

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Fixed evaluation instant used across the suites.
pub fn as_of() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// Create an Actix web app configured for testing
pub fn create_app(
    config: Config,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    setup_test_env();
    App::new()
        .app_data(web::Data::new(AppState::new(config)))
        .wrap(RequestIdMiddleware)
        .configure(routes::configure)
}

pub async fn read_data<T: DeserializeOwned>(resp: ServiceResponse) -> T {
    let body: ApiResponse<T> = test::read_body_json(resp).await;
    assert!(body.success, "expected a successful response");
    body.data.expect("response data")
}

pub async fn read_error(resp: ServiceResponse) -> String {
    let body: ApiResponse<Value> = test::read_body_json(resp).await;
    assert!(!body.success, "expected an error response");
    body.message.unwrap_or_default()
}

pub fn verified_cert(cert_type: &str, title: &str, expiry: Option<&str>) -> Value {
    json!({
        "type": cert_type,
        "title": title,
        "verificationStatus": "verified",
        "isValid": true,
        "expiryDate": expiry
    })
}

pub fn timesheet_json(status: &str, daily: Value) -> Value {
    json!({
        "id": "7d3c1a9e-5b1f-4a3e-9d55-0f7b6e2c1a11",
        "staffId": "0b6f8c3a-2d4e-4f1a-8b9c-3e5d7f9a1b2c",
        "weekStart": "2025-01-06",
        "weekEnd": "2025-01-12",
        "dailyHours": daily,
        "status": status
    })
}
