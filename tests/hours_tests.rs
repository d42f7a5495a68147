use actix_web::{http::StatusCode, test};
use carelink_be::Config;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

mod common;

#[actix_web::test]
async fn test_weekly_summary_with_overtime() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/summary")
        .set_json(json!({
            "timesheet": common::timesheet_json("draft", json!({
                "monday": "12",
                "tuesday": "12",
                "wednesday": 12,
                "thursday": "8",
                "friday": "",
                "saturday": "n/a"
            }))
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: Value = common::read_data(resp).await;
    assert_eq!(
        summary,
        json!({
            "totalHours": 44.0,
            "regularHours": 40.0,
            "overtimeHours": 4.0,
            "remainingHours": 0.0,
            "exceedsLimit": true
        })
    );
}

#[actix_web::test]
async fn test_summary_ignores_stale_reported_total() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let mut timesheet = common::timesheet_json("approved", json!({ "monday": "8", "wednesday": "4.5" }));
    timesheet["total_hours"] = json!(0);

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/summary")
        .set_json(json!({ "timesheet": timesheet }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let summary: Value = common::read_data(resp).await;
    assert_eq!(summary["totalHours"], json!(12.5));
    assert_eq!(summary["remainingHours"], json!(27.5));
    assert_eq!(summary["exceedsLimit"], json!(false));
}

#[actix_web::test]
async fn test_summary_uses_daily_entries_over_nonzero_reported_total() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    for (daily, expected) in [
        (json!({ "monday": "8", "tuesday": "8" }), 16.0),
        (json!({}), 0.0),
    ] {
        let mut timesheet = common::timesheet_json("approved", daily);
        timesheet["totalHours"] = json!(37.5);

        let req = test::TestRequest::post()
            .uri("/api/v1/hours/summary")
            .set_json(json!({ "timesheet": timesheet }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let summary: Value = common::read_data(resp).await;
        assert_eq!(summary["totalHours"], json!(expected));
        assert_eq!(summary["remainingHours"], json!(40.0 - expected));
    }
}

#[actix_web::test]
async fn test_summary_rejects_timesheet_without_week_start() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/summary")
        .set_json(json!({
            "timesheet": {
                "staffId": "0b6f8c3a-2d4e-4f1a-8b9c-3e5d7f9a1b2c",
                "dailyHours": { "monday": "8" }
            }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let message = common::read_error(resp).await;
    assert!(message.contains("weekStart"), "unexpected message: {}", message);
}

#[actix_web::test]
async fn test_period_total_across_weeks() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/period")
        .set_json(json!({
            "timesheets": [
                common::timesheet_json("approved", json!({ "monday": "12", "tuesday": "12" })),
                common::timesheet_json("approved", json!({ "friday": "7.5" })),
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let period: Value = common::read_data(resp).await;
    assert_eq!(period, json!({ "weeks": 2, "totalHours": 31.5 }));
}

#[actix_web::test]
async fn test_self_selection_respects_configured_limit() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/self-selection")
        .set_json(json!({ "currentHours": 30, "shiftType": "day" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let decision: Value = common::read_data(resp).await;
    assert_eq!(decision["allowed"], json!(false));
    assert_eq!(decision["projectedHours"], json!(42.0));

    let relaxed = Config {
        weekly_hours_limit: 48.0,
        ..Config::test_config()
    };
    let app = test::init_service(common::create_app(relaxed)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/self-selection")
        .set_json(json!({ "current_hours": 30, "shift_type": "day" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let decision: Value = common::read_data(resp).await;
    assert_eq!(decision["allowed"], json!(true));
    assert_eq!(decision["remainingHours"], json!(18.0));
}

#[actix_web::test]
async fn test_self_selection_rejects_negative_hours() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/hours/self-selection")
        .set_json(json!({ "currentHours": -1, "shiftType": "night" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_hour_stepping() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    for (body, expected) in [
        (json!({ "value": 7.5, "direction": "up" }), 8.0),
        (json!({ "value": 24, "direction": "up" }), 24.0),
        (json!({ "value": 0, "direction": "down" }), 0.0),
        (json!({ "text": "6.2", "direction": "set" }), 6.0),
        (json!({ "text": "31", "direction": "set" }), 24.0),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/hours/step")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let step: Value = common::read_data(resp).await;
        assert_eq!(step["value"], json!(expected), "request {}", body);
    }
}
