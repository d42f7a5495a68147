use actix_web::{http::StatusCode, test};
use carelink_be::Config;
use carelink_be::models::{Timesheet, TimesheetStatus};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

mod common;

fn transition(timesheet: Value, action: &str, notes: Option<&str>) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/v1/timesheets/transition")
        .insert_header(("X-Correlation-ID", "timesheet-suite"))
        .set_json(json!({ "timesheet": timesheet, "action": action, "notes": notes }))
}

#[actix_web::test]
async fn test_submit_then_approve() {
    let app = test::init_service(common::create_app(Config::test_config())).await;
    let draft = common::timesheet_json("draft", json!({ "monday": "8" }));

    let resp = test::call_service(&app, transition(draft, "submit", None).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-correlation-id").unwrap(),
        "timesheet-suite"
    );
    let pending: Timesheet = common::read_data(resp).await;
    assert_eq!(pending.status, TimesheetStatus::PendingManagerApproval);
    assert!(pending.submitted_at.is_some());

    let req = transition(serde_json::to_value(&pending).unwrap(), "approve", Some("Thanks"));
    let resp = test::call_service(&app, req.to_request()).await;
    let approved: Timesheet = common::read_data(resp).await;
    assert_eq!(approved.status, TimesheetStatus::Approved);
    assert_eq!(approved.manager_notes.as_deref(), Some("Thanks"));
    assert_eq!(approved.id, pending.id);
}

#[actix_web::test]
async fn test_rejected_edit_and_resubmit_goes_back_to_pending() {
    let app = test::init_service(common::create_app(Config::test_config())).await;
    let rejected = common::timesheet_json("rejected", json!({ "monday": "8", "tuesday": "14" }));

    // approving a rejected sheet directly is refused
    let resp = test::call_service(&app, transition(rejected.clone(), "approve", None).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/timesheets/hours")
        .set_json(json!({ "timesheet": rejected, "day": "Tuesday", "entry": "7.4" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let edited: Timesheet = common::read_data(resp).await;
    assert_eq!(edited.status, TimesheetStatus::Rejected);
    assert_eq!(edited.daily_hours.tuesday, "7.5");
    assert_eq!(edited.total_hours(), 15.5);

    let req = transition(serde_json::to_value(&edited).unwrap(), "submit", None);
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let resubmitted: Timesheet = common::read_data(resp).await;
    assert_eq!(resubmitted.status, TimesheetStatus::PendingManagerApproval);
    assert_eq!(resubmitted.id, edited.id);
}

#[actix_web::test]
async fn test_pending_timesheet_cannot_be_edited() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/timesheets/hours")
        .set_json(json!({
            "timesheet": common::timesheet_json("pending_manager_approval", json!({})),
            "day": "monday",
            "entry": "8"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let message = common::read_error(resp).await;
    assert!(message.contains("can no longer be edited"), "unexpected message: {}", message);
}

#[actix_web::test]
async fn test_unknown_weekday_is_rejected() {
    let app = test::init_service(common::create_app(Config::test_config())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/timesheets/hours")
        .set_json(json!({
            "timesheet": common::timesheet_json("draft", json!({})),
            "day": "someday",
            "entry": "8"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
