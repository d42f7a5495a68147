use actix_web::web;

use crate::handlers::timesheets;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/timesheets")
            .route("/transition", web::post().to(timesheets::transition_timesheet))
            .route("/hours", web::post().to(timesheets::edit_daily_hours)),
    );
}
