use actix_web::web;

use crate::handlers::hours;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hours")
            .route("/summary", web::post().to(hours::get_weekly_summary))
            .route("/period", web::post().to(hours::get_period_total))
            .route("/self-selection", web::post().to(hours::check_shift_self_selection))
            .route("/step", web::post().to(hours::step_hours)),
    );
}
