use actix_web::web;

use crate::handlers::shifts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shift-times")
            // registered before the catch-all label route
            .route("/classify", web::get().to(shifts::classify_start_time))
            .route("/{shift_type}", web::get().to(shifts::get_shift_times)),
    )
    .service(web::scope("/shifts").route("/plan", web::post().to(shifts::plan_shifts)));
}
