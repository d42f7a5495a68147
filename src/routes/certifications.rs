use actix_web::web;

use crate::handlers::certifications;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/certifications").route(
        "/verification",
        web::post().to(certifications::update_verification_status),
    ));
}
