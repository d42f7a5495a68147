use actix_web::web;

use crate::handlers::compliance;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/compliance")
            .route("/items", web::get().to(compliance::get_mandatory_items))
            .route("/items/{key}", web::post().to(compliance::check_mandatory_item))
            .route("/status", web::post().to(compliance::get_compliance_status)),
    );
}
