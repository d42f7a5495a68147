use actix_web::web;

pub mod certifications;
pub mod compliance;
pub mod hours;
pub mod shifts;
pub mod timesheets;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compliance::configure)
            .configure(certifications::configure)
            .configure(shifts::configure)
            .configure(hours::configure)
            .configure(timesheets::configure),
    );
}
