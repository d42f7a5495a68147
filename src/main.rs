use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use carelink_be::middleware::RequestIdMiddleware;
use carelink_be::{AppState, Config, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("CareLink rules API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {}, weekly limit: {}h, expiry warning: {} days)",
        config.environment,
        config.weekly_hours_limit,
        config.expiry_warning_days
    );

    let server_address = config.server_address();
    let app_state = web::Data::new(AppState::new(config));

    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        let cors = if app_state.config.is_development() {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin(&app_state.config.client_base_url)
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec![
                    "Content-Type",
                    "Accept",
                    "X-Requested-With",
                    "X-Correlation-ID",
                ])
                .max_age(3600)
        };

        App::new()
            .app_data(app_state.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
