//! Route table.

use actix_web::{web, HttpResponse};

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login))
                    .route("/profile", web::get().to(handlers::get_profile))
                    .route("/profile", web::patch().to(handlers::update_profile)),
            )
            .service(
                web::scope("/recipes")
                    .route("", web::get().to(handlers::list_recipes))
                    .route("", web::post().to(handlers::create_recipe))
                    .route("/{id}", web::get().to(handlers::get_recipe))
                    .route("/{id}", web::patch().to(handlers::update_recipe))
                    .route("/{id}", web::delete().to(handlers::delete_recipe))
                    .route("/{id}/like", web::post().to(handlers::toggle_like))
                    .route("/{id}/comments", web::post().to(handlers::add_comment)),
            ),
    );
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
