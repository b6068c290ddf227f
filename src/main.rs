mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{info, warn};
use mongodb::bson::doc;
use mongodb::Client;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::services::{AuthService, RecipeService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db = client.database(&CONFIG.database_name);

    db.run_command(doc! { "ping": 1 })
        .await
        .expect("Failed to ping MongoDB");
    info!("Connected to MongoDB successfully!");

    let auth_service = web::Data::new(AuthService::new(&db));
    let user_service = web::Data::new(UserService::new(&db));
    let recipe_service = web::Data::new(RecipeService::new(&db));

    // Index creation failures (e.g. duplicates already present) should not
    // keep the server from starting.
    if let Err(e) = user_service.repository().create_indexes().await {
        warn!("Failed to create user indexes: {}", e);
    }
    if let Err(e) = recipe_service.repository().create_indexes().await {
        warn!("Failed to create recipe indexes: {}", e);
    }

    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);
    info!("Swagger UI at http://{}/swagger-ui/", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .app_data(recipe_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
