use actix_cors::Cors;
use actix_web::http::Method;
use actix_web::{middleware, web, App, HttpServer};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::routes::products::{
    accept_options, create_product, delete_product, get_product, list_products,
    reject_nested_path, update_product,
};
use crate::routes::receipts::list_receipts;

pub mod db;
pub mod domain;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;

/// Registers the API routes. Each resource lists its supported methods, so
/// a matched path with any other verb answers 405. OPTIONS is accepted on
/// both product routes with an empty 200; when the request is a CORS
/// preflight the wrapping middleware answers it before routing.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::resource("/products")
                    .route(web::get().to(list_products))
                    .route(web::post().to(create_product))
                    .route(web::method(Method::OPTIONS).to(accept_options)),
            )
            .service(
                web::resource("/products/{id}")
                    .route(web::get().to(get_product))
                    .route(web::put().to(update_product))
                    .route(web::delete().to(delete_product))
                    .route(web::method(Method::OPTIONS).to(accept_options)),
            )
            .route("/products/{id}/{tail:.*}", web::to(reject_nested_path))
            .service(web::resource("/receipts").route(web::get().to(list_receipts))),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure_app)
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
