//! Unified Backend Server
//!
//! Combines the dataset query API and live game hosting into a single
//! actix-web server: `/ws` upgrades into the gameroom coordinator, and
//! `/api` serves statistics and episode exports from PostgreSQL.
//!
//! ## Submodules
//!
//! - [`query`] — Episode listing, dataset export, and statistics routes

pub mod query;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use mt_records::EpisodeSink;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

pub async fn run() -> Result<(), std::io::Error> {
    let client = mt_database::db().await;
    mt_database::migrate(&client)
        .await
        .expect("schema migration failed");
    let store = Arc::new(mt_database::Store::new(client.clone()));
    let sink: Arc<dyn EpisodeSink> = store.clone();
    let gateway = web::Data::new(mt_hosting::Gateway::new(sink));
    let store = web::Data::from(store);
    let client = web::Data::new(client);
    log::info!("starting unified server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(gateway.clone())
            .app_data(store.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .route("/ws", web::get().to(mt_hosting::handlers::connect))
            .service(
                web::scope("/api")
                    .route("/statistics", web::get().to(query::handlers::statistics))
                    .route("/episodes", web::get().to(query::handlers::episodes))
                    .route("/dataset", web::get().to(query::handlers::dataset)),
            )
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
