use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use mt_database::Store;
use serde::Deserialize;

/// Default and ceiling for the `limit` query parameter on `/episodes`.
const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

#[derive(Deserialize)]
pub struct EpisodesQuery {
    limit: Option<i64>,
}

pub async fn statistics(store: web::Data<Store>) -> impl Responder {
    match store.statistics().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(stats) => HttpResponse::Ok().json(stats),
    }
}

pub async fn episodes(store: web::Data<Store>, req: web::Query<EpisodesQuery>) -> impl Responder {
    let limit = req.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    match store.recent(limit).await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(rows) => HttpResponse::Ok().json(rows),
    }
}

pub async fn dataset(store: web::Data<Store>) -> impl Responder {
    match store.export().await {
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
        Ok(rows) => HttpResponse::Ok().json(rows),
    }
}
