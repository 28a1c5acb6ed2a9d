use crate::{error::ApiError, kv_store::KVStore, types::Message};
use actix_web::{web, HttpResponse};
use log::debug;

/// Raw query pairs in the order they appeared. Repeated names are kept.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`; an empty value counts as absent.
fn first_param(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
}

pub async fn greet() -> HttpResponse {
    HttpResponse::Ok().json(Message::greeting())
}

pub async fn store(
    kv: web::Data<KVStore>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, ApiError> {
    let (key, value) = match (first_param(&query, "key"), first_param(&query, "value")) {
        (Some(key), Some(value)) => (key, value),
        _ => return Err(ApiError::MissingKeyValue),
    };
    debug!("store key={:?}", key);
    kv.set(&key, value).await;
    Ok(HttpResponse::Ok().finish())
}

pub async fn retrieve(
    kv: web::Data<KVStore>,
    query: web::Query<QueryPairs>,
) -> Result<HttpResponse, ApiError> {
    let key = first_param(&query, "key").ok_or(ApiError::MissingKey)?;
    match kv.get(&key).await {
        Some(value) => {
            debug!("retrieve key={:?} hit", key);
            Ok(HttpResponse::Ok().json(Message::new(value)))
        }
        None => {
            debug!("retrieve key={:?} miss", key);
            Err(ApiError::KeyNotFound(key))
        }
    }
}

/// Registers `/greet`, `/store` and `/retrieve`. The store must already be
/// attached as `web::Data<KVStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/greet", web::get().to(greet))
        .route("/store", web::route().to(store))
        .route("/retrieve", web::route().to(retrieve));
}
