use actix_web::{middleware::Logger as ActixLogger, web, App, HttpServer};
use greetkv::{
    config::{load_env_file, ServerConfig},
    cors::{build_cors, check_env_cors, load_and_validate_cors_origins},
    handlers,
    logger::setup_logger,
    KVStore,
};
use log::{error, info};
use std::{
    io::ErrorKind,
    process::{exit, id as process_id},
};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    setup_logger();
    load_env_file();

    let config = ServerConfig::from_env();
    info!("{} {} PID: {}", NAME, VERSION, process_id());
    info!("Config: {:?}", config);

    let cors_origins = if check_env_cors(&config.cors_file) {
        load_and_validate_cors_origins(&config.cors_file).unwrap_or_else(|e| {
            error!("Failed to load or validate CORS origins: {}", e);
            exit(1);
        })
    } else {
        Vec::new()
    };
    info!("Allowed cors_origins: {:?}", cors_origins);

    let store = web::Data::new(KVStore::new());
    let kv_handle = store.get_ref().clone();
    let target_server = config.bind_addr();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(ActixLogger::default())
            .wrap(build_cors(&cors_origins))
            .configure(handlers::configure)
    })
    .bind(&target_server);

    let server = match server {
        Ok(server) => server,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            error!("Port {} is already in use.", config.port);
            exit(52);
        }
        Err(e) => {
            error!("Failed to bind {}: {}", target_server, e);
            return Err(e);
        }
    };

    info!("Server listening on http://{}", target_server);
    let execution = server.run().await;
    info!(
        "Worker stopped with PID: {}, {} keys held at shutdown",
        process_id(),
        kv_handle.len().await
    );

    if let Err(e) = &execution {
        error!("Server runtime failure: {:?}", e);
    }
    execution
}
