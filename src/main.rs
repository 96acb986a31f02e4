use actix_web::{web, App, HttpServer};
use chirp::{handlers, store};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::path::Path;
use std::{env, io};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    Builder::new()
        .filter_level(LevelFilter::Debug)
        .format_timestamp_secs()
        .init();

    let data_dir = env::var("CHIRP_DATA_DIR").unwrap_or_else(|_| ".".to_string());
    let bind = env::var("CHIRP_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    info!("Starting chirp backend...");
    let stores = store::Stores::open(Path::new(&data_dir))
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let stores = web::Data::new(stores);

    info!("Stores ready under {}", data_dir);

    HttpServer::new(move || {
        App::new()
            .app_data(stores.clone())
            .configure(handlers::routes)
    })
    .bind(bind.as_str())?
    .run()
    .await
}
