use std::io;
use std::path::Path;

use actix_web::{middleware, web, App, HttpServer};
use tokio::sync::Mutex;

use showcase_backend::adapters::{FileBuildsRepository, RedisBuildsRepository};
use showcase_backend::api::{self, AppState};
use showcase_backend::app_config::{AppConfig, StoreConfig};
use showcase_backend::ports::BoxedBuildsRepository;
use showcase_backend::seeds;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();
    let config = AppConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let seeds = match &config.seeds_path {
        Some(path) => seeds::load(Path::new(path))
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?,
        None => Vec::new(),
    };
    log::info!("loaded {} seed record(s)", seeds.len());

    let store: BoxedBuildsRepository = match &config.store {
        StoreConfig::File { path } => Box::new(FileBuildsRepository::new(path, seeds.clone())),
        StoreConfig::Redis { url, key } => Box::new(
            RedisBuildsRepository::new(url, key.clone(), seeds.clone())
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?,
        ),
    };
    let state = web::Data::new(AppState {
        store: Mutex::new(store),
        seeds,
    });

    let host = config.host.clone();
    let port = config.port;
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
