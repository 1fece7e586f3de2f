use actix_web::middleware::NormalizePath;
use actix_web::web::Data;
use actix_web::{App, HttpServer, Responder, get};
use dotenvy::dotenv;

mod api;
mod config;
mod docs;
mod model;
mod routes;
mod saver;
mod storage;
mod store;
mod summary;
mod utils;

use crate::docs::ApiDoc;
use crate::model::record::DailyRecords;
use crate::model::settings::Settings;
use crate::store::AppState;
use config::Config;
use futures::channel::mpsc;
use std::sync::Arc;
use std::time::Duration;
use storage::FileKv;
use tracing::info;
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[get("/")]
async fn index() -> impl Responder {
    "Employee Attendance Tracker"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let kv = FileKv::open(&config.data_dir).map_err(std::io::Error::other)?;

    // Load once at startup; corrupt or missing data starts empty.
    let employees: Vec<model::employee::Employee> =
        storage::load_or_default(&kv, storage::EMPLOYEES_KEY);
    let records: DailyRecords = storage::load_or_default(&kv, storage::RECORDS_KEY);
    let theme = storage::load_or_default(&kv, storage::THEME_KEY);
    info!(
        employees = employees.len(),
        dates = records.len(),
        "Loaded persisted state"
    );

    let (dirty_tx, dirty_rx) = mpsc::unbounded();
    let state = Arc::new(AppState::new(
        employees,
        records,
        Settings { theme },
        dirty_tx,
    ));

    actix_web::rt::spawn(saver::run(
        state.clone(),
        kv,
        dirty_rx,
        Duration::from_millis(config.save_debounce_ms),
    ));

    let server_addr = config.server_addr.clone();
    let config_data = config.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(Data::from(state.clone()))
            .app_data(Data::new(config_data.clone()))
            .service(index)
            .configure(|cfg| routes::configure(cfg, config_data.clone()))
    })
    .bind(server_addr)?
    .run()
    .await
}
