mod comfort;
mod dashboard;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_openmeteo;
mod manager_refresh;
mod perceived_temperature;

use std::collections::HashMap;
use std::sync::Arc;
use actix_web::{web, App, HttpServer};
use log::info;
use tokio::sync::Mutex;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_openmeteo::OpenMeteo;
use crate::manager_refresh::{run_refresh, SnapshotStore};

pub struct AppState {
    store: SnapshotStore,
    cities: Vec<String>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;
    let open_meteo = OpenMeteo::new(&config.open_meteo)?;

    let store: SnapshotStore = Arc::new(Mutex::new(HashMap::new()));
    let city_names: Vec<String> = config.cities.iter().map(|c| c.name.clone()).collect();

    info!("refreshing {} cities every {} seconds", city_names.len(), config.refresh.interval_secs);
    tokio::spawn(run_refresh(store.clone(), open_meteo, config.cities.clone(), config.refresh.interval_secs));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState { store: store.clone(), cities: city_names.clone() }))
            .service(handlers::cities)
            .service(handlers::dashboard)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
