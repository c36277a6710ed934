use std::collections::HashMap;
use std::sync::Arc;
use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::Mutex;
use crate::dashboard::Snapshot;
use crate::initialization::City;
use crate::manager_openmeteo::OpenMeteo;

/// Latest snapshot per city name
pub type SnapshotStore = Arc<Mutex<HashMap<String, Snapshot>>>;

/// Refresh loop, fetches every city once per interval
///
/// # Arguments
///
/// * 'store' - snapshot store shared with the web handlers
/// * 'open_meteo' - forecast and air quality provider
/// * 'cities' - cities to keep fresh
/// * 'interval_secs' - seconds between refreshes
pub async fn run_refresh(store: SnapshotStore, open_meteo: OpenMeteo, cities: Vec<City>, interval_secs: u64) {
    loop {
        for city in cities.iter() {
            refresh_city(&store, &open_meteo, city).await;
        }

        tokio::time::sleep(tokio::time::Duration::from_secs(interval_secs)).await;
    }
}

/// Fetches forecast and air quality for one city and stores whatever succeeded.
/// A failed fetch keeps the previous data of that part.
///
/// # Arguments
///
/// * 'store' - snapshot store to update
/// * 'open_meteo' - forecast and air quality provider
/// * 'city' - the city to refresh
pub async fn refresh_city(store: &SnapshotStore, open_meteo: &OpenMeteo, city: &City) {
    let (forecast, air_quality) = tokio::join!(
        open_meteo.forecast(city.lat, city.long),
        open_meteo.air_quality(city.lat, city.long),
    );

    let mut snapshots = store.lock().await;
    let snapshot = snapshots.entry(city.name.clone()).or_default();

    match forecast {
        Ok(f) => {
            match f.hourly.as_ref() {
                Some(h) if !h.is_empty() => info!("{}: forecast with {} hours", city.name, h.len()),
                _ => warn!("{}: forecast without hourly data", city.name),
            }
            snapshot.current = f.current;
            snapshot.hourly = f.hourly;
            snapshot.updated = Some(Utc::now());
        }
        Err(e) => error!("{}: failed to get forecast: {}", city.name, e),
    }

    match air_quality {
        Ok(a) => snapshot.air_quality = a,
        Err(e) => error!("{}: failed to get air quality: {}", city.name, e),
    }
}
