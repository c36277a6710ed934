use actix_web::{get, web, HttpResponse, Responder};
use log::{info, warn};
use serde::Deserialize;
use crate::dashboard::Dashboard;
use crate::AppState;

#[derive(Deserialize, Debug)]
struct DashboardParams {
    city: String,
}

#[get("/cities")]
pub async fn cities(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.cities)
}

#[get("/dashboard")]
pub async fn dashboard(params: web::Query<DashboardParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    if !data.cities.contains(&params.city) {
        warn!("unknown city: {}", params.city);
        return HttpResponse::NotFound().finish();
    }

    let snapshot = data.store.lock().await.get(&params.city).cloned().unwrap_or_default();

    HttpResponse::Ok().json(Dashboard::new(&params.city, &snapshot))
}
