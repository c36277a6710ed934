//! Comfort and activity scoring for current conditions and the hourly forecast.
//! Every function is pure and recomputes its result from the given snapshot.

pub mod activity;
mod bands;
pub mod classify;
pub mod drying;
pub mod hourly;
pub mod indoor;
pub mod models;
pub mod scorer;
