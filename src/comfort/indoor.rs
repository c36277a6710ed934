use crate::comfort::models::{CurrentConditions, IndoorComfort};
use crate::comfort::scorer::{comfort_score, NEUTRAL_SCORE};

pub const WAITING_FOR_DATA: &str = "Waiting for data...";
pub const VERY_COMFORTABLE: &str =
    "Very comfortable. You can keep windows slightly open and use fan at low speed.";
pub const MODERATELY_COMFORTABLE: &str =
    "Moderately comfortable. Fan at medium speed; AC optional if you feel warm.";
pub const MILDLY_UNCOMFORTABLE: &str =
    "A bit uncomfortable. Consider closing curtains and using fan/AC.";
pub const UNCOMFORTABLE: &str =
    "Uncomfortable conditions. Use AC (or strongest ventilation) and keep windows mostly closed.";

/// Returns the indoor comfort score for the current conditions together with
/// a recommendation on how to ventilate or cool the room.
///
/// # Arguments
///
/// * 'current' - current conditions, None if not yet known
pub fn indoor_comfort(current: Option<&CurrentConditions>) -> IndoorComfort {
    let Some(current) = current else {
        return IndoorComfort { score: NEUTRAL_SCORE, recommendation: WAITING_FOR_DATA };
    };

    let score = comfort_score(current.temperature, current.humidity);

    IndoorComfort { score, recommendation: recommendation(score) }
}

fn recommendation(score: u8) -> &'static str {
    match score {
        80.. => VERY_COMFORTABLE,
        60..=79 => MODERATELY_COMFORTABLE,
        40..=59 => MILDLY_UNCOMFORTABLE,
        _ => UNCOMFORTABLE,
    }
}
