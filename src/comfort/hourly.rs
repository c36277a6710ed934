use crate::comfort::bands::{mean, reading, within};
use crate::comfort::models::{Daypart, FocusWindow, HourComfort, HourlySeries, Suggestion};
use crate::comfort::scorer::{clamp_score, comfort_score};

/// A named question answered by the hourly forecast, e.g. "best time to run"
struct HourQuery {
    label: &'static str,
    accepts: fn(&HourComfort) -> bool,
}

const QUERIES: [HourQuery; 5] = [
    HourQuery { label: "Best time to run", accepts: good_for_running },
    HourQuery { label: "Best time for a walk", accepts: good_for_walking },
    HourQuery { label: "Best outdoor study time", accepts: good_for_studying },
    HourQuery { label: "Best time to travel", accepts: good_for_travel },
    HourQuery { label: "Best time to dry clothes", accepts: good_for_drying },
];

/// Attaches a comfort score to every sample of the series, keeping chronological order
///
/// # Arguments
///
/// * 'hourly' - the hourly forecast
pub fn comfort_series(hourly: &HourlySeries) -> Vec<HourComfort> {
    hourly
        .samples()
        .iter()
        .map(|&sample| HourComfort {
            sample,
            comfort: comfort_score(sample.temperature, sample.humidity),
        })
        .collect()
}

/// Returns the most comfortable hour for each activity query that at least one hour qualifies for.
/// Queries without any qualifying hour are left out.
///
/// # Arguments
///
/// * 'hourly' - the hourly forecast
pub fn best_hours(hourly: &HourlySeries) -> Vec<Suggestion> {
    let series = comfort_series(hourly);

    QUERIES
        .iter()
        .filter_map(|query| {
            best_hour(&series, query.accepts).map(|best| Suggestion {
                label: query.label,
                hour: format!("{}:00", best.sample.hour()),
                comfort: best.comfort,
            })
        })
        .collect()
}

/// Linear scan for the highest comfort among accepted hours.
/// On equal comfort the earliest hour wins.
fn best_hour(series: &[HourComfort], accepts: fn(&HourComfort) -> bool) -> Option<&HourComfort> {
    let mut best: Option<&HourComfort> = None;

    for hour in series.iter().filter(|h| accepts(h)) {
        match best {
            Some(b) if b.comfort >= hour.comfort => {}
            _ => best = Some(hour),
        }
    }

    best
}

// Missing readings count as 0: they pass ceilings and fail ranges and floors.

fn good_for_running(h: &HourComfort) -> bool {
    within(reading(h.sample.temperature), 15.0, 28.0)
        && reading(h.sample.humidity) <= 70.0
        && reading(h.sample.precipitation_probability) < 30.0
}

fn good_for_walking(h: &HourComfort) -> bool {
    within(reading(h.sample.temperature), 18.0, 32.0) && h.comfort >= 60
}

fn good_for_studying(h: &HourComfort) -> bool {
    within(reading(h.sample.temperature), 20.0, 30.0) && h.comfort >= 65
}

fn good_for_travel(h: &HourComfort) -> bool {
    reading(h.sample.precipitation_probability) < 40.0 && h.comfort >= 55
}

fn good_for_drying(h: &HourComfort) -> bool {
    reading(h.sample.humidity) <= 60.0
        && reading(h.sample.precipitation_probability) < 20.0
        && reading(h.sample.uv_index) > 2.0
        && reading(h.sample.temperature) >= 20.0
}

/// Picks the daypart best suited for focused work, late morning (9-12) or afternoon (14-18).
///
/// Late morning wins when both its mean comfort and its mood score are at least as good as the
/// afternoon's, a full tie included. Any disagreement between the two measures goes to the afternoon.
/// If only one daypart is covered by the forecast that one is used, if none is covered None is returned.
///
/// # Arguments
///
/// * 'hourly' - the hourly forecast
pub fn focus_window(hourly: &HourlySeries) -> Option<FocusWindow> {
    let series = comfort_series(hourly);
    let late_morning = DaypartStats::new(&series, Daypart::LateMorning);
    let afternoon = DaypartStats::new(&series, Daypart::Afternoon);

    let best = match (late_morning, afternoon) {
        (None, None) => return None,
        (Some(lm), None) => lm,
        (None, Some(af)) => af,
        (Some(lm), Some(af)) => {
            if lm.mean_comfort >= af.mean_comfort && lm.mood >= af.mood {
                lm
            } else {
                af
            }
        }
    };

    Some(FocusWindow {
        label: "Best focus window",
        daypart: best.daypart,
        time: best.daypart.span(),
        comfort: clamp_score(best.mean_comfort),
        mood: best.mood,
        mood_prediction: mood_prediction(best.mood),
    })
}

struct DaypartStats {
    daypart: Daypart,
    mean_comfort: f64,
    mood: u8,
}

impl DaypartStats {
    /// Gathers the statistics of the hours falling into the daypart, None if there are none
    ///
    /// # Arguments
    ///
    /// * 'series' - comfort series to pick hours from
    /// * 'daypart' - the daypart to gather
    fn new(series: &[HourComfort], daypart: Daypart) -> Option<DaypartStats> {
        let hours: Vec<&HourComfort> = series
            .iter()
            .filter(|h| daypart.contains(h.sample.hour()))
            .collect();

        let mean_comfort = mean(hours.iter().map(|h| h.comfort as f64))?;
        let mean_uv = mean(hours.iter().map(|h| h.uv_or_zero())).unwrap_or(0.0);
        let mood = mood_score(&hours, mean_comfort, mean_uv);

        Some(DaypartStats { daypart, mean_comfort, mood })
    }
}

/// Mood rises with comfort, stable temperatures and some sunlight (capped at 20 points).
/// Temperature stability is punished by the single largest deviation from the daypart's mean temperature.
fn mood_score(hours: &[&HourComfort], mean_comfort: f64, mean_uv: f64) -> u8 {
    let temps: Vec<f64> = hours.iter().filter_map(|h| h.sample.temperature).collect();

    let max_deviation = match mean(temps.iter().copied()) {
        Some(mean_temp) => temps.iter().map(|t| (t - mean_temp).abs()).fold(0.0, f64::max),
        None => 0.0,
    };
    let temp_stability = 100.0 - max_deviation * 5.0;
    let sunlight = (mean_uv * 5.0).min(20.0);

    clamp_score((mean_comfort * 0.5 + temp_stability * 0.3 + sunlight) * 0.8)
}

fn mood_prediction(mood: u8) -> &'static str {
    match mood {
        70.. => "High energy & focus expected",
        50..=69 => "Moderate productivity likely",
        _ => "Lower energy - take breaks",
    }
}
