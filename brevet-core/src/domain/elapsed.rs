use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A distance ridden at a constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub distance_km: f64,
    pub speed_kmh: f64,
}

impl Leg {
    pub fn new(distance_km: f64, speed_kmh: f64) -> Self {
        Leg {
            distance_km,
            speed_kmh,
        }
    }

    pub fn hours(&self) -> f64 {
        self.distance_km / self.speed_kmh
    }
}

/// Fractional hours split into whole hours and rounded minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Elapsed {
    pub hours: i64,
    pub minutes: i64,
}

impl Elapsed {
    // Half minutes round to even.
    pub fn from_hours(hours: f64) -> Elapsed {
        let whole = hours.floor();
        let minutes = ((hours - whole) * 60.0).round_ties_even();
        Elapsed {
            hours: whole as i64,
            minutes: minutes as i64,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::hours(self.hours) + Duration::minutes(self.minutes)
    }
}

impl From<Elapsed> for Duration {
    fn from(value: Elapsed) -> Self {
        value.duration()
    }
}

/// Where minute rounding is applied when several legs are summed.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rounding {
    /// Every leg is rounded to the minute on its own and the results are
    /// summed, so rounding error accumulates across legs.
    #[default]
    PerLeg,
    /// Raw hours of all legs are summed and rounded once.
    EndToEnd,
}

impl Rounding {
    /// The durations the start time is shifted by, one after the other.
    pub fn shifts(self, legs: &[Leg]) -> Vec<Duration> {
        match self {
            Rounding::PerLeg => legs
                .iter()
                .map(|l| Elapsed::from_hours(l.hours()).duration())
                .collect(),
            Rounding::EndToEnd if legs.is_empty() => Vec::new(),
            Rounding::EndToEnd => {
                vec![Elapsed::from_hours(legs.iter().map(Leg::hours).sum()).duration()]
            }
        }
    }

    pub fn elapsed(self, legs: &[Leg]) -> Duration {
        self.shifts(legs)
            .into_iter()
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}
