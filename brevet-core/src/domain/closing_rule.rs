use crate::{ACP_SPEED_BANDS, Leg, Rounding};
use chrono::Duration;

/// Controls up to this distance are timed at `SHORT_CONTROL_SPEED_KMH` plus
/// one hour.
pub const SHORT_CONTROL_MAX_KM: f64 = 60.0;
pub const SHORT_CONTROL_SPEED_KMH: f64 = 20.0;

/// The 200 km control has a fixed close time instead of one derived from the
/// band table.
pub const FIXED_CLOSE_CONTROL_KM: f64 = 200.0;

/// Policy used to derive the close time of a control, resolved from its
/// (clamped) distance.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::AsRefStr)]
pub enum ClosingRule {
    /// The start control closes one hour after the start.
    Start,
    /// Distance at 20 km/h plus one hour.
    ShortControl,
    /// 13h30m after the start.
    FixedTwoHundred,
    /// The whole distance at the first band's minimum speed. Controls in
    /// (200, 600] km are not split into their own bands.
    FirstBandMinimum,
    /// 600 km at the [400, 600) band's minimum speed, the rest at the
    /// [600, 1000] band's minimum speed.
    LongControl,
}

impl ClosingRule {
    pub fn for_distance(distance_km: f64) -> ClosingRule {
        if distance_km == 0.0 {
            ClosingRule::Start
        } else if distance_km <= SHORT_CONTROL_MAX_KM {
            ClosingRule::ShortControl
        } else if distance_km == FIXED_CLOSE_CONTROL_KM {
            ClosingRule::FixedTwoHundred
        } else if distance_km <= ACP_SPEED_BANDS[2].end_km {
            ClosingRule::FirstBandMinimum
        } else {
            ClosingRule::LongControl
        }
    }

    /// The durations the start time is shifted by, one after the other.
    pub fn shifts(self, distance_km: f64, rounding: Rounding) -> Vec<Duration> {
        let [first, _, third, fourth] = &ACP_SPEED_BANDS;

        match self {
            ClosingRule::Start => vec![Duration::hours(1)],
            ClosingRule::ShortControl => {
                let mut shifts =
                    rounding.shifts(&[Leg::new(distance_km, SHORT_CONTROL_SPEED_KMH)]);
                shifts.push(Duration::hours(1));
                shifts
            }
            ClosingRule::FixedTwoHundred => vec![Duration::hours(13) + Duration::minutes(30)],
            ClosingRule::FirstBandMinimum => {
                rounding.shifts(&[Leg::new(distance_km, first.min_speed_kmh)])
            }
            ClosingRule::LongControl => rounding.shifts(&[
                Leg::new(third.end_km, third.min_speed_kmh),
                Leg::new(distance_km - fourth.start_km, fourth.min_speed_kmh),
            ]),
        }
    }

    pub fn elapsed(self, distance_km: f64, rounding: Rounding) -> Duration {
        self.shifts(distance_km, rounding)
            .into_iter()
            .fold(Duration::zero(), |acc, d| acc + d)
    }
}
