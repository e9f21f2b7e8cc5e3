use crate::Leg;

/// A contiguous distance range together with the slowest and fastest average
/// speed a rider is allowed to hold within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBand {
    pub start_km: f64,
    pub end_km: f64,
    pub min_speed_kmh: f64,
    pub max_speed_kmh: f64,
}

/// ACP speed limits, ordered by distance. `end_km` of each band is the
/// `start_km` of the next.
pub static ACP_SPEED_BANDS: [SpeedBand; 4] = [
    SpeedBand::new(0.0, 200.0, 15.0, 34.0),
    SpeedBand::new(200.0, 400.0, 15.0, 32.0),
    SpeedBand::new(400.0, 600.0, 15.0, 30.0),
    SpeedBand::new(600.0, 1000.0, 11.428, 28.0),
];

impl SpeedBand {
    pub const fn new(start_km: f64, end_km: f64, min_speed_kmh: f64, max_speed_kmh: f64) -> Self {
        SpeedBand {
            start_km,
            end_km,
            min_speed_kmh,
            max_speed_kmh,
        }
    }

    pub fn length_km(&self) -> f64 {
        self.end_km - self.start_km
    }

    /// How much of this band lies between the start and `distance_km`,
    /// `None` if the distance does not reach into the band.
    pub fn covered_km(&self, distance_km: f64) -> Option<f64> {
        let covered = distance_km.min(self.end_km) - self.start_km;
        (covered > 0.0).then_some(covered)
    }
}

/// Splits `distance_km` into one leg per band, each at that band's maximum
/// speed.
pub fn fastest_legs(distance_km: f64) -> Vec<Leg> {
    ACP_SPEED_BANDS
        .iter()
        .map_while(|band| {
            band.covered_km(distance_km)
                .map(|km| Leg::new(km, band.max_speed_kmh))
        })
        .collect()
}
