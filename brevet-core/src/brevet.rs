use crate::{
    BrevetDistance, ControlDistance, ControlTimeCalculator, ControlTimes, Result,
    error::error::ControlBeyondBrevetSnafu,
};
use chrono::{DateTime, TimeZone};
use tracing::{debug, instrument};

/// ACP allows the last control to lie up to 20% beyond the nominal distance.
pub const MAX_CONTROL_OVERRUN: f64 = 1.2;

/// A brevet of an official distance starting at a fixed time, used to
/// compute the times of all its controls.
#[derive(Debug, Clone)]
pub struct Brevet<Tz: TimeZone> {
    distance: BrevetDistance,
    start: DateTime<Tz>,
    calculator: ControlTimeCalculator,
}

impl<Tz: TimeZone> Brevet<Tz> {
    pub fn new(distance: BrevetDistance, start: DateTime<Tz>) -> Brevet<Tz> {
        Brevet {
            distance,
            start,
            calculator: ControlTimeCalculator::default(),
        }
    }

    pub fn with_calculator(mut self, calculator: ControlTimeCalculator) -> Brevet<Tz> {
        self.calculator = calculator;
        self
    }

    pub fn distance(&self) -> BrevetDistance {
        self.distance
    }

    pub fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    pub fn control(&self, control_km: f64) -> Result<ControlTimes<Tz>> {
        let control = ControlDistance::new(control_km)?;

        if control.km() > self.distance.km_f64() * MAX_CONTROL_OVERRUN {
            return ControlBeyondBrevetSnafu {
                control_km,
                brevet_km: self.distance.km(),
            }
            .fail();
        }

        Ok(self
            .calculator
            .control_times(control, self.distance, &self.start))
    }

    /// Times of every control, ordered by distance from the start.
    #[instrument(skip_all, fields(brevet = self.distance.km()))]
    pub fn schedule(
        &self,
        controls: impl IntoIterator<Item = f64>,
    ) -> Result<Vec<ControlTimes<Tz>>> {
        let mut times = controls
            .into_iter()
            .map(|c| self.control(c))
            .collect::<Result<Vec<_>>>()?;

        times.sort_by(|a, b| a.control_km.total_cmp(&b.control_km));

        debug!(num_controls = times.len(), "computed brevet schedule");

        Ok(times)
    }

    pub fn finish(&self) -> ControlTimes<Tz> {
        self.calculator
            .control_times(self.distance.into(), self.distance, &self.start)
    }
}
