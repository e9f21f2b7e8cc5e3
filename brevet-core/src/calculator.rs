use crate::{
    BrevetDistance, Clock, ClosingRule, ControlDistance, Result, Rounding, fastest_legs,
};
use chrono::{DateTime, Duration, TimeZone};
use tracing::{debug, instrument, trace};

/// Computes ACP open and close times of controls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ControlTimeCalculator {
    rounding: Rounding,
    clock: Clock,
}

/// Open and close time of a single control.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlTimes<Tz: TimeZone> {
    pub control_km: f64,
    pub open: DateTime<Tz>,
    pub close: DateTime<Tz>,
}

impl ControlTimeCalculator {
    pub fn new(rounding: Rounding) -> ControlTimeCalculator {
        ControlTimeCalculator {
            rounding,
            clock: Clock::default(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> ControlTimeCalculator {
        self.clock = clock;
        self
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Time from the start until the control opens, riding every band at its
    /// maximum speed.
    pub fn open_elapsed(&self, control: ControlDistance, brevet: BrevetDistance) -> Duration {
        sum(self.open_shifts(control, brevet))
    }

    /// Time from the start until the control closes.
    pub fn close_elapsed(&self, control: ControlDistance, brevet: BrevetDistance) -> Duration {
        sum(self.close_shifts(control, brevet))
    }

    #[instrument(level = "debug", skip(self))]
    fn open_shifts(&self, control: ControlDistance, brevet: BrevetDistance) -> Vec<Duration> {
        let legs = fastest_legs(control.clamp_to(brevet));

        for leg in &legs {
            trace!(
                distance_km = leg.distance_km,
                speed_kmh = leg.speed_kmh,
                "open leg"
            );
        }

        self.rounding.shifts(&legs)
    }

    #[instrument(level = "debug", skip(self))]
    fn close_shifts(&self, control: ControlDistance, brevet: BrevetDistance) -> Vec<Duration> {
        let distance_km = control.clamp_to(brevet);
        let rule = ClosingRule::for_distance(distance_km);

        debug!(rule = rule.as_ref(), distance_km, "resolved closing rule");

        rule.shifts(distance_km, self.rounding)
    }

    pub fn open_time<Tz: TimeZone>(
        &self,
        control: ControlDistance,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.clock
            .advance(start, &self.open_shifts(control, brevet))
    }

    pub fn close_time<Tz: TimeZone>(
        &self,
        control: ControlDistance,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> DateTime<Tz> {
        self.clock
            .advance(start, &self.close_shifts(control, brevet))
    }

    pub fn control_times<Tz: TimeZone>(
        &self,
        control: ControlDistance,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> ControlTimes<Tz> {
        ControlTimes {
            control_km: control.km(),
            open: self.open_time(control, brevet, start),
            close: self.close_time(control, brevet, start),
        }
    }
}

/// Open time of a control `control_dist_km` from the start of a
/// `brevet_dist_km` brevet, in the time zone of `brevet_start_time`.
pub fn open_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let (control, brevet) = validate(control_dist_km, brevet_dist_km)?;
    Ok(ControlTimeCalculator::default().open_time(control, brevet, brevet_start_time))
}

/// Close time of a control `control_dist_km` from the start of a
/// `brevet_dist_km` brevet, in the time zone of `brevet_start_time`.
pub fn close_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let (control, brevet) = validate(control_dist_km, brevet_dist_km)?;
    Ok(ControlTimeCalculator::default().close_time(control, brevet, brevet_start_time))
}

fn sum(shifts: Vec<Duration>) -> Duration {
    shifts
        .into_iter()
        .fold(Duration::zero(), |acc, d| acc + d)
}

fn validate(
    control_dist_km: f64,
    brevet_dist_km: f64,
) -> Result<(ControlDistance, BrevetDistance)> {
    let brevet = BrevetDistance::try_from(brevet_dist_km)?;
    let control = ControlDistance::new(control_dist_km)?;
    Ok((control, brevet))
}
