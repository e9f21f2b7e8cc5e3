use crate::{
    Error, Result,
    error::error::{InvalidBrevetDistanceSnafu, InvalidControlDistanceSnafu},
};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};
use snafu::OptionExt;

/// The official ACP brevet distances in km.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromPrimitive,
    Serialize_repr,
    Deserialize_repr,
    strum::EnumIter,
)]
#[repr(u16)]
pub enum BrevetDistance {
    Km200 = 200,
    Km300 = 300,
    Km400 = 400,
    Km600 = 600,
    Km1000 = 1000,
}

impl BrevetDistance {
    pub fn km(self) -> u16 {
        self as u16
    }

    pub fn km_f64(self) -> f64 {
        f64::from(self.km())
    }
}

impl TryFrom<u16> for BrevetDistance {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        BrevetDistance::from_u16(value).context(InvalidBrevetDistanceSnafu {
            value: f64::from(value),
        })
    }
}

impl TryFrom<f64> for BrevetDistance {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        // `from_f64` truncates, so fractional distances must be rejected first.
        if value.fract() != 0.0 {
            return InvalidBrevetDistanceSnafu { value }.fail();
        }
        BrevetDistance::from_f64(value).context(InvalidBrevetDistanceSnafu { value })
    }
}

impl std::fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} km", self.km())
    }
}

/// Distance of a control from the start, finite and non-negative.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct ControlDistance(f64);

impl ControlDistance {
    pub fn new(km: f64) -> Result<Self> {
        if km.is_finite() && km >= 0.0 {
            Ok(ControlDistance(km))
        } else {
            InvalidControlDistanceSnafu { value: km }.fail()
        }
    }

    pub fn km(self) -> f64 {
        self.0
    }

    /// A control is never timed beyond the brevet's own length.
    pub fn clamp_to(self, brevet: BrevetDistance) -> f64 {
        self.0.min(brevet.km_f64())
    }
}

impl From<BrevetDistance> for ControlDistance {
    fn from(value: BrevetDistance) -> Self {
        ControlDistance(value.km_f64())
    }
}

impl TryFrom<f64> for ControlDistance {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        ControlDistance::new(value)
    }
}
