use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "'{value}' is not an official ACP brevet distance, expected one of 200, 300, 400, 600 or 1000"
    ))]
    InvalidBrevetDistance {
        #[snafu(implicit)]
        location: Location,
        value: f64,
    },
    #[snafu(display("Control distance must be a finite, non-negative number of km, got '{value}'"))]
    InvalidControlDistance {
        #[snafu(implicit)]
        location: Location,
        value: f64,
    },
    #[snafu(display(
        "Control at '{control_km}' km lies more than 20% beyond the '{brevet_km}' km brevet"
    ))]
    ControlBeyondBrevet {
        #[snafu(implicit)]
        location: Location,
        control_km: f64,
        brevet_km: u16,
    },
}
