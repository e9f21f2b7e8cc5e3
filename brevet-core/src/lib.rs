#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod brevet;
mod calculator;
mod domain;
mod error;
mod settings;

pub use brevet::*;
pub use calculator::*;
pub use domain::*;
pub use error::{Error, Result};
pub use settings::*;
