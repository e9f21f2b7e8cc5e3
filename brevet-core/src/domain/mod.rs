mod band;
mod clock;
mod closing_rule;
mod distance;
mod elapsed;

pub use band::*;
pub use clock::*;
pub use closing_rule::*;
pub use distance::*;
pub use elapsed::*;
