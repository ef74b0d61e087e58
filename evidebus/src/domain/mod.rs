//! Domain types for the bus timings directory.
//!
//! Stop names are validated at construction; everything else in this
//! module is a pure function over its arguments. Functions that may have
//! no answer return a sentinel (`None` or an empty string) rather than an
//! error, since the pages that call them fall back gracefully.

mod fare;
mod stop;
mod time;

pub use fare::{FareQuote, FareTable, FareTier, ServiceClass, estimate};
pub use stop::{InvalidStopName, RoutePair, StopName};
pub use time::{sort_by_time, to_display, to_minutes};
