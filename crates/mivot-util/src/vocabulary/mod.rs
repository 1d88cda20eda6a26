//! Static vocabulary consulted while building instances.

mod keys;
mod time_formats;
mod units;

pub use keys::{ASTROPY_UNIT, ASTROPY_UNIT_TIME, DMTYPE, HK_PARAMETERS, REF, UNBOUND_REF, UNIT, VALUE};
pub use time_formats::{is_time_format, TIME_FORMATS};
pub use units::{fix_legacy_unit, lookup_unit, AstropyUnit, UNIT_MAPPING};
