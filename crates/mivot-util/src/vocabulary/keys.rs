//! Reserved field names of ATTRIBUTE leaves.

/// Materialized value of an attribute.
pub const VALUE: &str = "value";
/// Declared datatype used to cast raw cells.
pub const DMTYPE: &str = "dmtype";
/// Column reference the value is bound to.
pub const REF: &str = "ref";
/// Declared physical unit.
pub const UNIT: &str = "unit";
/// Astropy unit equivalent of `unit`, when known.
pub const ASTROPY_UNIT: &str = "astropy_unit";
/// Astropy time format named by `unit`, when known.
pub const ASTROPY_UNIT_TIME: &str = "astropy_unit_time";

/// `ref` value of attributes that are not bound to tabular data.
pub const UNBOUND_REF: &str = "null";

/// Fields hidden from the slim projection.
pub const HK_PARAMETERS: [&str; 3] = [REF, ASTROPY_UNIT, ASTROPY_UNIT_TIME];
