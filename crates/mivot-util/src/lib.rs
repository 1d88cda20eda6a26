//! mivot-util - building blocks shared by the MIVOT instance mapper.
//!
//! This crate holds the pieces of the mapping engine that do not depend on
//! the shape of the instance tree: stripping model names from roles and
//! types, casting raw table cells to the declared `dmtype`, and the static
//! unit and time-format vocabulary.
//!
//! # Example
//!
//! ```
//! use mivot_util::{cast_type_value, normalize, normalize_role, lookup_unit};
//! use serde_json::json;
//!
//! assert_eq!(normalize("mango:EpochPosition.longitude"), "longitude");
//! assert_eq!(normalize_role("mango:EpochPosition.errors"), "EpochPosition_errors");
//!
//! let value = cast_type_value(&json!("3.5"), "ivoa:real").unwrap();
//! assert_eq!(value, json!(3.5));
//!
//! assert_eq!(lookup_unit("mas/yr").unwrap().name, "mas / yr");
//! ```

pub mod cast;
pub mod error;
pub mod names;
pub mod vocabulary;

pub use cast::{cast_type_value, is_null_marker};
pub use error::CastError;
pub use names::{normalize, normalize_role, normalize_value, remove_model_name};
pub use vocabulary::{
    fix_legacy_unit, is_time_format, lookup_unit, AstropyUnit, ASTROPY_UNIT, ASTROPY_UNIT_TIME,
    DMTYPE, HK_PARAMETERS, REF, TIME_FORMATS, UNBOUND_REF, UNIT, UNIT_MAPPING, VALUE,
};
