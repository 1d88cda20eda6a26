//! MIVOT instance mapper.
//!
//! MIVOT annotations describe how the columns of a VOTable map onto a
//! hierarchical data model. This crate mirrors one mapped model instance as
//! a live [`MivotInstance`] tree and keeps it in sync with the table, one
//! row at a time.
//!
//! # Overview
//!
//! - [`InstanceBuilder`] turns the dictionary view of a mapping block (as
//!   produced by the annotation seeker once references are resolved) into
//!   a tree of INSTANCEs, COLLECTIONs and ATTRIBUTEs.
//! - [`MivotInstance::update`] re-reads the bound ATTRIBUTE values from a
//!   [`Row`] without rebuilding the tree.
//! - [`MivotInstance::dict`] and [`MivotInstance::hk_dict`] project the
//!   tree onto plain JSON.
//! - [`MivotViewer`] drives one tree through a sequence of rows.
//!
//! The mapper is a prototype feature: it must be activated in the
//! [`MivotConfig`] given to the builder.
//!
//! # Example
//!
//! ```
//! use mivot::{InstanceBuilder, MivotConfig};
//! use serde_json::json;
//!
//! let dict = json!({
//!     "dmtype": "mango:EpochPosition",
//!     "mango:EpochPosition.longitude": {"dmtype": "ivoa:real", "ref": "RAICRS", "unit": "deg", "value": null},
//!     "mango:EpochPosition.pmLongitude": {"dmtype": "ivoa:real", "ref": "pmRA", "unit": "mas/year", "value": null},
//! });
//!
//! let builder = InstanceBuilder::new(MivotConfig::activated());
//! let mut position = builder.build(&dict).unwrap();
//!
//! position.update(&json!({"RAICRS": 52.26722684, "pmRA": "1.5"}), None).unwrap();
//! assert_eq!(
//!     position.dict(),
//!     json!({
//!         "dmtype": "EpochPosition",
//!         "longitude": {"unit": "deg", "value": 52.26722684},
//!         "pmLongitude": {"unit": "mas/yr", "value": 1.5},
//!     })
//! );
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod instance;
pub mod projection;
pub mod row;
mod update;
pub mod viewer;

pub use builder::{is_leaf_dict, InstanceBuilder};
pub use config::{MivotConfig, MIVOT_FEATURE};
pub use error::MivotError;
pub use instance::{Field, MivotInstance};
pub use projection::ProjectionMode;
pub use row::Row;
pub use viewer::MivotViewer;

pub use mivot_util::{AstropyUnit, CastError};
