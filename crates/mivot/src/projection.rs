//! Plain JSON views of instance trees.

use std::fmt;

use mivot_util::{DMTYPE, HK_PARAMETERS, REF, UNIT};
use serde_json::{Map, Value};

use crate::instance::{Field, MivotInstance};

/// Which fields a projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Values and non-empty units only: `dmtype` is dropped on ATTRIBUTEs,
    /// together with `ref`, `astropy_unit` and `astropy_unit_time`.
    #[default]
    Slim,
    /// Every field, housekeeping included.
    Full,
}

impl MivotInstance {
    /// Project the tree onto plain JSON.
    pub fn to_value(&self, mode: ProjectionMode) -> Value {
        let slim = mode == ProjectionMode::Slim;
        let atomic = self.scalar(REF).is_some() || self.has_value();
        let mut out = Map::new();
        for (name, field) in self.fields() {
            if slim && is_elided(name, field, atomic) {
                continue;
            }
            out.insert(name.to_string(), project_field(field, mode));
        }
        Value::Object(out)
    }

    /// Slim projection, meant for the final user.
    pub fn dict(&self) -> Value {
        self.to_value(ProjectionMode::Slim)
    }

    /// Full projection, keeping the column references and unit
    /// equivalents needed to apply the mapping elsewhere.
    pub fn hk_dict(&self) -> Value {
        self.to_value(ProjectionMode::Full)
    }
}

fn project_field(field: &Field, mode: ProjectionMode) -> Value {
    match field {
        Field::Scalar(value) => value.clone(),
        Field::Instance(instance) => instance.to_value(mode),
        Field::Collection(items) => Value::Array(items.iter().map(|i| i.to_value(mode)).collect()),
    }
}

fn is_elided(name: &str, field: &Field, atomic: bool) -> bool {
    match name {
        DMTYPE => atomic,
        UNIT => matches!(field, Field::Scalar(unit) if is_unset(unit)),
        _ => HK_PARAMETERS.contains(&name),
    }
}

fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Pretty JSON of the slim projection.
impl fmt::Display for MivotInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(&self.dict()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
