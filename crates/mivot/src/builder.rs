//! Construction of instance trees from the dictionary view of a mapping.
//!
//! The dictionary carries no explicit node kind. Each value is classified by
//! its shape:
//!
//! - `"key": [...]` is a COLLECTION,
//! - `"key": {leaf}` is an ATTRIBUTE, stored under the trailing segment of `key`,
//! - `"key": {not a leaf}` is an INSTANCE, stored under the flattened role,
//! - `"key": scalar` is an element of the ATTRIBUTE itself.

use std::borrow::Cow;

use mivot_util::{
    cast_type_value, fix_legacy_unit, is_time_format, lookup_unit, normalize, normalize_role,
    normalize_value, ASTROPY_UNIT, ASTROPY_UNIT_TIME, DMTYPE, UNIT, VALUE,
};
use serde_json::{Map, Value};

use crate::config::{MivotConfig, MIVOT_FEATURE};
use crate::error::{kind_of, MivotError};
use crate::instance::{Field, MivotInstance};

/// True when no value of `dict` is itself a mapping.
///
/// # Example
///
/// ```
/// use mivot::is_leaf_dict;
/// use serde_json::json;
///
/// let attribute = json!({"dmtype": "ivoa:real", "ref": "ra", "value": null});
/// let instance = json!({"dmtype": "meas:Position", "coord": {"dmtype": "ivoa:real"}});
/// assert!(is_leaf_dict(attribute.as_object().unwrap()));
/// assert!(!is_leaf_dict(instance.as_object().unwrap()));
/// ```
pub fn is_leaf_dict(dict: &Map<String, Value>) -> bool {
    !dict.values().any(Value::is_object)
}

/// Builds [`MivotInstance`] trees.
#[derive(Debug, Clone, Default)]
pub struct InstanceBuilder {
    config: MivotConfig,
}

impl InstanceBuilder {
    pub fn new(config: MivotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MivotConfig {
        &self.config
    }

    /// Build the instance described by `dict`.
    ///
    /// # Errors
    ///
    /// - [`MivotError::FeatureNotActivated`] unless the MIVOT prototype
    ///   feature is activated,
    /// - [`MivotError::UnexpectedShape`] when `dict` or a collection item
    ///   is not an object,
    /// - [`MivotError::MissingDmtype`] when a `value` has no sibling `dmtype`,
    /// - [`MivotError::Cast`] when a `value` does not match its `dmtype`.
    pub fn build(&self, dict: &Value) -> Result<MivotInstance, MivotError> {
        self.config.ensure_activated(MIVOT_FEATURE)?;
        let map = dict.as_object().ok_or_else(|| MivotError::UnexpectedShape {
            key: "(root)".to_string(),
            found: kind_of(dict),
        })?;
        tracing::debug!(fields = map.len(), "building MIVOT instance");
        self.build_object(map)
    }

    fn build_object(&self, map: &Map<String, Value>) -> Result<MivotInstance, MivotError> {
        let mut instance = MivotInstance::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    let collection = items
                        .iter()
                        .map(|item| {
                            let item_map =
                                item.as_object().ok_or_else(|| MivotError::UnexpectedShape {
                                    key: key.clone(),
                                    found: kind_of(item),
                                })?;
                            self.build_object(item_map)
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    instance.insert(normalize(key), Field::Collection(collection));
                }
                Value::Object(inner) => {
                    let name = if is_leaf_dict(inner) {
                        normalize(key)
                    } else {
                        normalize_role(key)
                    };
                    instance.insert(name, Field::Instance(self.build_object(inner)?));
                }
                scalar if key == VALUE => {
                    let dmtype = sibling_dmtype(map).ok_or_else(|| MivotError::MissingDmtype {
                        key: key.clone(),
                    })?;
                    instance.insert(VALUE, Field::Scalar(cast_type_value(scalar, &dmtype)?));
                }
                scalar if key == UNIT => self.build_unit(&mut instance, scalar),
                scalar => instance.insert(normalize(key), Field::Scalar(normalize_value(scalar))),
            }
        }
        Ok(instance)
    }

    /// Stores `unit` and, when the unit is known, its astropy equivalent.
    fn build_unit(&self, instance: &mut MivotInstance, raw: &Value) {
        let Some(unit) = raw.as_str() else {
            instance.insert(UNIT, Field::Scalar(raw.clone()));
            return;
        };
        let unit = if self.config.fix_legacy_year_unit {
            fix_legacy_unit(unit)
        } else {
            Cow::Borrowed(unit)
        };
        let unit = normalize(&unit).into_owned();
        instance.insert(UNIT, Field::Scalar(Value::String(unit.clone())));

        if !self.config.attach_unit_equivalents || unit.is_empty() {
            return;
        }
        if let Some(astropy) = lookup_unit(&unit) {
            instance.insert(ASTROPY_UNIT, Field::Scalar(Value::from(astropy.name)));
        } else if is_time_format(&unit) {
            instance.insert(ASTROPY_UNIT_TIME, Field::Scalar(Value::String(unit)));
        } else {
            tracing::debug!(unit = %unit, "no astropy equivalent for unit");
        }
    }
}

/// Normalized `dmtype` declared next to a `value`, wherever it sits in
/// the mapping.
fn sibling_dmtype(map: &Map<String, Value>) -> Option<String> {
    map.get(DMTYPE)
        .and_then(Value::as_str)
        .map(|dmtype| normalize(dmtype).into_owned())
}
