//! The live instance tree.

use indexmap::IndexMap;
use mivot_util::{
    lookup_unit, AstropyUnit, ASTROPY_UNIT, ASTROPY_UNIT_TIME, DMTYPE, REF, UNBOUND_REF, UNIT, VALUE,
};
use serde_json::Value;

use crate::builder::InstanceBuilder;
use crate::config::MivotConfig;
use crate::error::MivotError;

/// Content of one instance field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Scalar leaf value (`value`, `dmtype`, `ref`, `unit`, ...).
    Scalar(Value),
    /// Nested INSTANCE or ATTRIBUTE.
    Instance(MivotInstance),
    /// COLLECTION of instances, in mapping order.
    Collection(Vec<MivotInstance>),
}

impl Field {
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Field::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&MivotInstance> {
        match self {
            Field::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_instance_mut(&mut self) -> Option<&mut MivotInstance> {
        match self {
            Field::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[MivotInstance]> {
        match self {
            Field::Collection(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_collection_mut(&mut self) -> Option<&mut Vec<MivotInstance>> {
        match self {
            Field::Collection(items) => Some(items),
            _ => None,
        }
    }
}

/// One mapped model instance.
///
/// Fields are kept in mapping order under their normalized names. An
/// instance is an ATTRIBUTE leaf when none of its fields holds a nested
/// instance; otherwise it is an INSTANCE of the mapped model.
///
/// # Example
///
/// ```
/// use mivot::{MivotConfig, MivotInstance};
/// use serde_json::json;
///
/// let dict = json!({
///     "dmtype": "mango:Brightness",
///     "mango:Brightness.mag": {"dmtype": "ivoa:real", "ref": "mag_g", "unit": "mag", "value": 12.3},
/// });
/// let mut brightness = MivotInstance::from_dict(&dict, &MivotConfig::activated()).unwrap();
/// assert_eq!(brightness.dmtype(), Some("Brightness"));
///
/// brightness.update(&json!({"mag_g": "11.9"}), None).unwrap();
/// assert_eq!(brightness.instance("mag").unwrap().value(), Some(&json!(11.9)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MivotInstance {
    fields: IndexMap<String, Field>,
}

impl MivotInstance {
    /// Create an instance with no field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an instance from the dictionary view of a mapping block.
    pub fn from_dict(dict: &Value, config: &MivotConfig) -> Result<Self, MivotError> {
        InstanceBuilder::new(config.clone()).build(dict)
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, field: Field) {
        self.fields.insert(name.into(), field);
    }

    /// Iterate over `(name, field)` pairs in mapping order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.values_mut()
    }

    /// Field names in mapping order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Nested instance stored under `name`.
    pub fn instance(&self, name: &str) -> Option<&MivotInstance> {
        self.get(name).and_then(Field::as_instance)
    }

    pub fn instance_mut(&mut self, name: &str) -> Option<&mut MivotInstance> {
        self.get_mut(name).and_then(Field::as_instance_mut)
    }

    /// Collection stored under `name`.
    pub fn collection(&self, name: &str) -> Option<&[MivotInstance]> {
        self.get(name).and_then(Field::as_collection)
    }

    pub fn collection_mut(&mut self, name: &str) -> Option<&mut Vec<MivotInstance>> {
        self.get_mut(name).and_then(Field::as_collection_mut)
    }

    /// Scalar stored under `name`.
    pub fn scalar(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Field::as_scalar)
    }

    fn scalar_str(&self, name: &str) -> Option<&str> {
        self.scalar(name).and_then(Value::as_str)
    }

    /// Current value of an ATTRIBUTE.
    pub fn value(&self) -> Option<&Value> {
        self.scalar(VALUE)
    }

    /// Whether this instance carries a `value` field.
    pub fn has_value(&self) -> bool {
        matches!(self.get(VALUE), Some(Field::Scalar(_)))
    }

    /// Overwrite the `value` of an ATTRIBUTE, returning the previous one.
    ///
    /// Does nothing and returns `None` on instances without a `value` field.
    pub fn set_value(&mut self, value: Value) -> Option<Value> {
        match self.fields.get_mut(VALUE) {
            Some(Field::Scalar(slot)) => Some(std::mem::replace(slot, value)),
            _ => None,
        }
    }

    /// Declared datatype, with its model name removed.
    pub fn dmtype(&self) -> Option<&str> {
        self.scalar_str(DMTYPE)
    }

    /// Column the `value` is bound to; `None` when missing or null.
    pub fn column_ref(&self) -> Option<&str> {
        self.scalar_str(REF)
    }

    /// Whether the `value` is read from a table column.
    pub fn is_bound(&self) -> bool {
        self.column_ref().is_some_and(|r| r != UNBOUND_REF)
    }

    /// Declared unit.
    pub fn unit(&self) -> Option<&str> {
        self.scalar_str(UNIT)
    }

    /// Astropy equivalent of the unit, when one was attached at build time.
    pub fn astropy_unit(&self) -> Option<&'static AstropyUnit> {
        if !self.contains(ASTROPY_UNIT) {
            return None;
        }
        self.unit().and_then(lookup_unit)
    }

    /// Astropy time format named by the unit, when one was attached.
    pub fn time_format(&self) -> Option<&str> {
        self.scalar_str(ASTROPY_UNIT_TIME)
    }

    /// True when no field holds a nested instance (an ATTRIBUTE).
    pub fn is_leaf(&self) -> bool {
        !self
            .fields
            .values()
            .any(|field| matches!(field, Field::Instance(_)))
    }
}
