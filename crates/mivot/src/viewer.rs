//! Steps one instance tree through the rows of a mapped table.

use serde_json::Value;

use crate::builder::InstanceBuilder;
use crate::error::MivotError;
use crate::instance::MivotInstance;
use crate::row::Row;

/// Holds the instance built from a mapping block together with the rows
/// of the mapped table, and refreshes the instance row after row.
///
/// The tree is built once; each [`next_row_view`](Self::next_row_view)
/// only rewrites the bound attribute values.
///
/// # Example
///
/// ```
/// use mivot::{InstanceBuilder, MivotConfig, MivotViewer};
/// use serde_json::json;
///
/// let dict = json!({
///     "dmtype": "meas:Position",
///     "meas:Position.ra": {"dmtype": "ivoa:real", "ref": "_RA", "unit": "deg", "value": null},
/// });
/// let rows = vec![json!({"_RA": 10.0}), json!({"_RA": "11.5"})];
/// let builder = InstanceBuilder::new(MivotConfig::activated());
/// let mut viewer = MivotViewer::new(&builder, &dict, rows).unwrap();
///
/// let mut ras = Vec::new();
/// while let Some(position) = viewer.next_row_view().unwrap() {
///     ras.push(position.instance("ra").unwrap().value().cloned());
/// }
/// assert_eq!(ras, vec![Some(json!(10.0)), Some(json!(11.5))]);
/// ```
#[derive(Debug, Clone)]
pub struct MivotViewer<R> {
    instance: MivotInstance,
    rows: Vec<R>,
    cursor: usize,
}

impl<R: Row> MivotViewer<R> {
    pub fn new(
        builder: &InstanceBuilder,
        dict: &Value,
        rows: impl IntoIterator<Item = R>,
    ) -> Result<Self, MivotError> {
        let instance = builder.build(dict)?;
        let rows: Vec<R> = rows.into_iter().collect();
        tracing::debug!(rows = rows.len(), "MIVOT viewer ready");
        Ok(Self {
            instance,
            rows,
            cursor: 0,
        })
    }

    /// Apply the next row and return the refreshed instance, or `None` once
    /// every row has been read.
    pub fn next_row_view(&mut self) -> Result<Option<&MivotInstance>, MivotError> {
        let Some(row) = self.rows.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        self.instance.update(row, None)?;
        Ok(Some(&self.instance))
    }

    /// Restart from the first row. Values stay those of the last row read
    /// until the next call to [`next_row_view`](Self::next_row_view).
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// The instance as refreshed by the last row read.
    pub fn instance(&self) -> &MivotInstance {
        &self.instance
    }

    pub fn into_instance(self) -> MivotInstance {
        self.instance
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows read since the last rewind.
    pub fn position(&self) -> usize {
        self.cursor
    }
}
