//! Row binding: refreshes ATTRIBUTE values from a table row in place.

use mivot_util::{cast_type_value, UNBOUND_REF, VALUE};

use crate::error::MivotError;
use crate::instance::{Field, MivotInstance};
use crate::row::Row;

impl MivotInstance {
    /// Update the instance with a new data row.
    ///
    /// The tree is walked as built; only `value` leaves change:
    ///
    /// - when `column_ref` is given and is not the `"null"` sentinel, this
    ///   instance's `value` is re-read from `row[column_ref]` and cast with
    ///   its `dmtype`,
    /// - collection items are updated with no column reference,
    /// - nested instances holding a `value` are updated with their own
    ///   `ref`, the others with no column reference.
    ///
    /// The update is not transactional: on error the tree may be partially
    /// refreshed.
    ///
    /// # Errors
    ///
    /// - [`MivotError::MissingColumn`] when a bound `ref` is not in the row,
    /// - [`MivotError::MissingDmtype`] when a bound value has no `dmtype`,
    /// - [`MivotError::Cast`] when a cell does not match its `dmtype`.
    pub fn update<R: Row + ?Sized>(
        &mut self,
        row: &R,
        column_ref: Option<&str>,
    ) -> Result<(), MivotError> {
        if let Some(column) = column_ref.filter(|column| *column != UNBOUND_REF) {
            if self.has_value() {
                self.refresh_value(row, column)?;
            }
        }

        for field in self.fields_mut() {
            match field {
                Field::Collection(items) => {
                    for item in items.iter_mut() {
                        item.update(row, None)?;
                    }
                }
                Field::Instance(child) if child.has_value() => {
                    let column = child.column_ref().map(str::to_owned);
                    child.update(row, column.as_deref())?;
                }
                Field::Instance(child) => child.update(row, None)?,
                Field::Scalar(_) => {}
            }
        }
        Ok(())
    }

    fn refresh_value<R: Row + ?Sized>(&mut self, row: &R, column: &str) -> Result<(), MivotError> {
        let raw = row
            .cell(column)
            .ok_or_else(|| MivotError::MissingColumn(column.to_string()))?;
        let dmtype = self.dmtype().ok_or_else(|| MivotError::MissingDmtype {
            key: VALUE.to_string(),
        })?;
        let value = cast_type_value(raw, dmtype)?;
        tracing::trace!(column, %value, "attribute value refreshed");
        self.set_value(value);
        Ok(())
    }
}
