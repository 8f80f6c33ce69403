//! Host-facing vector views.
//!
//! Input rows arrive as Arrow arrays borrowed from the host batch
//! ([`HostVector`]); the finalized statistics leave as an owned
//! [`OutputVector`] that the host can turn back into an Arrow array.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, Int32Array};
use arrow::datatypes::DataType;
use vecstats_result::{Error, Result};

use crate::{ElementKind, StatsSlot};

/// Read-only view over one input vector.
///
/// Element kind and dimensionality are reported the way an array-typed SQL
/// value would report them: a list of lists of `Int32` has element type
/// `Int32` and two dimensions.
#[derive(Debug, Clone, Copy)]
pub struct HostVector<'a> {
    array: &'a dyn Array,
}

impl<'a> HostVector<'a> {
    pub fn new(array: &'a dyn Array) -> Self {
        Self { array }
    }

    /// Leaf data type after descending through every level of list nesting.
    pub fn element_type(&self) -> &'a DataType {
        let mut data_type = self.array.data_type();
        while let Some(child) = list_child(data_type) {
            data_type = child;
        }
        data_type
    }

    /// Supported kind of the leaf elements, if any.
    pub fn element_kind(&self) -> Option<ElementKind> {
        ElementKind::from_data_type(self.element_type())
    }

    /// Number of dimensions; a flat array has one.
    pub fn ndim(&self) -> usize {
        let mut ndim = 1;
        let mut data_type = self.array.data_type();
        while let Some(child) = list_child(data_type) {
            ndim += 1;
            data_type = child;
        }
        ndim
    }

    /// Number of elements in the outermost dimension.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.array.is_null(index)
    }

    /// The underlying array, for kind-specific downcasts.
    pub fn values(&self) -> &'a dyn Array {
        self.array
    }
}

impl<'a> From<&'a ArrayRef> for HostVector<'a> {
    fn from(array: &'a ArrayRef) -> Self {
        HostVector::new(array.as_ref())
    }
}

fn list_child(data_type: &DataType) -> Option<&DataType> {
    match data_type {
        DataType::List(field) | DataType::LargeList(field) | DataType::FixedSizeList(field, _) => {
            Some(field.data_type())
        }
        _ => None,
    }
}

/// A finalized, one-dimensional statistics vector.
///
/// Positions are 1-based when addressed through [`OutputVector::get`], with
/// the lower bound recorded alongside the values so the host can expose the
/// same indexing to its users.
#[derive(Debug, Clone)]
pub struct OutputVector {
    kind: ElementKind,
    array: ArrayRef,
    lower_bound: i32,
}

impl OutputVector {
    /// Build a vector of `kind` from a flat value buffer and a parallel
    /// buffer of null flags (`true` means null).
    ///
    /// Values arrive widened to `i64` and are narrowed to `kind`; a value the
    /// kind cannot hold is an overflow. Null slots are not inspected.
    pub fn from_parts(
        kind: ElementKind,
        values: &[i64],
        nulls: &[bool],
        lower_bound: i32,
    ) -> Result<Self> {
        if values.len() != nulls.len() {
            return Err(Error::Internal(format!(
                "output vector has {} values but {} null flags",
                values.len(),
                nulls.len()
            )));
        }
        let array: ArrayRef = match kind {
            ElementKind::Int32 => {
                let cells = values
                    .iter()
                    .zip(nulls)
                    .map(|(value, is_null)| {
                        if *is_null {
                            return Ok(None);
                        }
                        i32::try_from(*value).map(Some).map_err(|_| {
                            Error::Overflow(format!("{value} does not fit in {kind}"))
                        })
                    })
                    .collect::<Result<Vec<Option<i32>>>>()?;
                Arc::new(Int32Array::from(cells))
            }
        };
        Ok(Self {
            kind,
            array,
            lower_bound,
        })
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Index of the first element as seen by the host.
    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    /// Value at `position`, counting from [`OutputVector::lower_bound`].
    /// Returns `None` for null slots and out-of-range positions.
    pub fn get(&self, position: i32) -> Option<i32> {
        let offset = usize::try_from(position.checked_sub(self.lower_bound)?).ok()?;
        if offset >= self.array.len() || self.array.is_null(offset) {
            return None;
        }
        match self.kind {
            ElementKind::Int32 => {
                let array = self.array.as_any().downcast_ref::<Int32Array>()?;
                Some(array.value(offset))
            }
        }
    }

    /// Value of a named statistics slot.
    pub fn slot(&self, slot: StatsSlot) -> Option<i32> {
        self.get(self.lower_bound + slot.index() as i32)
    }

    pub fn sum(&self) -> Option<i32> {
        self.slot(StatsSlot::Sum)
    }

    pub fn min_index(&self) -> Option<i32> {
        self.slot(StatsSlot::MinIndex)
    }

    pub fn max_index(&self) -> Option<i32> {
        self.slot(StatsSlot::MaxIndex)
    }

    pub fn count(&self) -> Option<i32> {
        self.slot(StatsSlot::Count)
    }

    pub fn to_array(&self) -> ArrayRef {
        Arc::clone(&self.array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_positions_start_at_lower_bound() {
        let out = OutputVector::from_parts(ElementKind::Int32, &[5, 2, 7, 2], &[false; 4], 1).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out.get(0), None);
        assert_eq!(out.get(1), Some(5));
        assert_eq!(out.get(4), Some(2));
        assert_eq!(out.get(5), None);
        assert_eq!(out.min_index(), Some(2));
        assert_eq!(out.max_index(), Some(7));
    }

    #[test]
    fn null_flags_become_null_slots() {
        let out = OutputVector::from_parts(
            ElementKind::Int32,
            &[5, 0, 0, 1],
            &[false, true, true, false],
            1,
        )
        .unwrap();
        assert_eq!(out.sum(), Some(5));
        assert_eq!(out.min_index(), None);
        assert_eq!(out.to_array().null_count(), 2);
    }

    #[test]
    fn mismatched_buffers_are_rejected() {
        let err = OutputVector::from_parts(ElementKind::Int32, &[1, 2], &[false], 1).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn values_outside_kind_range_overflow() {
        let too_big = i64::from(i32::MAX) + 1;
        let err = OutputVector::from_parts(ElementKind::Int32, &[too_big], &[false], 1)
            .unwrap_err();
        assert!(matches!(err, Error::Overflow(msg) if msg.contains("INTEGER")));

        let out = OutputVector::from_parts(ElementKind::Int32, &[too_big], &[true], 1).unwrap();
        assert_eq!(out.get(1), None);
    }

    #[test]
    fn output_vectors_clone_and_compare_by_contents() {
        let out = OutputVector::from_parts(ElementKind::Int32, &[1, 2, 3, 4], &[false; 4], 1)
            .unwrap();
        let copy = out.clone();
        assert_eq!(copy.kind(), out.kind());
        assert_eq!(copy.lower_bound(), out.lower_bound());
        assert_eq!(copy.to_array().to_data(), out.to_array().to_data());
    }
}
