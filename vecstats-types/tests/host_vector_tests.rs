use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::DataType;
use vecstats_test_utils::{int4_fixed_column, int4_matrix, int4_vector};
use vecstats_types::{ElementKind, HostVector};

#[test]
fn flat_int4_vector_reports_kind_and_shape() {
    let array = int4_vector(&[Some(1), None, Some(3), Some(4)]);
    let vector = HostVector::from(&array);
    assert_eq!(vector.element_type(), &DataType::Int32);
    assert_eq!(vector.element_kind(), Some(ElementKind::Int32));
    assert_eq!(vector.ndim(), 1);
    assert_eq!(vector.len(), 4);
    assert!(vector.is_null(1));
    assert!(!vector.is_null(0));
}

#[test]
fn nested_lists_count_as_extra_dimensions() {
    let matrix = int4_matrix(&[&[1, 2], &[3, 4]]);
    let vector = HostVector::from(&matrix);
    assert_eq!(vector.ndim(), 2);
    assert_eq!(vector.len(), 2);
    assert_eq!(vector.element_kind(), Some(ElementKind::Int32));
}

#[test]
fn fixed_size_list_rows_are_flat() {
    let column = int4_fixed_column(&[[1, 2, 3, 4], [5, 6, 7, 8]]);
    let whole = HostVector::new(&column);
    assert_eq!(whole.ndim(), 2);

    let row = column.value(1);
    let row = HostVector::from(&row);
    assert_eq!(row.ndim(), 1);
    assert_eq!(row.len(), 4);
}

#[test]
fn unsupported_leaf_has_no_kind() {
    let strings: ArrayRef = Arc::new(StringArray::from(vec!["a", "b"]));
    let vector = HostVector::from(&strings);
    assert_eq!(vector.element_kind(), None);
    assert_eq!(vector.element_type(), &DataType::Utf8);
    assert!(!vector.is_empty());
    assert_eq!(vector.values().len(), 2);
}
