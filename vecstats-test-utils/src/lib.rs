use std::sync::{Arc, Once};

use arrow::array::{
    Array, ArrayRef, FixedSizeListArray, Int32Array, Int64Array, ListArray, RecordBatch,
};
use arrow::datatypes::{DataType, Field, Int32Type, Schema};

static INIT: Once = Once::new();

/// Initialize tracing for test binaries. Safe to call multiple times.
pub fn init_tracing_for_tests() {
    INIT.call_once(|| {
        use tracing_subscriber::filter::EnvFilter;
        use tracing_subscriber::fmt;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        // Another harness in the same binary may already own the global subscriber.
        let _ = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

/// A flat `Int32` vector where `None` marks a null cell.
pub fn int4_vector(cells: &[Option<i32>]) -> ArrayRef {
    Arc::new(Int32Array::from(cells.to_vec()))
}

/// A flat `Int32` vector without nulls.
pub fn int4_values(values: &[i32]) -> ArrayRef {
    Arc::new(Int32Array::from(values.to_vec()))
}

/// A two-dimensional `Int32` value: a list of `rows` inner vectors.
pub fn int4_matrix(rows: &[&[i32]]) -> ArrayRef {
    let lists = rows
        .iter()
        .map(|row| Some(row.iter().copied().map(Some).collect::<Vec<_>>()));
    Arc::new(ListArray::from_iter_primitive::<Int32Type, _, _>(lists))
}

/// A `List<Int32>` column, one entry per row. `None` is a null row.
pub fn int4_list_column(rows: &[Option<Vec<Option<i32>>>]) -> ListArray {
    ListArray::from_iter_primitive::<Int32Type, _, _>(rows.iter().cloned())
}

/// A `FixedSizeList<Int32, 4>` column built from complete rows.
pub fn int4_fixed_column(rows: &[[i32; 4]]) -> FixedSizeListArray {
    let values: Vec<i32> = rows.iter().flatten().copied().collect();
    let item = Arc::new(Field::new("item", DataType::Int32, true));
    FixedSizeListArray::new(item, 4, Arc::new(Int32Array::from(values)), None)
}

/// A two-column batch: nullable `Int64` group key and a vector column.
pub fn keyed_batch(keys: &[Option<i64>], vectors: ArrayRef) -> RecordBatch {
    let schema = Schema::new(vec![
        Field::new("key", DataType::Int64, true),
        Field::new("vec", vectors.data_type().clone(), true),
    ]);
    let keys: ArrayRef = Arc::new(Int64Array::from(keys.to_vec()));
    RecordBatch::try_new(Arc::new(schema), vec![keys, vectors]).expect("keyed batch")
}

/// A single-column batch holding only a vector column.
pub fn vector_batch(vectors: ArrayRef) -> RecordBatch {
    let schema = Schema::new(vec![Field::new("vec", vectors.data_type().clone(), true)]);
    RecordBatch::try_new(Arc::new(schema), vec![vectors]).expect("vector batch")
}
