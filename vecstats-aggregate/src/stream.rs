use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, FixedSizeListArray, Int32Array, Int32Builder, Int64Array, Int64Builder,
    LargeListArray, ListArray, ListBuilder, RecordBatch,
};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use rustc_hash::FxHashMap;
use vecstats_result::Error;
use vecstats_types::{CallContext, ElementKind, HostVector};

use crate::AggregateResult;
use crate::accumulator::VecToStats;
use crate::state::RunningState;

/// Group key as read from the key column; nulls group together.
type GroupKey = Option<i64>;

pub const GROUP_COLUMN_NAME: &str = "group";
pub const STATS_COLUMN_NAME: &str = "stats";

/// Drives [`VecToStats`] over a stream of record batches.
///
/// Rows are folded in arrival order into one running state per group. When
/// the input is exhausted the stream yields a single batch with one row per
/// group, in first-seen order.
pub struct VecStatsStream<I> {
    input: I,
    aggregate: VecToStats,
    key_column: Option<usize>,
    vector_column: usize,
    groups: FxHashMap<GroupKey, usize>,
    states: Vec<(GroupKey, Option<RunningState>)>,
    done: bool,
    schema: SchemaRef,
}

impl<I> VecStatsStream<I>
where
    I: Iterator<Item = Result<RecordBatch, Error>>,
{
    /// Aggregate `vector_column` of every batch, grouped by the `Int64`
    /// column at `key_column`. Without a key column the whole input is one
    /// group and exactly one row is produced.
    pub fn new(
        input: I,
        aggregate: VecToStats,
        key_column: Option<usize>,
        vector_column: usize,
    ) -> Self {
        let mut fields = Vec::with_capacity(2);
        if key_column.is_some() {
            fields.push(Field::new(GROUP_COLUMN_NAME, DataType::Int64, true));
        }
        fields.push(Field::new(
            STATS_COLUMN_NAME,
            DataType::List(Arc::new(Field::new(
                "item",
                ElementKind::Int32.data_type(),
                true,
            ))),
            true,
        ));

        let mut stream = Self {
            input,
            aggregate,
            key_column,
            vector_column,
            groups: FxHashMap::default(),
            states: Vec::new(),
            done: false,
            schema: Arc::new(Schema::new(fields)),
        };
        if key_column.is_none() {
            stream.group_slot(None);
        }
        stream
    }

    pub fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    fn group_slot(&mut self, key: GroupKey) -> usize {
        if let Some(&slot) = self.groups.get(&key) {
            return slot;
        }
        let slot = self.states.len();
        tracing::trace!(?key, slot, "vec_to_stats stream opened group");
        self.states.push((key, None));
        self.groups.insert(key, slot);
        slot
    }

    fn consume(&mut self, batch: &RecordBatch) -> AggregateResult<()> {
        let vectors = column(batch, self.vector_column)?;
        let rows = VectorRows::try_new(vectors.as_ref())?;
        let keys = match self.key_column {
            Some(idx) => Some(
                column(batch, idx)?
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .ok_or_else(|| {
                        Error::InvalidArgumentError(format!(
                            "group key column {idx} must be Int64"
                        ))
                    })?,
            ),
            None => None,
        };

        for row in 0..batch.num_rows() {
            let key = keys.and_then(|k| k.is_valid(row).then(|| k.value(row)));
            let slot = self.group_slot(key);
            let element = rows.value(row);
            let ctx = CallContext::aggregate(slot as u64);
            let (_, state) = &mut self.states[slot];
            *state = self
                .aggregate
                .fold(&ctx, state.take(), element.as_ref().map(HostVector::from))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> AggregateResult<RecordBatch> {
        let mut keys = Int64Builder::with_capacity(self.states.len());
        let mut stats = ListBuilder::new(Int32Builder::new());

        for (slot, (key, state)) in self.states.drain(..).enumerate() {
            let ctx = CallContext::aggregate(slot as u64);
            keys.append_option(key);
            match self.aggregate.finalize(&ctx, state)? {
                Some(output) => {
                    let array = output.to_array();
                    match output.kind() {
                        ElementKind::Int32 => {
                            let values = array
                                .as_any()
                                .downcast_ref::<Int32Array>()
                                .ok_or_else(|| Error::unsupported_kind(array.data_type()))?;
                            stats.values().extend(values.iter());
                        }
                    }
                    stats.append(true);
                }
                None => stats.append_null(),
            }
        }
        self.groups.clear();

        let mut columns: Vec<ArrayRef> = Vec::with_capacity(2);
        if self.key_column.is_some() {
            columns.push(Arc::new(keys.finish()));
        }
        columns.push(Arc::new(stats.finish()));
        Ok(RecordBatch::try_new(self.schema.clone(), columns)?)
    }
}

impl<I> Iterator for VecStatsStream<I>
where
    I: Iterator<Item = Result<RecordBatch, Error>>,
{
    type Item = Result<RecordBatch, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some(batch) = self.input.next() {
            let batch = match batch {
                Ok(b) => b,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            if let Err(e) = self.consume(&batch) {
                self.done = true;
                return Some(Err(e));
            }
        }

        self.done = true;
        Some(self.finish())
    }
}

fn column(batch: &RecordBatch, idx: usize) -> AggregateResult<&ArrayRef> {
    batch.columns().get(idx).ok_or_else(|| {
        Error::InvalidArgumentError(format!(
            "column {idx} out of range for batch with {} columns",
            batch.num_columns()
        ))
    })
}

/// Row access over the list layouts a vector column may use.
enum VectorRows<'a> {
    List(&'a ListArray),
    LargeList(&'a LargeListArray),
    Fixed(&'a FixedSizeListArray),
}

impl<'a> VectorRows<'a> {
    fn try_new(array: &'a dyn Array) -> AggregateResult<Self> {
        let any = array.as_any();
        if let Some(list) = any.downcast_ref::<ListArray>() {
            return Ok(VectorRows::List(list));
        }
        if let Some(list) = any.downcast_ref::<LargeListArray>() {
            return Ok(VectorRows::LargeList(list));
        }
        if let Some(list) = any.downcast_ref::<FixedSizeListArray>() {
            return Ok(VectorRows::Fixed(list));
        }
        Err(Error::InvalidArgumentError(format!(
            "vec_to_stats input column must hold arrays, got {}",
            array.data_type()
        )))
    }

    /// The vector at `row`, or `None` for a null row.
    fn value(&self, row: usize) -> Option<ArrayRef> {
        match self {
            VectorRows::List(list) => list.is_valid(row).then(|| list.value(row)),
            VectorRows::LargeList(list) => list.is_valid(row).then(|| list.value(row)),
            VectorRows::Fixed(list) => list.is_valid(row).then(|| list.value(row)),
        }
    }
}
