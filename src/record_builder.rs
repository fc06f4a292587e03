use std::collections::HashMap;

use log::debug;

use crate::error::{TimetableError, TimetableResult};

/// Field name to field value, for one exam, before validation.
pub type FieldRecord = HashMap<String, String>;

/// Cell layout of one exam in the flattened timetable table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Leading label/index cells skipped in every chunk.
    pub label_cells: usize,
    /// Number of field names, followed by the same number of values.
    pub field_count: usize,
}

impl TableShape {
    pub const fn chunk_len(&self) -> usize {
        self.label_cells + 2 * self.field_count
    }
}

/// 1 label cell + 5 field names + 5 field values.
pub const TIMETABLE_SHAPE: TableShape = TableShape {
    label_cells: 1,
    field_count: 5,
};

/// Groups the flat cell sequence into one record per exam. The first chunk is
/// the table legend and is always dropped.
pub fn build_records(cells: &[String], shape: TableShape) -> TimetableResult<Vec<FieldRecord>> {
    let chunk_len = shape.chunk_len();
    if chunk_len == 0 || cells.len() % chunk_len != 0 {
        return Err(TimetableError::Layout(format!(
            "expected a multiple of {} cells, found {}",
            chunk_len,
            cells.len()
        )));
    }

    let records: Vec<FieldRecord> = cells
        .chunks_exact(chunk_len)
        .skip(1)
        .map(|chunk| {
            let (names, values) = chunk[shape.label_cells..].split_at(shape.field_count);
            names.iter().cloned().zip(values.iter().cloned()).collect()
        })
        .collect();
    debug!(
        "Built {} records from {} cells",
        records.len(),
        cells.len()
    );
    Ok(records)
}

/// Row layout of the personal timetable page. Each exam spans a fixed number
/// of rows: heading rows first, then one `name | value` row per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPairShape {
    pub rows_per_record: usize,
    pub heading_rows: usize,
}

/// 1 heading row + 10 `name | value` rows.
pub const PERSONAL_TIMETABLE_ROWS: RowPairShape = RowPairShape {
    rows_per_record: 11,
    heading_rows: 1,
};

/// Groups table rows into one record per exam. A short final group is still
/// read; any missing fields surface when the exam is built.
pub fn build_row_pair_records(
    rows: &[Vec<String>],
    shape: RowPairShape,
) -> TimetableResult<Vec<FieldRecord>> {
    if shape.rows_per_record <= shape.heading_rows {
        return Err(TimetableError::Layout(format!(
            "{} rows per exam leaves no room for fields after {} heading rows",
            shape.rows_per_record, shape.heading_rows
        )));
    }

    let records = rows
        .chunks(shape.rows_per_record)
        .map(|chunk| {
            chunk
                .iter()
                .skip(shape.heading_rows)
                .map(|row| match row.as_slice() {
                    [name, value] => Ok((name.clone(), value.clone())),
                    cells => Err(TimetableError::Layout(format!(
                        "expected a name/value row, found {} cells",
                        cells.len()
                    ))),
                })
                .collect::<TimetableResult<FieldRecord>>()
        })
        .collect::<TimetableResult<Vec<_>>>()?;
    debug!("Built {} records from {} rows", records.len(), rows.len());
    Ok(records)
}
