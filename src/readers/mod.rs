pub mod csv;

use log::{info, warn};

use crate::types::{Result, Tally, TallyRequest};

/// Tally the requested column, most common keys first.
///
/// Keys with equal counts are ordered by first appearance in the file.
pub fn tally(request: &TallyRequest) -> Result<Vec<Tally>> {
    let reader = csv::CsvReader::new(&request.path);
    let table = reader.tally_column(&request.column, request.delimiter.as_deref())?;
    if table.is_empty() {
        warn!("no values found in column '{}'", request.column);
    }
    info!(
        "tallied {} values into {} keys",
        table.total(),
        table.len()
    );
    Ok(table.into_most_common())
}
