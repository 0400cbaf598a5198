use crate::error::Result;
use crate::models::RawRow;
use crate::readers::CsvRowReader;
use std::path::Path;
use tracing::info;

/// Load the whole table once. Parsing runs on the blocking pool and the future
/// resolves with every row; the pipeline never sees partial input.
pub async fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    load_rows_with(path, CsvRowReader::new()).await
}

/// `load_rows` with a configured reader
pub async fn load_rows_with(path: &Path, reader: CsvRowReader) -> Result<Vec<RawRow>> {
    let bytes = tokio::fs::read(path).await?;
    let size = bytes.len();

    let rows = tokio::task::spawn_blocking(move || reader.read_bytes(&bytes)).await??;

    info!(path = %path.display(), bytes = size, rows = rows.len(), "loaded temperature table");
    Ok(rows)
}
