pub mod csv_row_reader;
pub mod loader;

pub use csv_row_reader::CsvRowReader;
pub use loader::{load_rows, load_rows_with};
