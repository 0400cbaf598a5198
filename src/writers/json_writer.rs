use crate::error::Result;
use crate::models::ProcessedDataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Hands a dataset to rendering collaborators as JSON, using the field names
/// they read (`years`, `months`, `data[].avgMax`, `data[].dailyTemps`, ...).
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write<W: Write>(&self, dataset: &ProcessedDataset, mut writer: W) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, dataset)?;
        } else {
            serde_json::to_writer(&mut writer, dataset)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_to_path(&self, dataset: &ProcessedDataset, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write(dataset, BufWriter::new(file))?;
        info!(path = %path.display(), cells = dataset.len(), "wrote dataset");
        Ok(())
    }

    pub fn to_string(&self, dataset: &ProcessedDataset) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dataset)?
        } else {
            serde_json::to_string(dataset)?
        };
        Ok(json)
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}
