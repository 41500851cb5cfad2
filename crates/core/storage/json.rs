//! JSON file source and sink.
//!
//! The input file mirrors a remote store export: either an object keyed by
//! record key, or an array whose positions act as keys (`null` holes are
//! skipped). Each record is parsed on its own, so a malformed record is
//! logged and dropped without failing the snapshot. The output file is
//! rewritten as a whole on every flush.

use super::{HotspotSink, PointSource};
use crate::compute::geojson::hotspots_to_geojson;
use crate::engine::ClusterId;
use crate::error::{HotspotError, Result};
use hotspot_types::hotspot::Hotspot;
use hotspot_types::point::SourcePoint;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Keyed(BTreeMap<String, Value>),
    Listed(Vec<Value>),
}

/// Reads point snapshots from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PointSource for JsonFileSource {
    fn snapshot(&self) -> Result<Vec<(String, SourcePoint)>> {
        let text = fs::read_to_string(&self.path).map_err(|e| {
            HotspotError::SourceUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let snapshot: Snapshot = serde_json::from_str(&text).map_err(|e| {
            HotspotError::SourceUnavailable(format!(
                "Malformed point snapshot in {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries: Vec<(String, Value)> = match snapshot {
            Snapshot::Keyed(map) => map.into_iter().collect(),
            Snapshot::Listed(list) => list
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        };

        let mut records = Vec::with_capacity(entries.len());
        let mut malformed = 0usize;
        for (key, value) in entries {
            if value.is_null() {
                continue;
            }
            match serde_json::from_value::<SourcePoint>(value) {
                Ok(point) => records.push((key, point)),
                Err(e) => {
                    log::warn!(
                        "Discarding malformed record '{}' in {}: {}",
                        key,
                        self.path.display(),
                        e
                    );
                    malformed += 1;
                }
            }
        }

        log::info!(
            "Received snapshot from {}: {} records, {} malformed",
            self.path.display(),
            records.len(),
            malformed
        );
        Ok(records)
    }
}

/// Layout of the hotspot output file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Object keyed by cluster id
    #[default]
    Json,
    /// GeoJSON FeatureCollection of Point features
    GeoJson,
}

/// Writes the published hotspot collection to a JSON file.
#[derive(Debug)]
pub struct JsonFileSink {
    path: PathBuf,
    format: OutputFormat,
    pending: Vec<(ClusterId, Hotspot)>,
}

impl JsonFileSink {
    pub fn new<P: Into<PathBuf>>(path: P, format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            format,
            pending: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let keyed: BTreeMap<String, &Hotspot> = self
                    .pending
                    .iter()
                    .map(|(id, h)| (id.to_string(), h))
                    .collect();
                serde_json::to_string_pretty(&keyed).map_err(|e| {
                    HotspotError::Serialization(format!("Failed to serialize hotspots: {}", e))
                })
            }
            OutputFormat::GeoJson => hotspots_to_geojson(&self.pending),
        }
    }
}

impl HotspotSink for JsonFileSink {
    fn clear(&mut self) -> Result<()> {
        self.pending.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(HotspotError::SinkUnavailable(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, id: &ClusterId, hotspot: &Hotspot) -> Result<()> {
        self.pending.push((*id, *hotspot));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let body = self.render()?;
        fs::write(&self.path, body).map_err(|e| {
            HotspotError::SinkUnavailable(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
