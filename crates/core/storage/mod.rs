//! Point sources and hotspot sinks
//!
//! The engine reads one full snapshot of points per pass and replaces the
//! entire published hotspot collection afterwards. These traits are the
//! seams to whatever store holds that data.

use crate::engine::ClusterId;
use crate::error::Result;
use hotspot_types::hotspot::Hotspot;
use hotspot_types::point::SourcePoint;

mod json;
mod memory;

pub use json::{JsonFileSink, JsonFileSource, OutputFormat};
pub use memory::MemoryBackend;

/// Supplies the input snapshot.
pub trait PointSource {
    /// Read every point record, keyed by source key. Order is not significant.
    fn snapshot(&self) -> Result<Vec<(String, SourcePoint)>>;
}

/// Receives the published hotspots.
///
/// A pass calls `clear`, then `write` once per hotspot, then `flush`.
/// There is no rollback: if a `write` fails, earlier writes stay visible.
pub trait HotspotSink {
    /// Delete every previously published hotspot.
    fn clear(&mut self) -> Result<()>;

    /// Publish one hotspot under its cluster id.
    fn write(&mut self, id: &ClusterId, hotspot: &Hotspot) -> Result<()>;

    /// Make buffered writes durable.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink operation counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageStats {
    /// Snapshots served
    pub snapshots: u64,
    /// Hotspot collections cleared
    pub clears: u64,
    /// Hotspots written
    pub writes: u64,
}
