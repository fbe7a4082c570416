// Sat Aug 22 2026 - Alex

use crate::config::RuntimeConfig;
use crate::layout::{MemoryPermission, MemoryRegion};
use crate::maps::{EnumerateError, MapsReader, MAPS_PATH};
use log::warn;
use std::io::BufRead;

/// Snapshots the process's own memory layout, sorted ascending by address.
///
/// An unopenable maps file degrades to an empty result. A malformed line
/// aborts the read and surfaces as an error that still carries the regions
/// collected before the failure.
pub fn process_memory_layout() -> Result<Vec<MemoryRegion>, EnumerateError<MemoryRegion>> {
    process_memory_layout_with_config(&RuntimeConfig::default())
}

pub fn process_memory_layout_with_config(
    config: &RuntimeConfig,
) -> Result<Vec<MemoryRegion>, EnumerateError<MemoryRegion>> {
    let reader = match MapsReader::open_self() {
        Ok(reader) => reader.with_line_max(config.line_buffer_size),
        Err(e) => {
            warn!("cannot open {}: {}", MAPS_PATH, e);
            return Ok(Vec::new());
        }
    };
    collect_regions(reader)
}

pub(crate) fn collect_regions<R: BufRead>(
    reader: MapsReader<R>,
) -> Result<Vec<MemoryRegion>, EnumerateError<MemoryRegion>> {
    let mut regions = Vec::new();
    for record in reader {
        match record {
            Ok(line) => {
                let permission = MemoryPermission::from_token(&line.permissions);
                regions.push(MemoryRegion::new(line.start, line.size(), permission));
            }
            Err(source) => {
                regions.sort_by_key(|r| r.address());
                return Err(EnumerateError::new(source, regions));
            }
        }
    }
    regions.sort_by_key(|r| r.address());
    Ok(regions)
}
