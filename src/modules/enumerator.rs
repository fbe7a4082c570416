// Sun Aug 23 2026 - Alex

use crate::config::RuntimeConfig;
use crate::maps::EnumerateError;
use crate::modules::source::{DEFAULT_SOURCE, LINKER_SOURCE};
use crate::modules::{ModuleSource, RuntimeModule};

/// Snapshots the loaded native modules of the calling process through the
/// backend selected at startup. Same partial-result contract as the layout
/// enumerator: a fatal parse error carries the modules collected so far.
pub fn process_module_map() -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>> {
    process_module_map_with_config(&RuntimeConfig::default())
}

pub fn process_module_map_with_config(
    config: &RuntimeConfig,
) -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>> {
    let source: &(dyn ModuleSource + Sync) = if config.prefer_linker_source {
        &LINKER_SOURCE
    } else {
        *DEFAULT_SOURCE
    };
    source.modules(config)
}
