// Sun Aug 23 2026 - Alex

use crate::config::RuntimeConfig;
use crate::modules::enumerator::process_module_map_with_config;
use crate::modules::RuntimeModule;
use log::warn;

/// Finds the first loaded module whose path contains `name` as a
/// case-sensitive substring, in enumeration order. No normalization on
/// either side. Falls back to the partial module list if the enumeration
/// aborted mid-read.
pub fn find_module(name: &str) -> Option<RuntimeModule> {
    find_module_with_config(name, &RuntimeConfig::default())
}

pub fn find_module_with_config(name: &str, config: &RuntimeConfig) -> Option<RuntimeModule> {
    let modules = match process_module_map_with_config(config) {
        Ok(modules) => modules,
        Err(e) => {
            warn!("module enumeration aborted, searching partial results: {}", e.source);
            e.collected
        }
    };
    find_in(modules, name)
}

fn find_in(modules: impl IntoIterator<Item = RuntimeModule>, name: &str) -> Option<RuntimeModule> {
    modules.into_iter().find(|m| m.path().contains(name))
}
