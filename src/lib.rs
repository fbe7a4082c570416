// Fri Aug 21 2026 - Alex

pub mod config;
pub mod layout;
pub mod maps;
pub mod modules;

pub use config::RuntimeConfig;
pub use layout::{process_memory_layout, MemoryPermission, MemoryRegion};
pub use maps::{EnumerateError, LineRecord, MapsError, MapsReader};
pub use modules::{find_module, process_module_map, ModuleSource, RuntimeModule};
