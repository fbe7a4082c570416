// Sat Aug 22 2026 - Alex

pub mod enumerator;
pub mod linker_source;
pub mod lookup;
pub mod maps_source;
pub mod module;
pub mod source;
pub mod validator;

pub use enumerator::{process_module_map, process_module_map_with_config};
pub use linker_source::LinkerModuleSource;
pub use lookup::{find_module, find_module_with_config};
pub use maps_source::MapsModuleSource;
pub use module::{RuntimeModule, MAX_MODULE_PATH};
pub use source::ModuleSource;
pub use validator::is_module_header;
