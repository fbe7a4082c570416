// Sat Aug 22 2026 - Alex

use crate::config::RuntimeConfig;
use crate::maps::EnumerateError;
use crate::modules::{LinkerModuleSource, MapsModuleSource, RuntimeModule};
use once_cell::sync::Lazy;

/// Strategy seam between the two module-enumeration backends. Both must
/// produce the same RuntimeModule shape; order is backend-defined.
pub trait ModuleSource {
    fn modules(
        &self,
        config: &RuntimeConfig,
    ) -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>>;
}

pub(crate) static MAPS_SOURCE: MapsModuleSource = MapsModuleSource;
pub(crate) static LINKER_SOURCE: LinkerModuleSource = LinkerModuleSource;

/// Backend fixed once at startup: the linker iterator on 64-bit Android,
/// the maps scan everywhere else.
pub(crate) static DEFAULT_SOURCE: Lazy<&'static (dyn ModuleSource + Sync)> = Lazy::new(|| {
    if cfg!(all(target_os = "android", target_pointer_width = "64")) {
        &LINKER_SOURCE as &(dyn ModuleSource + Sync)
    } else {
        &MAPS_SOURCE as &(dyn ModuleSource + Sync)
    }
});
