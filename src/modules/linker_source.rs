// Sat Aug 22 2026 - Alex

use crate::config::RuntimeConfig;
use crate::maps::EnumerateError;
use crate::modules::{ModuleSource, RuntimeModule};
use libc::{c_int, c_void, dl_iterate_phdr, dl_phdr_info, size_t};
use std::ffi::CStr;

/// Module enumeration through the dynamic loader's own registry. One
/// callback invocation becomes one RuntimeModule; the loader decides the
/// order. Never reads the maps pseudo-file and cannot hit a parse error.
pub struct LinkerModuleSource;

struct IterateState {
    path_limit: usize,
    modules: Vec<RuntimeModule>,
}

unsafe extern "C" fn push_module(
    info: *mut dl_phdr_info,
    _size: size_t,
    data: *mut c_void,
) -> c_int {
    let state = &mut *(data as *mut IterateState);
    let info = &*info;

    // Only an absolute loader-reported name is usable as a path; relative
    // and empty names (linker-internal pseudo-modules, the main executable
    // on some loaders) keep the load address with an empty path.
    let path = if info.dlpi_name.is_null() {
        String::new()
    } else {
        let name = CStr::from_ptr(info.dlpi_name).to_string_lossy();
        if name.starts_with('/') {
            name.into_owned()
        } else {
            String::new()
        }
    };

    state
        .modules
        .push(RuntimeModule::bounded(path, info.dlpi_addr as u64, state.path_limit));
    0
}

impl ModuleSource for LinkerModuleSource {
    fn modules(
        &self,
        config: &RuntimeConfig,
    ) -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>> {
        let mut state = IterateState {
            path_limit: config.max_module_path,
            modules: Vec::new(),
        };
        unsafe {
            dl_iterate_phdr(Some(push_module), &mut state as *mut IterateState as *mut c_void);
        }
        Ok(state.modules)
    }
}
