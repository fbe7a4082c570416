// Sat Aug 22 2026 - Alex

use crate::config::RuntimeConfig;
use crate::maps::{EnumerateError, MapsReader, MAPS_PATH};
use crate::modules::{is_module_header, ModuleSource, RuntimeModule};
use log::warn;
use std::io::BufRead;

/// Module enumeration by scanning the maps pseudo-file: every record whose
/// permission token and first bytes pass the header validator becomes one
/// RuntimeModule at the record's start address.
pub struct MapsModuleSource;

impl ModuleSource for MapsModuleSource {
    fn modules(
        &self,
        config: &RuntimeConfig,
    ) -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>> {
        let reader = match MapsReader::open_self() {
            Ok(reader) => reader.with_line_max(config.line_buffer_size),
            Err(e) => {
                warn!("cannot open {}: {}", MAPS_PATH, e);
                return Ok(Vec::new());
            }
        };
        collect_modules(reader, config.max_module_path)
    }
}

pub(crate) fn collect_modules<R: BufRead>(
    reader: MapsReader<R>,
    path_limit: usize,
) -> Result<Vec<RuntimeModule>, EnumerateError<RuntimeModule>> {
    let mut modules = Vec::new();
    for record in reader {
        match record {
            Ok(line) => {
                if !is_module_header(line.start, &line.permissions) {
                    continue;
                }
                modules.push(RuntimeModule::bounded(line.path, line.start, path_limit));
            }
            Err(source) => return Err(EnumerateError::new(source, modules)),
        }
    }
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::MAX_MODULE_PATH;
    use std::io::Cursor;

    fn reader(input: &str) -> MapsReader<Cursor<Vec<u8>>> {
        MapsReader::from_reader(Cursor::new(input.as_bytes().to_vec()))
    }

    // Synthetic maps lines whose start addresses point at buffers we own,
    // so the header validator reads real, known bytes.
    fn maps_line(image: &[u8], perms: &str, path: &str) -> String {
        let start = image.as_ptr() as u64;
        let end = start + image.len() as u64;
        format!("{:x}-{:x} {} 00000000 fd:01 42 {}", start, end, perms, path)
    }

    #[test]
    fn test_only_header_bearing_region_becomes_module() {
        let elf = b"\x7fELF\x02\x01\x01\x00".to_vec();
        let data = vec![0u8; 16];
        let input = format!(
            "{}\n{}\n",
            maps_line(&elf, "r-xp", "/system/lib64/libfoo.so"),
            maps_line(&data, "rw-p", "/system/lib64/libfoo.so"),
        );
        let modules = collect_modules(reader(&input), MAX_MODULE_PATH).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].load_address(), elf.as_ptr() as u64);
        assert_eq!(modules[0].path(), "/system/lib64/libfoo.so");
    }

    #[test]
    fn test_executable_region_without_magic_is_skipped() {
        let jit = b"not an elf header".to_vec();
        let input = format!("{}\n", maps_line(&jit, "r-xp", "/tmp/jit-cache"));
        let modules = collect_modules(reader(&input), MAX_MODULE_PATH).unwrap();
        assert!(modules.is_empty());
    }

    #[test]
    fn test_module_with_empty_path_still_emitted() {
        let elf = b"\x7fELF\x02\x01\x01\x00".to_vec();
        let input = format!("{}\n", maps_line(&elf, "r--p", ""));
        let modules = collect_modules(reader(&input), MAX_MODULE_PATH).unwrap();
        assert_eq!(modules.len(), 1);
        assert!(!modules[0].has_path());
        assert_eq!(modules[0].load_address(), elf.as_ptr() as u64);
    }

    #[test]
    fn test_path_bounded_by_limit() {
        let elf = b"\x7fELF\x02\x01\x01\x00".to_vec();
        let input = format!("{}\n", maps_line(&elf, "r-xp", "/very/long/module/path.so"));
        let modules = collect_modules(reader(&input), 9).unwrap();
        assert_eq!(modules[0].path(), "/very/lon");
    }

    #[test]
    fn test_malformed_line_propagates_with_partial() {
        let elf = b"\x7fELF\x02\x01\x01\x00".to_vec();
        let input = format!("{}\nbroken line\n", maps_line(&elf, "r-xp", "/lib/libx.so"));
        let err = collect_modules(reader(&input), MAX_MODULE_PATH).unwrap_err();
        assert_eq!(err.collected.len(), 1);
        assert_eq!(err.collected[0].path(), "/lib/libx.so");
    }

    #[test]
    fn test_live_module_map_succeeds() {
        let modules = MapsModuleSource
            .modules(&RuntimeConfig::default())
            .unwrap();
        // a live process always has at least its own executable mapped
        assert!(!modules.is_empty());
        assert!(modules.iter().any(|m| m.has_path()));
    }
}
