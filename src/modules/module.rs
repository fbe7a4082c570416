// Sat Aug 22 2026 - Alex

use std::fmt;

/// Upper bound on a stored module path, in bytes. Longer paths are silently
/// truncated, never rejected.
pub const MAX_MODULE_PATH: usize = 1024;

/// One loaded native module: the backing file path (possibly empty for
/// anonymous or linker-internal entries) and the address of its
/// header-bearing mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeModule {
    path: String,
    load_address: u64,
}

impl RuntimeModule {
    pub fn new(path: impl Into<String>, load_address: u64) -> Self {
        Self::bounded(path, load_address, MAX_MODULE_PATH)
    }

    pub fn bounded(path: impl Into<String>, load_address: u64, path_limit: usize) -> Self {
        let mut path = path.into();
        truncate_on_char_boundary(&mut path, path_limit);
        Self { path, load_address }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn load_address(&self) -> u64 {
        self.load_address
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

impl fmt::Display for RuntimeModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<anonymous> @ {:#x}", self.load_address)
        } else {
            write!(f, "{} @ {:#x}", self.path, self.load_address)
        }
    }
}

fn truncate_on_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_within_bound_kept() {
        let module = RuntimeModule::new("/system/lib64/libfoo.so", 0x7000_0000);
        assert_eq!(module.path(), "/system/lib64/libfoo.so");
        assert_eq!(module.load_address(), 0x7000_0000);
        assert!(module.has_path());
    }

    #[test]
    fn test_empty_path_allowed() {
        let module = RuntimeModule::new("", 0x1000);
        assert!(!module.has_path());
        assert_eq!(module.to_string(), "<anonymous> @ 0x1000");
    }

    #[test]
    fn test_long_path_truncated() {
        let long = format!("/tmp/{}", "a".repeat(2 * MAX_MODULE_PATH));
        let module = RuntimeModule::new(long, 0x1000);
        assert_eq!(module.path().len(), MAX_MODULE_PATH);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 3-byte characters straddling the limit must not split
        let module = RuntimeModule::bounded("€€€€", 0x1000, 4);
        assert_eq!(module.path(), "€");
    }
}
