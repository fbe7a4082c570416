// Sat Aug 22 2026 - Alex

use goblin::elf::header::{ELFMAG, SELFMAG};

/// Permission tokens the dynamic loader uses for a module's header-bearing
/// first segment. Everything else is rejected before any memory is touched.
pub const HEADER_TOKENS: [&str; 2] = ["r--p", "r-xp"];

/// Decides whether the mapping starting at `start` is the first segment of a
/// loaded native module.
///
/// The permission gate comes first: only an exactly-matching private
/// read-only or read-execute token proves the page is mapped and readable.
/// Only then are the first bytes compared against the ELF magic. Executable
/// anonymous mappings (JIT pages, trampolines) fail one gate or the other.
pub fn is_module_header(start: u64, permissions: &str) -> bool {
    if !HEADER_TOKENS.contains(&permissions) {
        return false;
    }
    // Safe to dereference: the token above is only ever reported for a
    // currently mapped, readable region of our own address space.
    let magic = unsafe { std::slice::from_raw_parts(start as usize as *const u8, SELFMAG) };
    magic == &ELFMAG[..]
}
