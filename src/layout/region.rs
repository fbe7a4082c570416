// Sat Aug 22 2026 - Alex

use crate::layout::MemoryPermission;
use std::fmt;

/// A contiguous range of the process's own address space with uniform
/// protection. Structural value only; two enumerations of the same layout
/// return equal but distinct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRegion {
    address: u64,
    size: u64,
    permission: MemoryPermission,
}

impl MemoryRegion {
    pub fn new(address: u64, size: u64, permission: MemoryPermission) -> Self {
        Self {
            address,
            size,
            permission,
        }
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn end(&self) -> u64 {
        self.address + self.size
    }

    pub fn permission(&self) -> MemoryPermission {
        self.permission
    }

    pub fn contains(&self, addr: u64) -> bool {
        addr >= self.address && addr < self.end()
    }

    pub fn is_executable(&self) -> bool {
        self.permission.can_execute()
    }

    pub fn is_writable(&self) -> bool {
        self.permission.can_write()
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#014x}-{:#014x} {} ({} bytes)",
            self.address,
            self.end(),
            self.permission,
            self.size
        )
    }
}
