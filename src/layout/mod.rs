// Sat Aug 22 2026 - Alex

pub mod enumerator;
pub mod permission;
pub mod region;

pub use enumerator::{process_memory_layout, process_memory_layout_with_config};
pub use permission::MemoryPermission;
pub use region::MemoryRegion;
