// Fri Aug 21 2026 - Alex

use crate::maps::LINE_MAX;
use crate::modules::MAX_MODULE_PATH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub line_buffer_size: usize,
    pub max_module_path: usize,
    pub prefer_linker_source: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            line_buffer_size: LINE_MAX,
            max_module_path: MAX_MODULE_PATH,
            prefer_linker_source: false,
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_buffer_size(mut self, size: usize) -> Self {
        self.line_buffer_size = size;
        self
    }

    pub fn with_max_module_path(mut self, limit: usize) -> Self {
        self.max_module_path = limit;
        self
    }

    pub fn with_linker_source(mut self, prefer: bool) -> Self {
        self.prefer_linker_source = prefer;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.line_buffer_size == 0 {
            return Err("line_buffer_size must be greater than 0".to_string());
        }
        if self.max_module_path == 0 {
            return Err("max_module_path must be greater than 0".to_string());
        }
        Ok(())
    }
}
