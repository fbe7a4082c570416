// Sat Aug 22 2026 - Alex

use std::fmt;

/// Closed permission categories for a mapped region. Tokens that grant
/// neither a recognized read/write/execute combination (execute-only,
/// write-only, fully protected, plain read-only) all collapse to `NoAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryPermission {
    NoAccess,
    ReadWrite,
    ReadExecute,
    ReadWriteExecute,
}

impl MemoryPermission {
    /// Classifies a maps permission token. The three-flag case is checked
    /// before the two-flag case so an "rwx?" token never degrades to
    /// `ReadWrite`.
    pub fn from_token(token: &str) -> Self {
        let b = token.as_bytes();
        if b.len() < 3 {
            return Self::NoAccess;
        }
        if b[0] == b'r' && b[1] == b'w' && b[2] == b'x' {
            Self::ReadWriteExecute
        } else if b[0] == b'r' && b[1] == b'w' {
            Self::ReadWrite
        } else if b[0] == b'r' && b[2] == b'x' {
            Self::ReadExecute
        } else {
            Self::NoAccess
        }
    }

    pub fn can_write(self) -> bool {
        matches!(self, Self::ReadWrite | Self::ReadWriteExecute)
    }

    pub fn can_execute(self) -> bool {
        matches!(self, Self::ReadExecute | Self::ReadWriteExecute)
    }
}

impl fmt::Display for MemoryPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAccess => write!(f, "---"),
            Self::ReadWrite => write!(f, "rw-"),
            Self::ReadExecute => write!(f, "r-x"),
            Self::ReadWriteExecute => write!(f, "rwx"),
        }
    }
}
