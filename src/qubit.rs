//! Virtual and physical qubit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An index used by the input program, independent of hardware (spec
/// GLOSSARY "Virtual qubit").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VirtualQubit(pub u32);

impl fmt::Display for VirtualQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u32> for VirtualQubit {
    fn from(id: u32) -> Self {
        VirtualQubit(id)
    }
}

impl From<usize> for VirtualQubit {
    fn from(id: usize) -> Self {
        VirtualQubit(u32::try_from(id).expect("VirtualQubit overflow: exceeds u32::MAX"))
    }
}

/// A hardware qubit, identified by a fixed integer id and located at a grid
/// coordinate (spec GLOSSARY "Physical qubit").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PhysicalQubit(pub u32);

impl fmt::Display for PhysicalQubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

impl From<u32> for PhysicalQubit {
    fn from(id: u32) -> Self {
        PhysicalQubit(id)
    }
}

impl From<usize> for PhysicalQubit {
    fn from(id: usize) -> Self {
        PhysicalQubit(u32::try_from(id).expect("PhysicalQubit overflow: exceeds u32::MAX"))
    }
}

impl PhysicalQubit {
    /// This qubit's index into flat arrays such as the free-cycle table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl VirtualQubit {
    /// This qubit's index into flat arrays such as the V2R table.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
