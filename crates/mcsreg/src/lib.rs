//! Top-level facade crate for mcsreg.
//!
//! Re-exports core types and the registry library so users can depend on a single crate.

pub mod core {
    pub use mcsreg_core::*;
}

pub mod registry {
    pub use mcsreg_registry::*;
}
