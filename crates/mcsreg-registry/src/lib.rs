//! mcsreg registry library entry.
//!
//! This crate wires the configuration source, backend resolver, built-in
//! backends, and the registry state machine into one label registry. It is
//! intended to be consumed by the binary (`main.rs`), by embedding processes,
//! and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod backend;
pub mod backends;
pub mod config;
pub mod directory;
pub mod global;
pub mod registry;

pub use backend::{BackendResolver, LabelContext, McsBackend};
pub use config::{ConfigSource, FileConfig, SharedConfig};
pub use directory::{IdentityDirectory, StaticDirectory};
pub use registry::{McsRegistry, Phase, RegistryStatus};
