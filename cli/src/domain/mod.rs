//! Domain layer — pure build-profile logic, types, and decisions.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod invocation;
pub mod platform;
pub mod sync;

pub use config::Settings;
pub use error::BuildError;
pub use invocation::{BuildInvocation, RELEASE_FLAG};
pub use platform::{LaunchStrategy, OperatingSystem, PlatformProfile};
pub use sync::SyncAction;
