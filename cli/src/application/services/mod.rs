//! Application services — use-case orchestration.
//!
//! Each service module implements one step of the pipeline by composing
//! domain logic with port trait calls. Services import only from
//! `crate::domain` and `crate::application::ports` — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

pub mod build;
pub mod pipeline;
pub mod stage;
pub mod sync;
