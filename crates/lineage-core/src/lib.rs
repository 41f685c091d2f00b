#![forbid(unsafe_code)]
//! lineage-core library.
//!
//! Shared types for the lineage workspace: the creator data model, dataset
//! loading, configuration, error codes, and the user-state repository.
//!
//! # Conventions
//!
//! - **Errors**: Use `anyhow::Result` for return types where appropriate;
//!   typed errors (`thiserror`) where callers branch on the failure.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod social;

pub use model::{Creator, Work, WorkKind};
