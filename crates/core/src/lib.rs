//! Balade Core - Zone and service registry.
//!
//! This crate provides the static data behind Balade's local landing pages:
//! - [`types`] - Newtype IDs, slugs, zones and services
//! - [`registry`] - The immutable [`Registry`] and its query helpers
//!
//! # Architecture
//!
//! The core crate performs no I/O. The built-in dataset is embedded at compile
//! time and parsed once on first access through [`registry::builtin`]. Callers
//! that want a different dataset read the YAML themselves and hand it to
//! [`Registry::from_yaml`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod registry;
pub mod types;

pub use registry::{Registry, RegistryError, RegistryIssue};
pub use types::*;
