//! Core types for Balade.
//!
//! This module provides type-safe wrappers and the static record shapes of the
//! zone/service registry.

pub mod id;
pub mod service;
pub mod slug;
pub mod zone;

pub use id::*;
pub use service::Service;
pub use slug::{Slug, SlugError};
pub use zone::{Priority, PriorityError, Zone, ZoneKind};
