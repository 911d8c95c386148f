//! Domain layer for PackPilot
//!
//! Contains the core entities and domain errors. This layer has no external
//! services and defines the ubiquitous language of the packing workflow.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::DomainError;
