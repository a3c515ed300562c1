//! # Froggy Common Library
//!
//! Shared code for the Froggy binaries including:
//! - Database schema and typed queries
//! - Species matching (noisy call metadata -> canonical species id)
//! - Confidence score allocation for identification results
//! - Configuration and root folder resolution

pub mod confidence;
pub mod config;
pub mod db;
pub mod error;
pub mod identify;
pub mod matcher;

pub use error::{Error, Result};
pub use matcher::{CallCandidate, MatchTier, SpeciesMatch, SpeciesRef};
