//! froggy-import library - one-off data population for the Froggy database
//!
//! Three concerns, each behind a subcommand of the `froggy-import` binary:
//! - loading the species dataset from CSV
//! - seeding curated call entries, resolving noisy names to species ids
//! - downloading sample recordings and registering them as local calls

pub mod csv_import;
pub mod download;
pub mod populate;
pub mod seed;
pub mod verify;
