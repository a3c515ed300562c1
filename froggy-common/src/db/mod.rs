//! Database layer: schema initialization and typed queries

mod init;
mod queries;

pub use init::init_database;
pub use queries::*;
