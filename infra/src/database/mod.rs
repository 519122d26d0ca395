//! Database module - PostgreSQL implementations using SQLx
//!
//! - Connection pool management and embedded migrations
//! - Repository implementations of the core store traits

pub mod connection;
pub mod postgres;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{PostgresEventRepository, PostgresQuestionRepository, PostgresUserRepository};
