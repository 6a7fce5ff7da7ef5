//! REST endpoints outside GraphQL

pub mod health;
