//! Quotes and the pool they are selected from.

pub mod entities;
pub mod pool;
