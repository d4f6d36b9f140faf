//! Shown-quote history.

pub mod entities;
