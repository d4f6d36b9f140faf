//! Desktop notification payloads.

pub mod entities;
