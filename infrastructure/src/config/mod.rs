//! Configuration sources

pub mod env;
