//! Foundation types for DEVCON.
//!
//! This crate holds the engine-agnostic types shared by the console core and
//! its hosts: error types, input and action events, and configuration.

pub mod config;
pub mod error;
pub mod input;
