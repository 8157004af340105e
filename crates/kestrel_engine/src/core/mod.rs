//! Core engine services
//!
//! Currently hosts the unified configuration system. Subsystem-specific
//! settings live here so applications have a single file to edit.

pub mod config;
