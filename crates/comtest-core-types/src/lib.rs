//! Core types shared across comtest facilities
//!
//! This crate provides the canonical schema constants used by both the
//! assertion engine and its logging facility:
//!
//! - **Field keys**: structured logging field names
//! - **Event names**: lifecycle and failure event identifiers

pub mod schema;
