//! # grade-core
//!
//! Core types and the grade aggregation engine for the gradebook.
//!
//! This crate provides the foundational types shared across all gradebook crates:
//! - Entity structs for the seven stored tables (persons, curriculums, courses, ...)
//! - Typed read-model records, one per listing query
//! - The entity-kind enum used in not-found reporting
//! - Cross-cutting error types
//! - The pure, I/O-free weighted grade aggregation engine

pub mod entities;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod views;
