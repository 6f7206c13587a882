//! Test fixtures for Skep development.
//!
//! Small hive maps with known layouts, shared by member-crate tests and
//! benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{open_map, reference_map, scatter_map, sealed_room_map};
