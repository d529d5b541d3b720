//! Integration tests for tint crates.
//!
//! Exercises tint-core and tint-codec together through their public APIs.
