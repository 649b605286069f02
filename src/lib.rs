//! Powerlifting survey unit-correction library
//!
//! Detects survey rows whose lift weights were reported in pounds but
//! recorded as if they were kilograms, and converts them in place.

pub mod build_info;
pub mod inference;
pub mod models;
pub mod survey;
