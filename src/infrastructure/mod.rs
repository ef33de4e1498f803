//! Infrastructure layer: concrete registry backends.

pub mod persistence;
