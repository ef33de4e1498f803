//! Shared helpers.
//!
//! - [`db_error`] - classification of database errors

pub mod db_error;
