//! One-time setup shared by unit tests.

pub mod logging;
