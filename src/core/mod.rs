//! Core infrastructure shared by the platform and board layers
//!
//! Currently this is only the logging abstraction.

pub mod logging;
