pub mod data;
pub mod error_helpers;
pub mod logging;
pub mod validation;
