pub mod clock;
pub mod compress;
pub mod fetch;
pub mod process;
pub mod stats;
pub mod text;
pub mod timing;
pub mod workspace;
