//! Command implementations

pub mod build;
pub mod check;
pub mod init;

pub use build::run_build;
pub use check::run_check;
pub use init::run_init;
