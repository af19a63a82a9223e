#[cfg(feature = "csr")]
pub mod app;
pub mod appointment;
pub mod profile;
pub mod reveal;
pub mod scheduling;
#[cfg(feature = "serve")]
pub mod serve;
