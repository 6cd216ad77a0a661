pub mod app;
pub mod deletion;
pub mod display;
pub mod intake;
pub mod log;
pub mod notice;
pub mod session;
pub mod store;
