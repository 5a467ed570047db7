pub mod domain;
pub mod infra;
pub mod state;
pub mod store;
