pub mod batch;
pub mod browse;
pub mod compute;
pub mod config;
pub mod password;
