pub mod batch;
pub mod catalog;
pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod metadata;
pub mod password;
pub mod units;
