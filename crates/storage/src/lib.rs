#![forbid(unsafe_code)]

pub mod config;
pub mod csv_files;
pub mod repository;

pub use config::StorageConfig;
