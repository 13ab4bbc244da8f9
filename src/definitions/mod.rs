pub mod config;
pub mod pricing;
