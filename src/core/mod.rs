//! Shared labels and configuration

pub mod config;
pub mod labels;
