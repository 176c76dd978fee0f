#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod download;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod manifest;
pub mod naming;
pub mod plan;
pub mod select;
