pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod report;
