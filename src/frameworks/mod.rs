// Frameworks: process bootstrap, configuration and the trace runner.

pub mod config;
pub mod runner;
