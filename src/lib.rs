//! Lounge library exports for testing

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Production,
    Staging,
}
