//! Configuration file parsing and validation

pub mod checkrun_toml;

pub use checkrun_toml::{
    CheckerSettings, CheckerValue, CheckrunMeta, ColorOption, Config, OutputConfig, OutputFormat,
};
