//! Command-line interface

pub mod args;

pub use args::{Args, Commands, ConfigArgs, GenerateArgs, Verbosity, DEFAULT_CUISINE};
