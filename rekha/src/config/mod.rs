//! Configuration loading for Rekha.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod rekha;
mod sections;

pub use self::rekha::{RekhaConfig, DEFAULT_CONFIG_PATH};
pub use sections::{GeometrySection, MountSection, SyntheticSection, VelodyneSection};
