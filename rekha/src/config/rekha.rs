//! Main RekhaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, RigidTransform2D};
use crate::error::{Error, Result};
use crate::synthetic::{LineSamplerConfig, NoiseGenerator};

use super::sections::{GeometrySection, SyntheticSection, VelodyneSection};

/// Default config path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/rekha.yaml";

/// Full Rekha configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RekhaConfig {
    /// Geometry settings
    #[serde(default)]
    pub geometry: GeometrySection,

    /// Synthetic generator settings
    #[serde(default)]
    pub synthetic: SyntheticSection,

    /// Raw record file settings
    #[serde(default)]
    pub velodyne: VelodyneSection,
}

impl RekhaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/rekha.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", DEFAULT_CONFIG_PATH);
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// [`Error::Config`](crate::Error::Config) for a negative tolerance or
    /// sigma, [`Error::InvalidRotation`](crate::Error::InvalidRotation) for a
    /// mount matrix outside `geometry.orthonormal_tolerance`.
    pub fn validate(&self) -> Result<()> {
        let tolerance = self.geometry.orthonormal_tolerance;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(Error::Config(format!(
                "geometry.orthonormal_tolerance must be >= 0, got {}",
                tolerance
            )));
        }
        let sigma = self.synthetic.noise_sigma;
        if sigma.is_nan() || sigma < 0.0 {
            return Err(Error::Config(format!(
                "synthetic.noise_sigma must be >= 0, got {}",
                sigma
            )));
        }
        self.mount_transform()?;
        Ok(())
    }

    /// Serialize to YAML string
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Line sampler parameters
    pub fn line_sampler_config(&self) -> LineSamplerConfig {
        LineSamplerConfig {
            samples: self.synthetic.line_samples,
            noise_sigma: self.synthetic.noise_sigma,
        }
    }

    /// Noise generator seeded from the synthetic section
    pub fn noise_generator(&self) -> NoiseGenerator {
        NoiseGenerator::new(self.synthetic.seed)
    }

    /// Sensor mount transform, identity when unset.
    pub fn mount_transform(&self) -> Result<RigidTransform2D> {
        match &self.velodyne.mount {
            Some(mount) => mount.to_transform(self.geometry.orthonormal_tolerance),
            None => Ok(RigidTransform2D::identity()),
        }
    }

    /// Build a transform from a raw matrix, checked with the configured tolerance.
    pub fn transform_from_matrix(
        &self,
        matrix: [[f64; 2]; 2],
        translation: Point2D,
    ) -> Result<RigidTransform2D> {
        RigidTransform2D::from_matrix_with_tolerance(
            matrix,
            translation,
            self.geometry.orthonormal_tolerance,
        )
    }
}
