//! Option types for the statistics functions

use serde::{Deserialize, Serialize};
use ubique_core::Dim;

/// Bias handling for [`kurtosis`](crate::kurtosis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasFlag {
    /// Sample-size correction
    Corrected = 0,
    /// Plain moment ratio
    Biased = 1,
}

impl Default for BiasFlag {
    fn default() -> Self {
        Self::Biased
    }
}

/// Options for [`kurtosis`](crate::kurtosis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KurtosisOptions {
    pub flag: BiasFlag,
    pub dim: Dim,
}

impl Default for KurtosisOptions {
    fn default() -> Self {
        Self {
            flag: BiasFlag::default(),
            dim: Dim::Rows,
        }
    }
}

impl KurtosisOptions {
    pub fn corrected() -> Self {
        Self {
            flag: BiasFlag::Corrected,
            ..Self::default()
        }
    }

    pub fn with_flag(mut self, flag: BiasFlag) -> Self {
        self.flag = flag;
        self
    }

    pub fn with_dim(mut self, dim: Dim) -> Self {
        self.dim = dim;
        self
    }
}
