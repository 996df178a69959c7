use serde::{Deserialize, Serialize};

use crate::errors::ArrayError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageMode {
    /// Switch between dense and sparse storage by density.
    #[default]
    Adaptive,
    DenseOnly,
    SparseOnly,
}

/// Tunables for the dense/sparse representation switch.
///
/// Density is `populated / span`, where span is the highest populated index
/// plus one. A dense backend migrates to sparse when a write leaves the span
/// above `sparse_min_length` and density below `1 / sparse_density_divisor`.
/// A sparse backend migrates back once density reaches
/// `1 / dense_density_divisor` and the span is at most `dense_max_length`.
/// The gap between the two divisors keeps an array from flipping back and
/// forth on alternating writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StoragePolicy {
    pub mode: StorageMode,
    pub sparse_min_length: u32,
    pub sparse_density_divisor: u32,
    pub dense_density_divisor: u32,
    pub dense_max_length: u32,
}

impl Default for StoragePolicy {
    fn default() -> Self {
        Self {
            mode: StorageMode::Adaptive,
            sparse_min_length: 64,
            sparse_density_divisor: 8,
            dense_density_divisor: 2,
            dense_max_length: 1 << 20,
        }
    }
}

impl StoragePolicy {
    pub fn dense_only() -> Self {
        Self {
            mode: StorageMode::DenseOnly,
            ..Self::default()
        }
    }

    pub fn sparse_only() -> Self {
        Self {
            mode: StorageMode::SparseOnly,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.sparse_density_divisor == 0 || self.dense_density_divisor == 0 {
            return Err(ArrayError::InvalidPolicy {
                reason: "density divisors must be at least 1".into(),
            });
        }
        if self.dense_density_divisor >= self.sparse_density_divisor {
            return Err(ArrayError::InvalidPolicy {
                reason: format!(
                    "dense-density-divisor ({}) must be smaller than sparse-density-divisor ({})",
                    self.dense_density_divisor, self.sparse_density_divisor
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn should_sparsify(&self, populated: usize, span: u64) -> bool {
        match self.mode {
            StorageMode::Adaptive => {
                span > u64::from(self.sparse_min_length)
                    && (populated as u64).saturating_mul(u64::from(self.sparse_density_divisor))
                        < span
            }
            StorageMode::DenseOnly => false,
            StorageMode::SparseOnly => true,
        }
    }

    pub(crate) fn should_densify(&self, populated: usize, span: u64) -> bool {
        match self.mode {
            StorageMode::Adaptive => {
                span <= u64::from(self.dense_max_length)
                    && (populated as u64).saturating_mul(u64::from(self.dense_density_divisor))
                        >= span
            }
            StorageMode::DenseOnly => true,
            StorageMode::SparseOnly => false,
        }
    }
}
