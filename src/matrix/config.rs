//! Options for container-level operations

/// Post-processing applied by the `*_with` methods on the matrix types
///
/// The raw kernels have no options; these only decide what the container
/// methods do with a kernel's output before handing it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseConfig {
    /// Sort indices within each row (column for CSC) of multiplication and
    /// elementwise results. Off by default: those kernels emit entries in
    /// accumulator drain order.
    pub sort_indices: bool,

    /// Release spare capacity in the output vectors. The symbolic pass
    /// sizes the product before cancellation, so products can carry slack.
    pub shrink_to_fit: bool,
}

impl Default for SparseConfig {
    fn default() -> Self {
        Self {
            sort_indices: false,
            shrink_to_fit: false,
        }
    }
}

impl SparseConfig {
    /// Sorted output with no spare capacity
    pub fn canonical() -> Self {
        Self {
            sort_indices: true,
            shrink_to_fit: true,
        }
    }

    pub fn with_sort_indices(mut self, sort_indices: bool) -> Self {
        self.sort_indices = sort_indices;
        self
    }

    pub fn with_shrink_to_fit(mut self, shrink_to_fit: bool) -> Self {
        self.shrink_to_fit = shrink_to_fit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let config = SparseConfig::default();
        assert!(!config.sort_indices);
        assert!(!config.shrink_to_fit);

        assert_eq!(
            SparseConfig::canonical(),
            SparseConfig::default().with_sort_indices(true).with_shrink_to_fit(true)
        );
    }
}
