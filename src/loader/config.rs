//! Loader configuration.

use serde::{Deserialize, Serialize};

use super::LoadError;

/// Default upper bound on the number of vertices a file may declare.
pub const DEFAULT_MAX_VERTICES: usize = 89;

/// Largest value [`LoaderConfig::max_vertices`] may be set to.
pub const VERTEX_LIMIT_CEILING: usize = 1 << 16;

/// How integer tokens map to edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeValues {
    /// Any nonzero integer is an edge.
    #[default]
    Permissive,
    /// Only `0` and `1` are accepted.
    Binary,
}

impl EdgeValues {
    /// Maps a token value to an edge flag, or `None` if the policy rejects it.
    #[inline]
    pub fn classify(self, value: i64) -> Option<bool> {
        match (self, value) {
            (_, 0) => Some(false),
            (Self::Binary, 1) | (Self::Permissive, _) => Some(true),
            (Self::Binary, _) => None,
        }
    }
}

/// What to do with a matrix that is not equal to its transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symmetry {
    /// Accept it; traversal follows `row -> col` entries as directed edges.
    #[default]
    Directed,
    /// Reject it with [`LoadError::Asymmetric`](super::LoadError::Asymmetric).
    Require,
}

/// Settings for [`load`](super::load) and [`parse`](super::parse).
///
/// Deserializes from JSON; missing fields take their defaults:
///
/// ```
/// use graph_connectivity::loader::{EdgeValues, LoaderConfig};
///
/// let config = LoaderConfig::from_json(r#"{ "edge_values": "binary" }"#).unwrap();
/// assert_eq!(config.edge_values, EdgeValues::Binary);
/// assert_eq!(config.max_vertices, 89);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Largest accepted matrix order.
    pub max_vertices: usize,
    /// Token-to-edge policy.
    pub edge_values: EdgeValues,
    /// Symmetry policy.
    pub symmetry: Symmetry,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_vertices: DEFAULT_MAX_VERTICES,
            edge_values: EdgeValues::default(),
            symmetry: Symmetry::default(),
        }
    }
}

impl LoaderConfig {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed JSON or unknown fields.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Checks that the vertex limit lies in `1..=VERTEX_LIMIT_CEILING`.
    ///
    /// # Errors
    /// Returns [`LoadError::InvalidLimit`] otherwise.
    pub fn validate(&self) -> Result<(), LoadError> {
        if (1..=VERTEX_LIMIT_CEILING).contains(&self.max_vertices) {
            Ok(())
        } else {
            Err(LoadError::InvalidLimit {
                max_vertices: self.max_vertices,
                ceiling: VERTEX_LIMIT_CEILING,
            })
        }
    }

    /// Returns a copy with a different vertex limit.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Returns a copy with a different edge policy.
    #[must_use]
    pub fn with_edge_values(mut self, edge_values: EdgeValues) -> Self {
        self.edge_values = edge_values;
        self
    }

    /// Returns a copy with a different symmetry policy.
    #[must_use]
    pub fn with_symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_values_classify() {
        assert_eq!(EdgeValues::Permissive.classify(0), Some(false));
        assert_eq!(EdgeValues::Permissive.classify(1), Some(true));
        assert_eq!(EdgeValues::Permissive.classify(7), Some(true));
        assert_eq!(EdgeValues::Permissive.classify(-1), Some(true));

        assert_eq!(EdgeValues::Binary.classify(0), Some(false));
        assert_eq!(EdgeValues::Binary.classify(1), Some(true));
        assert_eq!(EdgeValues::Binary.classify(2), None);
        assert_eq!(EdgeValues::Binary.classify(-1), None);
    }

    #[test]
    fn config_json_roundtrip_and_defaults() {
        let config = LoaderConfig::default()
            .with_max_vertices(10)
            .with_symmetry(Symmetry::Require);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(LoaderConfig::from_json(&json).unwrap(), config);

        assert_eq!(LoaderConfig::from_json("{}").unwrap(), LoaderConfig::default());
    }

    #[test]
    fn config_limit_bounds() {
        assert!(LoaderConfig::default().validate().is_ok());
        assert!(LoaderConfig::default()
            .with_max_vertices(VERTEX_LIMIT_CEILING)
            .validate()
            .is_ok());
        assert!(matches!(
            LoaderConfig::default().with_max_vertices(0).validate(),
            Err(LoadError::InvalidLimit { max_vertices: 0, .. })
        ));
        assert!(matches!(
            LoaderConfig::default().with_max_vertices(usize::MAX).validate(),
            Err(LoadError::InvalidLimit { ceiling: VERTEX_LIMIT_CEILING, .. })
        ));
    }

    #[test]
    fn config_rejects_unknown_fields() {
        assert!(LoaderConfig::from_json(r#"{ "vertices": 3 }"#).is_err());
    }
}
