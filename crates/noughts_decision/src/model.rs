//! Serializable model description.

use crate::encoding::CellCodes;
use crate::layer::DenseLayer;
use serde::{Deserialize, Serialize};

/// Weights and cell codes as supplied by the caller.
///
/// Each layer is checked on its own as it is built or deserialized; the
/// layers are not yet checked against each other. Turn it into a
/// [`DecisionEngine`](crate::DecisionEngine) with
/// [`DecisionEngine::from_config`](crate::DecisionEngine::from_config).
/// Where the description comes from (a file, an embedded constant, a
/// generator) is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Numeric code per cell value.
    #[serde(default)]
    pub codes: CellCodes,
    /// Layers in evaluation order.
    pub layers: Vec<DenseLayer>,
}

impl ModelConfig {
    /// Creates a model description.
    pub fn new(codes: CellCodes, layers: Vec<DenseLayer>) -> Self {
        Self { codes, layers }
    }
}
