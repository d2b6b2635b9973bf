//! Feed-forward stack of dense layers.

use crate::error::ConfigurationError;
use crate::layer::DenseLayer;
use noughts_board::CELLS;
use tracing::{debug, instrument};

/// Validated layer stack mapping a 9-value board encoding to 9 cell scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    layers: Vec<DenseLayer>,
}

impl Network {
    /// Builds a network, rejecting any topology that does not chain
    /// `9 -> ... -> 9`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if there are no layers, the first
    /// layer does not take 9 inputs, a layer's output count differs from
    /// the next layer's input count, or the last layer does not produce 9
    /// outputs.
    #[instrument(skip(layers), fields(layers = layers.len()))]
    pub fn new(layers: Vec<DenseLayer>) -> Result<Self, ConfigurationError> {
        if layers.is_empty() {
            return Err(ConfigurationError::new("Network has no layers"));
        }

        let mut width = CELLS;
        for (index, layer) in layers.iter().enumerate() {
            if layer.inputs() != width {
                return Err(ConfigurationError::new(format!(
                    "Layer {} takes {} inputs but receives {}",
                    index,
                    layer.inputs(),
                    width
                )));
            }
            width = layer.outputs();
        }

        if width != CELLS {
            return Err(ConfigurationError::new(format!(
                "Network produces {} scores, expected {}",
                width, CELLS
            )));
        }

        debug!(depth = layers.len(), "Network topology validated");
        Ok(Self { layers })
    }

    /// Returns the layers in evaluation order.
    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    /// Propagates an encoded board through every layer.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, ConfigurationError> {
        let mut activations = input.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }
}
