//! Dense layer with logistic activation.

use crate::error::ConfigurationError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Logistic function `1 / (1 + e^-z)`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn dot(weights: &[f64], input: &[f64]) -> f64 {
    weights.iter().zip(input).map(|(w, x)| w * x).sum()
}

/// One fully connected layer.
///
/// `weights` holds one row per output unit. With `bias` set, every row has
/// one extra leading weight that multiplies a constant `1.0` input.
///
/// Deserialization goes through [`DenseLayer::new`], so every layer in
/// existence has passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(try_from = "RawDenseLayer")]
pub struct DenseLayer {
    /// Weight rows, one per output unit.
    weights: Vec<Vec<f64>>,
    /// Whether each row starts with a bias weight.
    bias: bool,
}

/// Unchecked wire form of [`DenseLayer`].
#[derive(Deserialize)]
struct RawDenseLayer {
    weights: Vec<Vec<f64>>,
    #[serde(default)]
    bias: bool,
}

impl TryFrom<RawDenseLayer> for DenseLayer {
    type Error = ConfigurationError;

    fn try_from(raw: RawDenseLayer) -> Result<Self, Self::Error> {
        Self::new(raw.weights, raw.bias)
    }
}

impl DenseLayer {
    /// Creates a validated layer.
    ///
    /// # Errors
    ///
    /// Fails if there are no rows, rows differ in length, a row has no
    /// input weights, or any weight is not finite.
    pub fn new(weights: Vec<Vec<f64>>, bias: bool) -> Result<Self, ConfigurationError> {
        let layer = Self { weights, bias };
        layer.validate()?;
        Ok(layer)
    }

    /// Number of inputs this layer consumes (bias excluded).
    pub fn inputs(&self) -> usize {
        let width = self.weights.first().map_or(0, Vec::len);
        width.saturating_sub(usize::from(self.bias))
    }

    /// Number of output units.
    pub fn outputs(&self) -> usize {
        self.weights.len()
    }

    /// Checks the layer's own shape and values.
    fn validate(&self) -> Result<(), ConfigurationError> {
        let Some(first) = self.weights.first() else {
            return Err(ConfigurationError::new("Layer has no output units"));
        };
        let width = first.len();
        if width <= usize::from(self.bias) {
            return Err(ConfigurationError::new(format!(
                "Layer rows have {} weights, too few for bias={}",
                width, self.bias
            )));
        }
        for (unit, row) in self.weights.iter().enumerate() {
            if row.len() != width {
                return Err(ConfigurationError::new(format!(
                    "Layer row {} has {} weights, expected {}",
                    unit,
                    row.len(),
                    width
                )));
            }
            if let Some(bad) = row.iter().position(|w| !w.is_finite()) {
                return Err(ConfigurationError::new(format!(
                    "Layer row {} weight {} is not finite",
                    unit, bad
                )));
            }
        }
        Ok(())
    }

    /// Propagates `input` through the layer.
    ///
    /// # Errors
    ///
    /// Fails if `input` does not have exactly [`DenseLayer::inputs`] values.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<f64>, ConfigurationError> {
        if input.len() != self.inputs() {
            return Err(ConfigurationError::new(format!(
                "Layer expects {} inputs, got {}",
                self.inputs(),
                input.len()
            )));
        }

        let outputs = self
            .weights
            .iter()
            .map(|row| {
                let z = if self.bias {
                    row[0] + dot(&row[1..], input)
                } else {
                    dot(row, input)
                };
                sigmoid(z)
            })
            .collect();
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_forward_without_bias() {
        let layer = DenseLayer::new(vec![vec![1.0, -1.0], vec![0.0, 0.0]], false).unwrap();
        assert_eq!(layer.inputs(), 2);
        assert_eq!(layer.outputs(), 2);

        let out = layer.forward(&[2.0, 2.0]).unwrap();
        assert_eq!(out, vec![0.5, 0.5]);
    }

    #[test]
    fn test_forward_with_bias() {
        let layer = DenseLayer::new(vec![vec![3.0, 1.0, 1.0]], true).unwrap();
        assert_eq!(layer.inputs(), 2);

        let out = layer.forward(&[-1.0, -2.0]).unwrap();
        assert_eq!(out, vec![0.5]);
    }

    #[test]
    fn test_forward_rejects_wrong_width() {
        let layer = DenseLayer::new(vec![vec![1.0, 1.0]], false).unwrap();
        let err = layer.forward(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(err.message.contains("expects 2 inputs"));
    }

    #[test]
    fn test_deserialize_validates() {
        let ragged = serde_json::from_str::<DenseLayer>(
            r#"{"bias":true,"weights":[[1.0,2.0],[]]}"#,
        );
        let err = ragged.unwrap_err();
        assert!(err.to_string().contains("row 1 has 0 weights"));

        let layer: DenseLayer =
            serde_json::from_str(r#"{"bias":true,"weights":[[1.0,2.0],[0.0,0.0]]}"#).unwrap();
        assert_eq!(layer.forward(&[-0.5]).unwrap(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert!(DenseLayer::new(vec![], false).is_err());
        assert!(DenseLayer::new(vec![vec![1.0], vec![1.0, 2.0]], false).is_err());
        assert!(DenseLayer::new(vec![vec![1.0]], true).is_err());
        assert!(DenseLayer::new(vec![vec![f64::NAN, 1.0]], false).is_err());
        assert!(DenseLayer::new(vec![vec![f64::INFINITY]], false).is_err());
    }
}
