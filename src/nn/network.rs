//! Fully connected feed-forward network.

use crate::error::{OptError, Result};

/// Node activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Activation {
    Linear,
    /// `1 / (1 + e^-x)`
    Logistic,
    #[default]
    Tanh,
    /// `max(0, x)`
    Relu,
}

impl Activation {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Logistic => 1.0 / (1.0 + (-x).exp()),
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
        }
    }
}

/// A fully connected network with a bias unit on every non-output layer.
///
/// Weights are laid out layer by layer; within a layer, node by node, each
/// node's incoming weights from the previous layer followed by its bias
/// weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedForwardNetwork {
    layers: Vec<usize>,
    hidden: Activation,
    output: Activation,
}

impl FeedForwardNetwork {
    /// `layers` lists node counts from input to output, e.g. `[7, 10, 1]`.
    /// Hidden and output layers both use `activation` unless
    /// [`with_output_activation`](Self::with_output_activation) overrides
    /// the latter.
    pub fn new(layers: Vec<usize>, activation: Activation) -> Result<Self> {
        if layers.len() < 2 {
            return Err(OptError::config(
                "network needs at least an input and an output layer",
            ));
        }
        if layers.contains(&0) {
            return Err(OptError::config("every layer needs at least one node"));
        }
        Ok(Self {
            layers,
            hidden: activation,
            output: activation,
        })
    }

    /// Sets the output-layer activation.
    pub fn with_output_activation(mut self, activation: Activation) -> Self {
        self.output = activation;
        self
    }

    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn input_len(&self) -> usize {
        self.layers[0]
    }

    pub fn output_len(&self) -> usize {
        self.layers[self.layers.len() - 1]
    }

    /// Number of weights, biases included.
    pub fn weight_count(&self) -> usize {
        self.layers.windows(2).map(|w| (w[0] + 1) * w[1]).sum()
    }

    /// Runs the network on one input.
    pub fn forward(&self, weights: &[f64], input: &[f64]) -> Result<Vec<f64>> {
        if weights.len() != self.weight_count() {
            return Err(OptError::LengthMismatch {
                expected: self.weight_count(),
                actual: weights.len(),
            });
        }
        if input.len() != self.input_len() {
            return Err(OptError::DataSet(format!(
                "input has {} values, network expects {}",
                input.len(),
                self.input_len()
            )));
        }

        let last = self.layers.len() - 2;
        let mut activations = input.to_vec();
        let mut offset = 0;
        for (l, w) in self.layers.windows(2).enumerate() {
            let (fan_in, width) = (w[0], w[1]);
            let act = if l == last { self.output } else { self.hidden };
            activations = (0..width)
                .map(|_| {
                    let node = &weights[offset..offset + fan_in + 1];
                    offset += fan_in + 1;
                    let sum: f64 = node[..fan_in]
                        .iter()
                        .zip(&activations)
                        .map(|(w, x)| w * x)
                        .sum::<f64>()
                        + node[fan_in];
                    act.apply(sum)
                })
                .collect();
        }
        Ok(activations)
    }
}
