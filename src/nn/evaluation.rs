//! Scoring network weights against a dataset.

use super::dataset::DataSet;
use super::network::FeedForwardNetwork;
use crate::candidate::{Candidate, Objective};
use crate::error::{OptError, Result};
use crate::problem::EvaluationFunction;

/// Half the sum of squared errors of the network over the dataset, with
/// the candidate as the weight vector. Minimized.
#[derive(Debug, Clone)]
pub struct NetworkError {
    network: FeedForwardNetwork,
    data: DataSet,
}

impl NetworkError {
    pub fn new(network: FeedForwardNetwork, data: DataSet) -> Result<Self> {
        if network.input_len() != data.input_len() || network.output_len() != data.target_len() {
            return Err(OptError::DataSet(format!(
                "network shape {}->{} does not match dataset shape {}->{}",
                network.input_len(),
                network.output_len(),
                data.input_len(),
                data.target_len()
            )));
        }
        Ok(Self { network, data })
    }

    pub fn network(&self) -> &FeedForwardNetwork {
        &self.network
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }
}

impl EvaluationFunction for NetworkError {
    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn value(&self, candidate: &Candidate) -> Result<f64> {
        let mut sum = 0.0;
        for example in self.data.iter() {
            let output = self.network.forward(candidate.values(), &example.input)?;
            sum += output
                .iter()
                .zip(&example.target)
                .map(|(o, t)| (o - t).powi(2))
                .sum::<f64>();
        }
        Ok(0.5 * sum)
    }
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Fraction of examples classified correctly.
///
/// With one output, output and target agree when both fall on the same
/// side of 0.5. With several outputs, the largest output must sit at the
/// position of the largest target (one-hot labels).
pub fn accuracy(network: &FeedForwardNetwork, weights: &Candidate, data: &DataSet) -> Result<f64> {
    let mut correct = 0usize;
    for example in data.iter() {
        let output = network.forward(weights.values(), &example.input)?;
        let hit = if output.len() == 1 {
            (output[0] >= 0.5) == (example.target[0] >= 0.5)
        } else {
            argmax(&output) == argmax(&example.target)
        };
        if hit {
            correct += 1;
        }
    }
    Ok(correct as f64 / data.len() as f64)
}
