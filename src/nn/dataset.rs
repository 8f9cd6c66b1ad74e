//! In-memory training data.

use crate::error::{OptError, Result};

/// One training example.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Example {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Example {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Self {
        Self { input, target }
    }
}

/// A non-empty set of examples sharing input and target widths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataSet {
    examples: Vec<Example>,
}

impl DataSet {
    pub fn new(examples: Vec<Example>) -> Result<Self> {
        let first = examples
            .first()
            .ok_or_else(|| OptError::DataSet("dataset has no examples".into()))?;
        let (inputs, targets) = (first.input.len(), first.target.len());
        if let Some(i) = examples
            .iter()
            .position(|e| e.input.len() != inputs || e.target.len() != targets)
        {
            return Err(OptError::DataSet(format!(
                "example {i} has shape {}->{}, expected {inputs}->{targets}",
                examples[i].input.len(),
                examples[i].target.len()
            )));
        }
        Ok(Self { examples })
    }

    /// Builds a dataset from rows whose last `targets` columns are the
    /// target.
    pub fn from_rows(rows: &[Vec<f64>], targets: usize) -> Result<Self> {
        let examples = rows
            .iter()
            .map(|row| {
                if row.len() <= targets {
                    return Err(OptError::DataSet(format!(
                        "row of {} values cannot hold {targets} target columns and an input",
                        row.len()
                    )));
                }
                let split = row.len() - targets;
                Ok(Example::new(row[..split].to_vec(), row[split..].to_vec()))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(examples)
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn input_len(&self) -> usize {
        self.examples[0].input.len()
    }

    pub fn target_len(&self) -> usize {
        self.examples[0].target.len()
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }
}
