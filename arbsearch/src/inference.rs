//! Symbolic inference traces
//!
//! A single weighted-sum node `y = Σ x_i * w_i + bias` evaluated with
//! symbolic weights and integer inputs. The output keeps one term per weight
//! term plus the bias terms, so every contribution stays attributable.
use arbnum::{config::ArithmeticConfig, expr::RationalExpression};
use log::debug;

use crate::utils::error::{SearchError, SearchResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neuron {
    weights: Vec<RationalExpression>,
    bias: RationalExpression,
}

impl Neuron {
    pub fn new(weights: Vec<RationalExpression>, bias: RationalExpression) -> Self {
        Self { weights, bias }
    }

    #[inline]
    pub fn weights(&self) -> &[RationalExpression] {
        &self.weights
    }

    #[inline]
    pub fn bias(&self) -> &RationalExpression {
        &self.bias
    }

    /// Evaluates the node on one integer input per weight.
    ///
    /// Contribution `i` is weight `i` with every coefficient scaled by input
    /// `i`. The output concatenates all contributions, then the bias.
    pub fn forward(&self, inputs: &[i64], arithmetic: &ArithmeticConfig) -> SearchResult<InferenceTrace> {
        if inputs.len() != self.weights.len() {
            return Err(SearchError::InputCountMismatch {
                expected: self.weights.len(),
                found: inputs.len(),
            });
        }

        let contributions = self
            .weights
            .iter()
            .zip(inputs)
            .map(|(weight, &input)| weight.scale(input, arithmetic.overflow))
            .collect::<Result<Vec<_>, _>>()?;

        let mut output = arithmetic.new_expression()?;
        for contribution in &contributions {
            output = output + contribution.clone();
        }
        output = output + self.bias.clone();

        debug!("Node output for inputs {:?}: `{}`", inputs, output);
        Ok(InferenceTrace {
            inputs: inputs.to_vec(),
            weights: self.weights.clone(),
            contributions,
            bias: self.bias.clone(),
            output,
        })
    }
}

/// Everything needed to explain one evaluation of a [`Neuron`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceTrace {
    pub inputs: Vec<i64>,
    pub weights: Vec<RationalExpression>,
    /// `x_i * w_i`, one entry per input.
    pub contributions: Vec<RationalExpression>,
    pub bias: RationalExpression,
    pub output: RationalExpression,
}

impl std::fmt::Display for InferenceTrace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (input, weight)) in self.inputs.iter().zip(&self.weights).enumerate() {
            writeln!(f, "input x{} = {}, weight w{} = {}", i + 1, input, i + 1, weight)?;
        }
        for (i, contribution) in self.contributions.iter().enumerate() {
            writeln!(f, "x{} * w{} = {}", i + 1, i + 1, contribution)?;
        }
        writeln!(f, "bias = {}", self.bias)?;
        write!(f, "output = {} (= {})", self.output, self.output.exact_value())
    }
}
