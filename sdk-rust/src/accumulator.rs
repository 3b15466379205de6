use crate::{ModelResponse, ModelUsage, PartialModelResponse};

/// Manages the accumulation of text deltas for streaming responses
#[derive(Debug, Clone, Default)]
pub struct StreamAccumulator {
    text: String,
    /// Accumulated usage statistics
    accumulated_usage: Option<ModelUsage>,
}

impl StreamAccumulator {
    /// Creates a new `StreamAccumulator`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a partial response to the accumulator and returns the text delta
    /// it carried, if any.
    pub fn add_partial(&mut self, partial: PartialModelResponse) -> Option<String> {
        if let Some(usage) = partial.usage {
            self.accumulated_usage
                .get_or_insert_with(ModelUsage::default)
                .add(&usage);
        }
        let delta = partial.delta.filter(|delta| !delta.is_empty())?;
        self.text.push_str(&delta);
        Some(delta)
    }

    /// Text accumulated so far
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checks if the accumulator has any text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Computes the final response from accumulated deltas
    #[must_use]
    pub fn compute_response(self) -> ModelResponse {
        ModelResponse {
            text: self.text,
            usage: self.accumulated_usage,
        }
    }
}
