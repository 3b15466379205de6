//! Test doubles for the language model and form relay interfaces.

mod model;
mod relay;

pub use model::{MockGenerateResult, MockLanguageModel, MockStreamResult};
pub use relay::{MockFormRelay, MockRelayResult};
