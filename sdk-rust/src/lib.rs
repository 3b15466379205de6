mod accumulator;
mod client_utils;
mod errors;
pub mod google;
mod language_model;
pub mod relay;
pub mod sdk_test;
mod types;

pub use accumulator::StreamAccumulator;
pub use errors::*;
pub use language_model::{LanguageModel, LanguageModelStream};
pub use relay::{ContactSubmission, FormRelay, RelayResponse};
pub use types::*;
