pub mod generator;
pub mod openai;
pub mod prompts;

pub use generator::{GenerationOptions, TextGenerator};
pub use openai::OpenAiGenerator;
