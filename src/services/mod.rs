pub mod answer_provider;
pub mod direct;
pub mod pipeline;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testing;

pub use answer_provider::{build_provider, AnswerProvider, AnswerResult, ProviderKind};
pub use direct::DirectProvider;
pub use pipeline::PipelineProvider;
