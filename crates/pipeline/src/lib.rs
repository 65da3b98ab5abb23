//! Generation orchestrator.
//!
//! Wires the pipeline together per request: normalize (text requests
//! only), assemble the upstream prompt, invoke the generation backend,
//! and append the result to the history ledger.

pub mod error;
pub mod orchestrator;

pub use error::PipelineError;
pub use orchestrator::{
    GenerationOutcome, Orchestrator, StructuredGenerationRequest, TextGenerationRequest,
};
