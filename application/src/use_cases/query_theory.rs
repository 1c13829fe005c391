//! Theory query use case.
//!
//! Executes a one-shot structured query: the user's request is wrapped in
//! the theory instruction, sent with the visualization response schema,
//! and the reply is parsed atomically into a [`Visualization`].
//!
//! There is no caching and no retry; asking twice may legitimately return
//! different (schema-valid) data.

use crate::ports::oracle::{OracleError, OracleGateway};
use muse_domain::theory::parser::{parse_visualization, TheoryDataError};
use muse_domain::{theory_instruction, ModelConfig, Prompt, Visualization};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during a theory query.
#[derive(Error, Debug)]
pub enum QueryTheoryError {
    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    /// The oracle answered, but the payload failed validation. The query
    /// fails as a whole; no partially-populated visualization escapes.
    #[error("Theory data error: {0}")]
    Parse(#[from] TheoryDataError),
}

/// Input for the [`QueryTheoryUseCase`].
#[derive(Debug, Clone)]
pub struct QueryTheoryInput {
    /// The user's request, e.g. "show me D dorian".
    pub request: Prompt,
    /// Model configuration; only `theory` is used.
    pub models: ModelConfig,
}

impl QueryTheoryInput {
    pub fn new(request: Prompt, models: ModelConfig) -> Self {
        Self { request, models }
    }
}

/// Use case for answering a theory query with typed visualization data.
///
/// 1. Build the theory instruction around the request
/// 2. Ask the oracle for JSON matching [`Visualization::response_schema()`]
/// 3. Parse and validate the reply atomically
pub struct QueryTheoryUseCase {
    oracle: Arc<dyn OracleGateway>,
}

impl QueryTheoryUseCase {
    pub fn new(oracle: Arc<dyn OracleGateway>) -> Self {
        Self { oracle }
    }

    pub async fn execute(&self, input: QueryTheoryInput) -> Result<Visualization, QueryTheoryError> {
        info!("Starting theory query: {}", input.request.preview(100));

        let instruction = theory_instruction(input.request.content());
        let schema = Visualization::response_schema();

        let text = self
            .oracle
            .generate_structured(&input.models.theory, &instruction, &schema)
            .await?;

        debug!("Theory query returned {} bytes", text.len());

        let visualization = parse_visualization(&text)?;

        info!(
            "Theory query produced \"{}\" with {} notes",
            visualization.title,
            visualization.note_count()
        );

        Ok(visualization)
    }
}
