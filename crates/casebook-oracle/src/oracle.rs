use std::future::Future;

use crate::error::OracleError;

/// A text-completion model: system prompt and user prompt in, text out.
///
/// Implementations own transport, authentication and rate limiting. Stages in
/// this crate only ever make one call at a time per case.
pub trait Oracle: Send + Sync {
    /// Identifier of the model behind this oracle, recorded with results.
    fn model_id(&self) -> &str;

    fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, OracleError>> + Send;
}
