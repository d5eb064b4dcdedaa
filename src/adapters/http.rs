use crate::domain::ports::Requester;
use crate::utils::error::Result;

/// Inert network collaborator: answers every request with the same fixed
/// body. Nothing in the application loop calls it; it exists as the seam a
/// real client would plug into.
#[derive(Debug, Clone, Default)]
pub struct StubRequester;

impl Requester for StubRequester {
    fn request(&self, endpoint: &str) -> Result<String> {
        tracing::debug!(endpoint, "stub request, returning canned response");
        Ok("stubbed response".to_string())
    }
}
