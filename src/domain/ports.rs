use crate::domain::model::Counter;
use crate::utils::error::Result;
use std::io::Write;

/// Everything an action may touch while it runs. Collaborators are handed in
/// at execute time instead of being stored inside the action, so actions stay
/// plain owned values and the queue can hold them as `Box<dyn Action>`.
pub struct ActionContext<'a> {
    pub surface: &'a mut dyn Surface,
    pub counter: &'a mut Counter,
    pub out: &'a mut dyn Write,
}

/// A deferred unit of work with a stable name for diagnostics.
///
/// `execute` runs at most once per action instance; the owner drops the
/// action right after. An action may enqueue follow-up actions through
/// `ctx.surface`. A returned error aborts the current batch and propagates.
pub trait Action {
    fn name(&self) -> &'static str;
    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()>;
}

/// The interaction surface actions submit work to.
pub trait Surface {
    /// Appends the action to the pending queue. No validation.
    fn emit_action(&mut self, action: Box<dyn Action>);

    /// Requests program exit. Idempotent.
    fn abort_program(&mut self);

    fn is_ready_to_exit(&self) -> bool;
}

/// Source of raw input characters for the application loop.
///
/// `Ok(None)` signals end of input.
pub trait InputSource {
    fn next_char(&mut self) -> Result<Option<char>>;
}

/// External collaborator for fetching remote content. Nothing in the loop
/// calls this; the only implementation is a fixed-string stub.
pub trait Requester {
    fn request(&self, endpoint: &str) -> Result<String>;
}
