use crate::core::queue::ActionQueue;
use crate::domain::ports::{Action, Surface};

/// The interaction surface between raw input and the actions it produces.
///
/// Two states: Running (initial) and Exiting (terminal, entered by
/// `abort_program`). The `debug` flag is threaded in from configuration;
/// when set, every submitted action is logged by name.
pub struct UserInterface {
    action_queue: ActionQueue,
    program_abort: bool,
    debug: bool,
}

impl UserInterface {
    pub fn new(debug: bool) -> Self {
        Self {
            action_queue: ActionQueue::new(),
            program_abort: false,
            debug,
        }
    }

    /// Removes and returns the front of the pending queue, if any. The
    /// application loop drains the queue through this rather than through
    /// `ActionQueue::execute`, so actions appended during a drain keep strict
    /// FIFO ordering with the ones already queued.
    pub fn take_next(&mut self) -> Option<Box<dyn Action>> {
        self.action_queue.take_next()
    }

    pub fn has_pending(&self) -> bool {
        !self.action_queue.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.action_queue.len()
    }
}

impl Surface for UserInterface {
    fn emit_action(&mut self, action: Box<dyn Action>) {
        if self.debug {
            tracing::debug!(action = action.name(), "queued action");
        }
        self.action_queue.append(action);
    }

    fn abort_program(&mut self) {
        self.program_abort = true;
    }

    fn is_ready_to_exit(&self) -> bool {
        self.program_abort
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::SayHello;

    #[test]
    fn test_starts_running_with_empty_queue() {
        let surface = UserInterface::new(false);
        assert!(!surface.is_ready_to_exit());
        assert!(!surface.has_pending());
    }

    #[test]
    fn test_emit_action_appends_in_fifo_order() {
        let mut surface = UserInterface::new(false);
        surface.emit_action(Box::new(SayHello));
        surface.emit_action(Box::new(SayHello));
        assert_eq!(surface.pending_len(), 2);

        let front = surface.take_next().unwrap();
        assert_eq!(front.name(), "SayHello");
        assert_eq!(surface.pending_len(), 1);
    }

    #[test]
    fn test_abort_program_is_idempotent() {
        let mut surface = UserInterface::new(false);
        surface.abort_program();
        surface.abort_program();
        assert!(surface.is_ready_to_exit());
    }
}
