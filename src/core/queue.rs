use crate::domain::ports::{Action, ActionContext};
use crate::utils::error::Result;
use std::collections::VecDeque;

/// FIFO queue of pending actions. The queue owns its actions exclusively;
/// each is dropped exactly once, after its single execution.
#[derive(Default)]
pub struct ActionQueue {
    actions: VecDeque<Box<dyn Action>>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            actions: VecDeque::new(),
        }
    }

    /// Appends to the back, preserving insertion order.
    pub fn append(&mut self, action: Box<dyn Action>) {
        self.actions.push_back(action);
    }

    /// Removes and returns the front action, if any.
    pub fn take_next(&mut self) -> Option<Box<dyn Action>> {
        self.actions.pop_front()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Action for ActionQueue {
    fn name(&self) -> &'static str {
        "ActionQueue"
    }

    /// Runs every queued action in insertion order, then releases them all.
    /// The two passes are deliberate: no action is dropped until every
    /// execution has completed. On error the batch aborts; already-executed
    /// actions stay executed and the unexecuted remainder stays queued.
    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        for action in self.actions.iter_mut() {
            action.execute(ctx)?;
        }
        self.actions.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::UserInterface;
    use crate::domain::model::Counter;
    use crate::utils::error::ActionqError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its execution and its drop into a shared journal, so tests can
    /// assert ordering between the execute pass and the release pass.
    struct JournalingAction {
        id: usize,
        journal: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl JournalingAction {
        fn ok(id: usize, journal: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
            Box::new(Self {
                id,
                journal: Rc::clone(journal),
                fail: false,
            })
        }

        fn failing(id: usize, journal: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
            Box::new(Self {
                id,
                journal: Rc::clone(journal),
                fail: true,
            })
        }
    }

    impl Action for JournalingAction {
        fn name(&self) -> &'static str {
            "Journaling"
        }

        fn execute(&mut self, _ctx: &mut ActionContext<'_>) -> Result<()> {
            self.journal.borrow_mut().push(format!("exec:{}", self.id));
            if self.fail {
                return Err(ActionqError::IoError(std::io::Error::other("boom")));
            }
            Ok(())
        }
    }

    impl Drop for JournalingAction {
        fn drop(&mut self) {
            self.journal.borrow_mut().push(format!("drop:{}", self.id));
        }
    }

    fn run_queue(queue: &mut ActionQueue) -> Result<()> {
        let mut surface = UserInterface::new(false);
        let mut counter = Counter::default();
        let mut out = Vec::new();
        let mut ctx = ActionContext {
            surface: &mut surface,
            counter: &mut counter,
            out: &mut out,
        };
        queue.execute(&mut ctx)
    }

    #[test]
    fn test_execute_runs_all_in_order_before_releasing_any() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut queue = ActionQueue::new();
        for id in 0..3 {
            queue.append(JournalingAction::ok(id, &journal));
        }

        run_queue(&mut queue).unwrap();

        assert!(queue.is_empty());
        assert_eq!(
            *journal.borrow(),
            vec!["exec:0", "exec:1", "exec:2", "drop:0", "drop:1", "drop:2"]
        );
    }

    #[test]
    fn test_execute_empties_the_queue() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut queue = ActionQueue::new();
        queue.append(JournalingAction::ok(0, &journal));
        queue.append(JournalingAction::ok(1, &journal));
        assert_eq!(queue.len(), 2);

        run_queue(&mut queue).unwrap();
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut queue = ActionQueue::new();
        for id in [3, 1, 2] {
            queue.append(JournalingAction::ok(id, &journal));
        }

        let first = queue.take_next().unwrap();
        assert_eq!(first.name(), "Journaling");
        drop(first);
        assert_eq!(*journal.borrow(), vec!["drop:3"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_failing_action_aborts_the_batch() {
        let journal = Rc::new(RefCell::new(Vec::new()));
        let mut queue = ActionQueue::new();
        queue.append(JournalingAction::ok(0, &journal));
        queue.append(JournalingAction::failing(1, &journal));
        queue.append(JournalingAction::ok(2, &journal));

        let result = run_queue(&mut queue);
        assert!(result.is_err());

        // The action after the failure never ran, and nothing was released.
        assert_eq!(*journal.borrow(), vec!["exec:0", "exec:1"]);
        assert_eq!(queue.len(), 3);
    }
}
