use crate::core::actions::ProcessInput;
use crate::core::surface::UserInterface;
use crate::domain::model::Counter;
use crate::domain::ports::{Action, ActionContext, InputSource, Surface};
use crate::utils::error::{ActionqError, Result};
use std::io::Write;

/// The read-dispatch-execute loop. Generic over its input source and output
/// writer so tests can drive it with in-memory buffers.
pub struct App<I: InputSource, W: Write> {
    input: I,
    out: W,
    surface: UserInterface,
    counter: Counter,
    debug: bool,
}

impl<I: InputSource, W: Write> App<I, W> {
    pub fn new(input: I, out: W) -> Self {
        Self::new_with_debug(input, out, false)
    }

    pub fn new_with_debug(input: I, out: W, debug: bool) -> Self {
        Self {
            input,
            out,
            surface: UserInterface::new(debug),
            counter: Counter::default(),
            debug,
        }
    }

    /// Runs until the surface reports ready-to-exit or the input source is
    /// exhausted. Each iteration reads one character, executes a
    /// `ProcessInput` action for it synchronously, then drains the surface's
    /// queue to exhaustion.
    pub fn run_loop(&mut self) -> Result<()> {
        while !self.surface.is_ready_to_exit() {
            let Some(input_char) = self.input.next_char()? else {
                tracing::debug!("input exhausted, leaving loop");
                break;
            };

            let mut action = ProcessInput::new(input_char);
            Self::execute_one(
                &mut action,
                &mut self.surface,
                &mut self.counter,
                &mut self.out,
            )?;

            self.drain()?;
        }
        Ok(())
    }

    /// Drains the surface's queue front-first, one action at a time, so an
    /// executed action may append further actions that are picked up within
    /// this same drain. A self-enqueueing action therefore spins forever;
    /// there is deliberately no iteration cap.
    fn drain(&mut self) -> Result<()> {
        while let Some(mut action) = self.surface.take_next() {
            if self.debug {
                tracing::debug!(action = action.name(), "executing action");
            }
            Self::execute_one(
                action.as_mut(),
                &mut self.surface,
                &mut self.counter,
                &mut self.out,
            )?;
        }
        Ok(())
    }

    fn execute_one(
        action: &mut dyn Action,
        surface: &mut UserInterface,
        counter: &mut Counter,
        out: &mut W,
    ) -> Result<()> {
        let name = action.name();
        let mut ctx = ActionContext {
            surface,
            counter,
            out,
        };
        action
            .execute(&mut ctx)
            .map_err(|e| ActionqError::in_action(name, e))
    }
}
