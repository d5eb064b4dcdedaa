use crate::domain::ports::{Action, ActionContext};
use crate::utils::error::Result;

/// Prints the greeting line to the program's output writer.
pub struct SayHello;

impl Action for SayHello {
    fn name(&self) -> &'static str {
        "SayHello"
    }

    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        writeln!(ctx.out, "Hello World!")?;
        Ok(())
    }
}

/// Moves the surface into its terminal Exiting state.
pub struct AbortProgram;

impl Action for AbortProgram {
    fn name(&self) -> &'static str {
        "AbortProgram"
    }

    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        ctx.surface.abort_program();
        Ok(())
    }
}

pub struct Increment;

impl Action for Increment {
    fn name(&self) -> &'static str {
        "Increment"
    }

    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        ctx.counter.increment();
        Ok(())
    }
}

pub struct Decrement;

impl Action for Decrement {
    fn name(&self) -> &'static str {
        "Decrement"
    }

    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        ctx.counter.decrement();
        Ok(())
    }
}

/// First stage of the two-stage dispatch: owns a raw input character and, when
/// executed, emits the real effect (if any) onto the surface's queue for a
/// later drain pass. Input handling and effect execution never happen in the
/// same pass.
pub struct ProcessInput {
    input: char,
}

impl ProcessInput {
    pub fn new(input: char) -> Self {
        Self { input }
    }
}

impl Action for ProcessInput {
    fn name(&self) -> &'static str {
        "ProcessInput"
    }

    fn execute(&mut self, ctx: &mut ActionContext<'_>) -> Result<()> {
        match self.input {
            'h' => ctx.surface.emit_action(Box::new(SayHello)),
            'q' => ctx.surface.emit_action(Box::new(AbortProgram)),
            // Unknown input is a silent no-op.
            _ => {}
        }
        Ok(())
    }
}
