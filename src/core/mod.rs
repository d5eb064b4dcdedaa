pub mod actions;
pub mod app;
pub mod queue;
pub mod surface;

pub use crate::domain::model::Counter;
pub use crate::domain::ports::{Action, ActionContext, InputSource, Requester, Surface};
pub use crate::utils::error::Result;
