pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{http::StubRequester, input::ReaderInput};
pub use config::CliConfig;
pub use crate::core::{app::App, queue::ActionQueue, surface::UserInterface};
pub use domain::model::Counter;
pub use domain::ports::{Action, ActionContext, InputSource, Requester, Surface};
pub use utils::error::{ActionqError, Result};
