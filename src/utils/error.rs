use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActionqError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("action '{action}' failed: {source}")]
    ActionFailed {
        action: &'static str,
        #[source]
        source: Box<ActionqError>,
    },
}

impl ActionqError {
    /// Wraps an error that escaped an action's `execute`, naming the action.
    pub fn in_action(action: &'static str, source: ActionqError) -> Self {
        ActionqError::ActionFailed {
            action,
            source: Box::new(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ActionqError>;
