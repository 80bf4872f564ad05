use crate::status::{HandlerExecutionError, HandlerStatus};

pub mod chain;
pub mod exchange;
pub mod factory;
pub mod handler;
pub mod status;

pub type HandlerOutput = Result<HandlerStatus, HandlerExecutionError>;
