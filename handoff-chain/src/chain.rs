use std::fmt::{Display, Formatter};

use tracing::debug;
use uuid::Uuid;

use crate::exchange::Exchange;
use crate::handler::Handler;
use crate::status::{Code, HandlerExecutionError};

/// Index of a registered handler; only meaningful for the chain that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(pub usize);

struct ChainEntry<I, O> {
    handler: Box<dyn Handler<I, O>>,
    next: Option<usize>,
}

/// Owns every handler node and the successor links between them. The link
/// structure is fixed before dispatching starts.
pub struct Chain<I, O> {
    entries: Vec<ChainEntry<I, O>>,
}

#[derive(Debug, PartialEq)]
pub enum Outcome<O> {
    Handled(O),
    /// Every handler passed. Not an error.
    Unhandled,
}

impl<I, O> Chain<I, O> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a handler node, unlinked.
    pub fn register(&mut self, handler: impl Handler<I, O> + 'static) -> HandlerId {
        self.entries.push(ChainEntry {
            handler: Box::new(handler),
            next: None,
        });
        HandlerId(self.entries.len() - 1)
    }

    /// Sets `current`'s successor to `successor`, replacing any previous one.
    /// Returns `successor` so the result can seed the next call:
    /// `let tail = chain.link(a, b)?; chain.link(tail, c)?;` gives a -> b -> c.
    pub fn link(&mut self, current: HandlerId, successor: HandlerId) -> Result<HandlerId, LinkError> {
        if current.0 >= self.entries.len() || successor.0 >= self.entries.len() {
            return Err(LinkError::UnknownHandler);
        }

        // Walk forward from the proposed successor. If the walk comes back to
        // `current`, the new link would close a loop and dispatch could never
        // terminate.
        let mut cursor = Some(successor.0);
        while let Some(index) = cursor {
            if index == current.0 {
                return Err(LinkError::CyclicLink {
                    current: self.entries[current.0].handler.name().to_string(),
                    successor: self.entries[successor.0].handler.name().to_string(),
                });
            }
            cursor = self.entries[index].next;
        }

        self.entries[current.0].next = Some(successor.0);
        Ok(successor)
    }

    /// Routes one request through the chain starting at `head`. The first
    /// handler reporting `ACCEPTED` ends the traversal with its saved output;
    /// `PASS` and `DISABLED` advance to the successor. Running off the end is
    /// the `Unhandled` outcome, not an error.
    pub fn dispatch(&self, head: HandlerId, input: I) -> Result<Outcome<O>, DispatchError> {
        if head.0 >= self.entries.len() {
            return Err(DispatchError::UnknownHandler);
        }

        let dispatch_id = Uuid::new_v4();
        let mut exchange = Exchange::new(input);
        let mut cursor = Some(head.0);

        while let Some(index) = cursor {
            let entry = &self.entries[index];
            let name = entry.handler.name();
            debug!("Dispatch {} offers request to '{}'", dispatch_id, name);

            let status = match entry.handler.exec(&mut exchange) {
                Ok(status) => status,
                Err(error) => {
                    return Err(DispatchError::HandlerFailed {
                        handler: name.to_string(),
                        source: error,
                    });
                }
            };

            if status.code().any_flags(Code::ACCEPTED) {
                debug!("Dispatch {} accepted by '{}'", dispatch_id, name);
                return match exchange.consume_output() {
                    Some(output) => Ok(Outcome::Handled(output)),
                    None => Err(DispatchError::MissingOutput {
                        handler: name.to_string(),
                    }),
                };
            }

            if status.code().any_flags(Code::DISABLED) {
                debug!("Dispatch {} skips disabled '{}'", dispatch_id, name);
            }

            cursor = entry.next;
        }

        debug!("Dispatch {} ran off the end of the chain", dispatch_id);
        Ok(Outcome::Unhandled)
    }

    pub fn handler_name(&self, id: HandlerId) -> Option<&str> {
        self.entries.get(id.0).map(|entry| entry.handler.name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I, O> Default for Chain<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum LinkError {
    CyclicLink { current: String, successor: String },
    UnknownHandler,
}

impl Display for LinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkError::CyclicLink { current, successor } => write!(
                f,
                "[LinkError] Linking '{}' to '{}' would close a loop.",
                current, successor
            ),
            LinkError::UnknownHandler => {
                write!(f, "[LinkError] Handler id does not belong to this chain.")
            }
        }
    }
}

impl std::error::Error for LinkError {}

#[derive(Debug)]
pub enum DispatchError {
    /// A handler's own acceptance logic failed. Distinct from `Unhandled`.
    HandlerFailed {
        handler: String,
        source: HandlerExecutionError,
    },
    MissingOutput { handler: String },
    UnknownHandler,
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::HandlerFailed { handler, source } => {
                write!(f, "[DispatchError] Handler '{}' failed: {}", handler, source)
            }
            DispatchError::MissingOutput { handler } => write!(
                f,
                "[DispatchError] Handler '{}' accepted the request but saved no output.",
                handler
            ),
            DispatchError::UnknownHandler => {
                write!(f, "[DispatchError] Head id does not belong to this chain.")
            }
        }
    }
}

impl std::error::Error for DispatchError {}
