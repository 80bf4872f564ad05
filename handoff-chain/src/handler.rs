use crate::HandlerOutput;
use crate::exchange::Exchange;

/// One node's matching logic. The chain owns all forwarding; implementations
/// never call their successor.
pub trait Handler<I, O>: Send + Sync {
    /// Tag set at construction; log lines and error reports use it.
    fn name(&self) -> &str;

    fn exec(&self, exchange: &mut Exchange<I, O>) -> HandlerOutput;
}
