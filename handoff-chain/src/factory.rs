use handoff_config::config::ProviderType;

/// Creates handlers by name tag, loading each handler's own configuration
/// through the requested provider kind. Implemented once per handler
/// register enum; the driver resolves flow-config names through it.
pub trait HandlerFactory {
    type Err;
    type CreatedHandler;

    fn create_handler(
        name: &str,
        provider_type: ProviderType,
    ) -> Result<Self::CreatedHandler, Self::Err>;
}
