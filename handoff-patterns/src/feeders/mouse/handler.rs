use handoff_chain::HandlerOutput;
use handoff_chain::handler::Handler;
use handoff_chain::status::{Code, HandlerStatus};
use handoff_config::config::Config;

use crate::feeders::FeederExchange;
use crate::feeders::mouse::config::MouseHandlerConfig;

pub struct MouseHandler {
    config: Config<MouseHandlerConfig>,
}

impl MouseHandler {
    pub fn new(config: Config<MouseHandlerConfig>) -> Self {
        Self { config }
    }
}

impl Handler<String, String> for MouseHandler {
    fn name(&self) -> &str {
        &self.config.get().name
    }

    fn exec(&self, exchange: &mut FeederExchange) -> HandlerOutput {
        let config = self.config.get();
        if !config.enabled {
            return Ok(HandlerStatus::new(Code::DISABLED));
        }
        if exchange.input() == &config.food {
            exchange.save_output(format!("{} can have the {}", config.name, config.food));
            return Ok(HandlerStatus::new(Code::ACCEPTED));
        }
        Ok(HandlerStatus::new(Code::PASS))
    }
}
