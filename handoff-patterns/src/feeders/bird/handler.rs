use handoff_chain::HandlerOutput;
use handoff_chain::handler::Handler;
use handoff_chain::status::{Code, HandlerStatus};
use handoff_config::config::Config;

use crate::feeders::FeederExchange;
use crate::feeders::bird::config::BirdHandlerConfig;

pub struct BirdHandler {
    config: Config<BirdHandlerConfig>,
}

impl BirdHandler {
    pub fn new(config: Config<BirdHandlerConfig>) -> Self {
        Self { config }
    }
}

impl Handler<String, String> for BirdHandler {
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

#[cfg(test)]
mod test {
    use handoff_chain::handler::Handler;
    use handoff_chain::status::Code;
    use handoff_config::config::{Config, FileConfigProvider};

    use crate::feeders::FeederExchange;
    use crate::feeders::bird::handler::BirdHandler;

    // A file config can swap the accepted food without touching the handler.
    #[test]
    fn test_configured_food_overrides_default() {
        let config = Config::new(FileConfigProvider {
            config_name: "bird_millet.json".into(),
            base_path: "./test".into(),
        })
        .unwrap();
        let handler = BirdHandler::new(config);

        let mut exchange = FeederExchange::new("seeds".to_string());
        let status = handler.exec(&mut exchange).unwrap();
        assert!(status.code().any_flags(Code::PASS));

        let mut exchange = FeederExchange::new("millet".to_string());
        let status = handler.exec(&mut exchange).unwrap();
        assert!(status.code().any_flags(Code::ACCEPTED));
        assert_eq!(
            exchange.consume_output().unwrap(),
            "Bird can have the millet"
        );
    }
}
