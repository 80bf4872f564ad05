use handoff_chain::HandlerOutput;
use handoff_chain::handler::Handler;
use handoff_chain::status::{Code, HandlerStatus};
use handoff_config::config::Config;

use crate::feeders::FeederExchange;
use crate::feeders::cat::config::CatHandlerConfig;

pub struct CatHandler {
    config: Config<CatHandlerConfig>,
}

impl CatHandler {
    pub fn new(config: Config<CatHandlerConfig>) -> Self {
        Self { config }
    }
}

impl Handler<String, String> for CatHandler {
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
    use handoff_config::config::{Config, DefaultConfigProvider, FileConfigProvider};

    use crate::feeders::FeederExchange;
    use crate::feeders::cat::handler::CatHandler;

    #[test]
    fn test_takes_the_milk() {
        let handler = CatHandler::new(Config::new(DefaultConfigProvider).unwrap());
        let mut exchange = FeederExchange::new("milk".to_string());
        let status = handler.exec(&mut exchange).unwrap();
        assert!(status.code().any_flags(Code::ACCEPTED));
        assert_eq!(exchange.consume_output().unwrap(), "Cat can have the milk");
    }

    #[test]
    fn test_disabled_cat_reports_disabled() {
        let config = Config::new(FileConfigProvider {
            config_name: "cat_disabled.json".into(),
            base_path: "./test".into(),
        })
        .unwrap();
        let handler = CatHandler::new(config);
        let mut exchange = FeederExchange::new("milk".to_string());
        let status = handler.exec(&mut exchange).unwrap();
        assert!(status.code().any_flags(Code::DISABLED));
        assert!(exchange.output().is_none());
    }
}
