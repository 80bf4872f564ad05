pub mod bird;
pub mod cat;
pub mod monkey;
pub mod mouse;

use std::error::Error;
use std::fmt::{Display, Formatter};

use handoff_chain::HandlerOutput;
use handoff_chain::exchange::Exchange;
use handoff_chain::factory::HandlerFactory;
use handoff_chain::handler::Handler;
use handoff_config::config::{
    Config, ConfigResult, DefaultConfigProvider, FileConfigProvider, ProviderType,
};
use serde::de::DeserializeOwned;

use crate::feeders::bird::handler::BirdHandler;
use crate::feeders::cat::handler::CatHandler;
use crate::feeders::monkey::handler::MonkeyHandler;
use crate::feeders::mouse::handler::MouseHandler;

pub type FeederExchange = Exchange<String, String>;

pub(crate) const CONFIG_BASE_PATH: &str = "./config";

pub enum FeederHandler {
    MonkeyHandler(MonkeyHandler),
    CatHandler(CatHandler),
    BirdHandler(BirdHandler),
    MouseHandler(MouseHandler),
}

impl Handler<String, String> for FeederHandler {
    fn name(&self) -> &str {
        match self {
            FeederHandler::MonkeyHandler(handler) => handler.name(),
            FeederHandler::CatHandler(handler) => handler.name(),
            FeederHandler::BirdHandler(handler) => handler.name(),
            FeederHandler::MouseHandler(handler) => handler.name(),
        }
    }

    fn exec(&self, exchange: &mut FeederExchange) -> HandlerOutput {
        match self {
            FeederHandler::MonkeyHandler(handler) => handler.exec(exchange),
            FeederHandler::CatHandler(handler) => handler.exec(exchange),
            FeederHandler::BirdHandler(handler) => handler.exec(exchange),
            FeederHandler::MouseHandler(handler) => handler.exec(exchange),
        }
    }
}

#[derive(Debug)]
pub struct InvalidHandlerError {
    handler_name: String,
}

impl Display for InvalidHandlerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[InvalidHandlerError] Invalid handler name: {}",
            self.handler_name
        )
    }
}

impl std::error::Error for InvalidHandlerError {}

fn feeder_config<T>(name: &str, provider_type: ProviderType) -> ConfigResult<Config<T>>
where
    T: DeserializeOwned + Default,
{
    match provider_type {
        ProviderType::File => {
            // Config files are keyed by the short name, e.g. "feeders.monkey"
            // loads "monkey.json".
            let short_name = match name.rsplit_once('.') {
                Some((_, short_name)) => short_name,
                None => name,
            };
            Config::new(FileConfigProvider {
                config_name: format!("{}.json", short_name),
                base_path: CONFIG_BASE_PATH.to_string(),
            })
        }
        ProviderType::Default => Config::new(DefaultConfigProvider),
    }
}

pub struct FeederFactory;

impl HandlerFactory for FeederFactory {
    type Err = Box<dyn Error>;
    type CreatedHandler = FeederHandler;

    fn create_handler(
        name: &str,
        provider_type: ProviderType,
    ) -> Result<Self::CreatedHandler, Self::Err> {
        let lowered = name.to_lowercase();
        match lowered.as_str() {
            "feeders.monkey" => Ok(FeederHandler::MonkeyHandler(MonkeyHandler::new(
                feeder_config(&lowered, provider_type)?,
            ))),

            "feeders.cat" => Ok(FeederHandler::CatHandler(CatHandler::new(feeder_config(
                &lowered,
                provider_type,
            )?))),

            "feeders.bird" => Ok(FeederHandler::BirdHandler(BirdHandler::new(feeder_config(
                &lowered,
                provider_type,
            )?))),

            "feeders.mouse" => Ok(FeederHandler::MouseHandler(MouseHandler::new(
                feeder_config(&lowered, provider_type)?,
            ))),

            _ => Err(Box::new(InvalidHandlerError {
                handler_name: name.to_owned(),
            })),
        }
    }
}

#[cfg(test)]
mod test {
    use handoff_chain::chain::{Chain, HandlerId, Outcome};
    use handoff_chain::factory::HandlerFactory;
    use handoff_chain::handler::Handler;
    use handoff_config::config::ProviderType;

    use crate::feeders::FeederFactory;

    fn feeding_chain() -> (Chain<String, String>, [HandlerId; 4]) {
        let mut chain = Chain::new();
        let mut ids = [HandlerId(0); 4];
        for (slot, name) in [
            "feeders.monkey",
            "feeders.cat",
            "feeders.bird",
            "feeders.mouse",
        ]
        .iter()
        .enumerate()
        {
            let handler = FeederFactory::create_handler(name, ProviderType::Default).unwrap();
            ids[slot] = chain.register(handler);
        }
        chain.link(ids[0], ids[1]).unwrap();
        chain.link(ids[1], ids[2]).unwrap();
        chain.link(ids[2], ids[3]).unwrap();
        (chain, ids)
    }

    #[test]
    fn test_factory_builds_named_handlers() {
        let handler = FeederFactory::create_handler("feeders.monkey", ProviderType::Default);
        assert_eq!(handler.unwrap().name(), "Monkey");
        let handler = FeederFactory::create_handler("FEEDERS.MOUSE", ProviderType::Default);
        assert_eq!(handler.unwrap().name(), "Mouse");
    }

    #[test]
    fn test_factory_rejects_unknown_name() {
        let result = FeederFactory::create_handler("feeders.walrus", ProviderType::Default);
        let error = result.err().unwrap();
        assert_eq!(
            error.to_string(),
            "[InvalidHandlerError] Invalid handler name: feeders.walrus"
        );
    }

    #[test]
    fn test_head_takes_its_own_food() {
        let (chain, ids) = feeding_chain();
        let outcome = chain.dispatch(ids[0], "banana".to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Handled("Monkey can have the banana".to_string())
        );
    }

    #[test]
    fn test_request_walks_past_two_feeders() {
        let (chain, ids) = feeding_chain();
        let outcome = chain.dispatch(ids[0], "seeds".to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Handled("Bird can have the seeds".to_string())
        );
    }

    #[test]
    fn test_tail_food_reaches_the_mouse() {
        let (chain, ids) = feeding_chain();
        let outcome = chain.dispatch(ids[0], "cake".to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Handled("Mouse can have the cake".to_string())
        );
    }

    #[test]
    fn test_unclaimed_food_is_unhandled() {
        let (chain, ids) = feeding_chain();
        let outcome = chain.dispatch(ids[0], "water".to_string()).unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
    }

    #[test]
    fn test_dispatch_from_the_cat_skips_the_monkey() {
        let (chain, ids) = feeding_chain();
        let outcome = chain.dispatch(ids[1], "banana".to_string()).unwrap();
        assert_eq!(outcome, Outcome::Unhandled);
        let outcome = chain.dispatch(ids[1], "milk".to_string()).unwrap();
        assert_eq!(
            outcome,
            Outcome::Handled("Cat can have the milk".to_string())
        );
    }
}
