use std::error::Error;

use handoff_chain::chain::{Chain, HandlerId, Outcome};
use handoff_chain::factory::HandlerFactory;
use handoff_config::config::ProviderType;
use handoff_config::config_cache::get_config_file;
use handoff_config::flow_config::{FlowConfig, ScenarioConfig};
use handoff_patterns::adapter::{Duck, Turkey, TurkeyAdapter, duck_interaction};
use handoff_patterns::builder::ConnectionBuilder;
use handoff_patterns::feeders::FeederFactory;
use handoff_patterns::observer::{Account, Feed};
use handoff_patterns::repository::{InMemoryProductRepository, Product, ProductRepository};
use handoff_patterns::singleton;
use handoff_patterns::state::Document;
use handoff_patterns::strategy::{PremiumDiscount, ShoppingCart, StandardDiscount};
use handoff_patterns::template::{FileReport, Report};
use tracing::info;

use crate::ROOT_CONFIG_PATH;

pub fn run() -> Result<(), Box<dyn Error>> {
    run_feeding_scenarios()?;
    run_adapter_demo();
    run_builder_demo()?;
    run_observer_demo();
    run_repository_demo()?;
    run_singleton_demo();
    run_state_demo();
    run_strategy_demo();
    run_template_demo()?;
    Ok(())
}

fn run_feeding_scenarios() -> Result<(), Box<dyn Error>> {
    let flow_file = get_config_file(&format!("{}/{}", ROOT_CONFIG_PATH, "flow.json"))?;
    let flow_config: FlowConfig = serde_json::from_str(&flow_file)?;
    info!("Loaded flow config with {} scenario(s)", flow_config.scenarios.len());

    for scenario in &flow_config.scenarios {
        run_scenario(&flow_config, scenario)?;
    }
    Ok(())
}

fn run_scenario(
    flow_config: &FlowConfig,
    scenario: &ScenarioConfig,
) -> Result<(), Box<dyn Error>> {
    println!("==== {} ====", scenario.name);

    let mut chain: Chain<String, String> = Chain::new();
    let mut first: Option<HandlerId> = None;
    let mut previous: Option<HandlerId> = None;
    let mut head_override: Option<HandlerId> = None;

    // Resolve handler names through the factory and link them in config
    // order.
    for handler_name in flow_config.expand(&scenario.exec) {
        let handler = FeederFactory::create_handler(handler_name, ProviderType::File)?;
        let id = chain.register(handler);
        if first.is_none() {
            first = Some(id);
        }
        if scenario.head.as_deref() == Some(handler_name) {
            head_override = Some(id);
        }
        if let Some(previous) = previous {
            chain.link(previous, id)?;
        }
        previous = Some(id);
    }

    let first = match first {
        Some(first) => first,
        None => return Err(format!("Scenario '{}' names no handlers", scenario.name).into()),
    };
    let head = match (head_override, &scenario.head) {
        (Some(head), _) => head,
        (None, Some(name)) => {
            return Err(format!(
                "Scenario '{}' starts from '{}', which is not among its handlers",
                scenario.name, name
            )
            .into());
        }
        (None, None) => first,
    };
    if let Some(name) = chain.handler_name(head) {
        info!("Dispatching scenario '{}' from '{}'", scenario.name, name);
    }

    for request in &scenario.requests {
        println!("Who wants {}", request);
        match chain.dispatch(head, request.clone())? {
            Outcome::Handled(line) => println!("{}", line),
            Outcome::Unhandled => println!("{} left untouched", request),
        }
    }
    Ok(())
}

fn run_adapter_demo() {
    println!("==== adapter ====");
    for line in duck_interaction(&Duck) {
        println!("{}", line);
    }
    let adapter = TurkeyAdapter::new(Turkey);
    for line in duck_interaction(&adapter) {
        println!("{}", line);
    }
}

fn run_builder_demo() -> Result<(), Box<dyn Error>> {
    println!("==== builder ====");
    let custom = ConnectionBuilder::new("api.service.com")
        .set_port(443)
        .set_timeout(60)
        .enable_tls()
        .build()?;
    println!("Custom connection: {:?}", custom);

    let defaults = ConnectionBuilder::new("localhost").build()?;
    println!("Default connection: {:?}", defaults);
    Ok(())
}

fn run_observer_demo() {
    println!("==== observer ====");
    let alice = Account::new("Alice");
    let hatter = Account::new("Mad Hatter");
    let cat = Account::new("Cheshire Cat");

    let mut feed = Feed::new("Queen");
    feed.add_observer(alice.clone());
    feed.add_observer(hatter.clone());
    feed.add_observer(cat.clone());
    feed.notify_observers("Off with their heads!");

    feed.delete_observer("Cheshire Cat");
    feed.notify_observers("Where is my pudding?");

    for account in [&alice, &hatter, &cat] {
        for line in account.received() {
            println!("{}", line);
        }
    }
}

fn run_repository_demo() -> Result<(), Box<dyn Error>> {
    println!("==== repository ====");
    let mut repo = InMemoryProductRepository::new();
    let id = repo.save(Product {
        id: 0,
        name: "Laptop".to_string(),
        price: 1200.00,
    });
    println!("Saved product with ID {}", id);

    let mut stored = repo.find_by_id(id)?;
    println!("Found: {:?}", stored);

    stored.price = 1150.00;
    repo.update(stored)?;
    println!("Updated price: {:.2}", repo.find_by_id(id)?.price);
    Ok(())
}

fn run_singleton_demo() {
    println!("==== singleton ====");
    let first = singleton::instance();
    let second = singleton::instance();
    println!("first call:  {}", first.id());
    println!("second call: {}", second.id());
}

fn run_state_demo() {
    println!("==== state ====");
    let mut document = Document::new("My new article content.");
    println!("Initial state: {}", document.state_name());
    println!("{}", document.publish());
    println!("{}", document.request_review());
    println!("{}", document.publish());
    println!("{}", document.request_review());
    println!("Final state: {}", document.state_name());
}

fn run_strategy_demo() {
    println!("==== strategy ====");
    let mut cart = ShoppingCart::new(StandardDiscount);
    cart.add_item(100.0);
    cart.add_item(50.0);
    println!("Total items cost: ${:.2}", cart.total());
    println!("Final bill after discount: ${:.2}", cart.checkout());

    cart.set_strategy(PremiumDiscount);
    cart.add_item(20.0);
    println!("Total items cost: ${:.2}", cart.total());
    println!("Final bill after discount: ${:.2}", cart.checkout());
}

fn run_template_demo() -> Result<(), Box<dyn Error>> {
    println!("==== template ====");
    let report = FileReport::new(format!("{}/{}", ROOT_CONFIG_PATH, "flow.json"));
    println!("flow.json measures {} bytes", report.run()?);
    Ok(())
}
