use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level description of what the demo driver should assemble and run.
/// `handlers` lists every handler name the factory is expected to know,
/// `chains` are reusable ordered sequences of handler names, and each
/// scenario says which chain(s) to link and which requests to feed in.
#[derive(Deserialize, Serialize, Debug)]
pub struct FlowConfig {
    pub handlers: Vec<String>,
    pub chains: HashMap<String, Vec<String>>,
    pub scenarios: Vec<ScenarioConfig>,
}

/// Entries in `exec` can name either a chain or a single handler; chains are
/// expanded in place, in order.
#[derive(Deserialize, Serialize, Debug)]
pub struct ScenarioConfig {
    pub name: String,
    /// Handler to start dispatch from. Defaults to the first linked handler.
    pub head: Option<String>,
    pub exec: Vec<String>,
    pub requests: Vec<String>,
}

impl FlowConfig {
    /// Flattens an `exec` list into plain handler names, substituting chain
    /// names with their configured sequence.
    pub fn expand<'a>(&'a self, exec: &'a [String]) -> Vec<&'a str> {
        let mut resolved = Vec::new();
        for entry in exec {
            if let Some(chain) = self.chains.get(entry) {
                for handler_name in chain {
                    resolved.push(handler_name.as_str());
                }
            } else {
                resolved.push(entry.as_str());
            }
        }
        resolved
    }
}

#[cfg(test)]
mod test {
    use crate::flow_config::FlowConfig;

    #[test]
    fn test_read_flow_config() {
        let test_config_string = r#"
        {
            "handlers": [
                "MonkeyHandler",
                "CatHandler",
                "BirdHandler",
                "MouseHandler"
            ],
            "chains": {
                "feeding-line": [
                    "MonkeyHandler",
                    "CatHandler",
                    "BirdHandler",
                    "MouseHandler"
                ]
            },
            "scenarios": [
                {
                    "name": "feeding-time",
                    "head": null,
                    "exec": ["feeding-line"],
                    "requests": ["banana", "milk", "cake", "seeds", "water"]
                },
                {
                    "name": "from-the-cat",
                    "head": "CatHandler",
                    "exec": ["feeding-line"],
                    "requests": ["banana", "milk"]
                }
            ]
        }"#;
        let my_config = serde_json::from_str::<FlowConfig>(test_config_string).unwrap();
        assert_eq!(my_config.handlers.len(), 4);
        assert_eq!(my_config.chains.len(), 1);
        assert_eq!(my_config.scenarios.len(), 2);
        assert_eq!(my_config.scenarios[1].head.as_deref(), Some("CatHandler"));
    }

    #[test]
    fn test_expand_mixes_chains_and_handlers() {
        let test_config_string = r#"
        {
            "handlers": ["A", "B", "C"],
            "chains": { "pair": ["A", "B"] },
            "scenarios": [
                {
                    "name": "mixed",
                    "head": null,
                    "exec": ["pair", "C"],
                    "requests": []
                }
            ]
        }"#;
        let my_config = serde_json::from_str::<FlowConfig>(test_config_string).unwrap();
        let resolved = my_config.expand(&my_config.scenarios[0].exec);
        assert_eq!(resolved, vec!["A", "B", "C"]);
    }
}
