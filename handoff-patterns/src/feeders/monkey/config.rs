use serde::Deserialize;

#[derive(Deserialize)]
pub struct MonkeyHandlerConfig {
    pub enabled: bool,
    pub name: String,
    pub food: String,
}

impl Default for MonkeyHandlerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Monkey".into(),
            food: "banana".into(),
        }
    }
}
