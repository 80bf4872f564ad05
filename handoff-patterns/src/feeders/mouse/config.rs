use serde::Deserialize;

#[derive(Deserialize)]
pub struct MouseHandlerConfig {
    pub enabled: bool,
    pub name: String,
    pub food: String,
}

impl Default for MouseHandlerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Mouse".into(),
            food: "cake".into(),
        }
    }
}
