use serde::Deserialize;

#[derive(Deserialize)]
pub struct BirdHandlerConfig {
    pub enabled: bool,
    pub name: String,
    pub food: String,
}

impl Default for BirdHandlerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Bird".into(),
            food: "seeds".into(),
        }
    }
}
