use serde::Deserialize;

#[derive(Deserialize)]
pub struct CatHandlerConfig {
    pub enabled: bool,
    pub name: String,
    pub food: String,
}

impl Default for CatHandlerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: "Cat".into(),
            food: "milk".into(),
        }
    }
}
