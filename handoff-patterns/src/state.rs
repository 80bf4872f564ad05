/// One workflow stage. Every action answers with the next state and a line
/// describing what happened; refused transitions answer with the same state.
pub trait DocumentState {
    fn name(&self) -> &'static str;
    fn request_review(&self) -> (Box<dyn DocumentState>, String);
    fn publish(&self) -> (Box<dyn DocumentState>, String);
}

struct Draft;

impl DocumentState for Draft {
    fn name(&self) -> &'static str {
        "Draft"
    }

    fn request_review(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Moderation),
            "Draft: Sending document to moderation.".to_string(),
        )
    }

    fn publish(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Draft),
            "Draft: Cannot publish directly from Draft. Needs review first.".to_string(),
        )
    }
}

struct Moderation;

impl DocumentState for Moderation {
    fn name(&self) -> &'static str {
        "Moderation"
    }

    fn request_review(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Moderation),
            "Moderation: Document is already under review.".to_string(),
        )
    }

    fn publish(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Published),
            "Moderation: Document approved and published.".to_string(),
        )
    }
}

struct Published;

impl DocumentState for Published {
    fn name(&self) -> &'static str {
        "Published"
    }

    fn request_review(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Published),
            "Published: Cannot request review on a Published document.".to_string(),
        )
    }

    fn publish(&self) -> (Box<dyn DocumentState>, String) {
        (
            Box::new(Published),
            "Published: Document is already live.".to_string(),
        )
    }
}

/// The context. Actions are delegated to the current state, which decides
/// both the reply and the state that comes after.
pub struct Document {
    content: String,
    state: Box<dyn DocumentState>,
}

impl Document {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            state: Box::new(Draft),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn request_review(&mut self) -> String {
        let (state, message) = self.state.request_review();
        self.state = state;
        message
    }

    pub fn publish(&mut self) -> String {
        let (state, message) = self.state.publish();
        self.state = state;
        message
    }
}
