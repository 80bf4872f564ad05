use std::sync::{Arc, Mutex};

pub trait Observer {
    /// Tag used when removing an observer from a feed.
    fn name(&self) -> &str;

    fn update(&self, author: &str, post: &str);
}

/// One author's publishing side. Holds the subscriber list; authors never see
/// who follows them beyond this feed.
pub struct Feed {
    author: String,
    observers: Vec<Arc<dyn Observer>>,
}

impl Feed {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            observers: Vec::new(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn delete_observer(&mut self, name: &str) {
        self.observers.retain(|observer| observer.name() != name);
    }

    pub fn notify_observers(&self, post: &str) {
        for observer in &self.observers {
            observer.update(&self.author, post);
        }
    }
}

/// A follower collecting every line it was notified about.
pub struct Account {
    name: String,
    inbox: Mutex<Vec<String>>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            inbox: Mutex::new(Vec::new()),
        })
    }

    pub fn received(&self) -> Vec<String> {
        self.inbox.lock().unwrap().clone()
    }
}

impl Observer for Account {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, author: &str, post: &str) {
        self.inbox.lock().unwrap().push(format!(
            "{} received a post from {}: {}",
            self.name, author, post
        ));
    }
}
