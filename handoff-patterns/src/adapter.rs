/// The call surface the client code was written against.
pub trait Quacks {
    fn quack(&self) -> String;
    fn fly(&self) -> String;
}

pub struct Duck;

impl Quacks for Duck {
    fn quack(&self) -> String {
        "quack quack".to_string()
    }

    fn fly(&self) -> String {
        "im flying".to_string()
    }
}

/// Does the same job as a duck but with an incompatible surface.
pub struct Turkey;

impl Turkey {
    pub fn growl(&self) -> String {
        "growling".to_string()
    }

    pub fn fly(&self) -> String {
        "i can fly only a short distance".to_string()
    }
}

/// Wraps a turkey so it can stand wherever a `Quacks` is expected.
pub struct TurkeyAdapter {
    adaptee: Turkey,
}

impl TurkeyAdapter {
    pub fn new(adaptee: Turkey) -> Self {
        Self { adaptee }
    }
}

impl Quacks for TurkeyAdapter {
    fn quack(&self) -> String {
        self.adaptee.growl()
    }

    fn fly(&self) -> String {
        self.adaptee.fly()
    }
}

pub fn duck_interaction(duck: &dyn Quacks) -> Vec<String> {
    vec![duck.quack(), duck.fly()]
}
