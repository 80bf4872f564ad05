pub trait BillingStrategy {
    fn calculate_bill(&self, amount: f64) -> f64;
}

pub struct StandardDiscount;

impl BillingStrategy for StandardDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount * 0.90
    }
}

pub struct PremiumDiscount;

impl BillingStrategy for PremiumDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount * 0.80
    }
}

pub struct NoDiscount;

impl BillingStrategy for NoDiscount {
    fn calculate_bill(&self, amount: f64) -> f64 {
        amount
    }
}

/// Context carrying the current billing strategy. The strategy can be swapped
/// mid-session without touching the cart contents.
pub struct ShoppingCart {
    strategy: Box<dyn BillingStrategy>,
    items: Vec<f64>,
}

impl ShoppingCart {
    pub fn new(strategy: impl BillingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            items: Vec::new(),
        }
    }

    pub fn set_strategy(&mut self, strategy: impl BillingStrategy + 'static) {
        self.strategy = Box::new(strategy);
    }

    pub fn add_item(&mut self, price: f64) {
        self.items.push(price);
    }

    pub fn total(&self) -> f64 {
        self.items.iter().sum()
    }

    pub fn checkout(&self) -> f64 {
        self.strategy.calculate_bill(self.total())
    }
}
