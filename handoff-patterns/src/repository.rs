use std::collections::HashMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Zero means "not stored yet"; `save` assigns the real id.
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// Data-access contract the domain code is written against. Swapping the
/// storage behind it never touches the callers.
pub trait ProductRepository {
    fn save(&mut self, product: Product) -> u64;
    fn find_by_id(&self, id: u64) -> Result<Product, ProductNotFoundError>;
    fn update(&mut self, product: Product) -> Result<(), ProductNotFoundError>;
    fn delete(&mut self, id: u64) -> Result<(), ProductNotFoundError>;
}

pub struct InMemoryProductRepository {
    data: HashMap<u64, Product>,
    next_id: u64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn save(&mut self, mut product: Product) -> u64 {
        if product.id == 0 {
            product.id = self.next_id;
            self.next_id += 1;
        }
        let id = product.id;
        self.data.insert(id, product);
        id
    }

    fn find_by_id(&self, id: u64) -> Result<Product, ProductNotFoundError> {
        self.data.get(&id).cloned().ok_or(ProductNotFoundError { id })
    }

    fn update(&mut self, product: Product) -> Result<(), ProductNotFoundError> {
        if !self.data.contains_key(&product.id) {
            return Err(ProductNotFoundError { id: product.id });
        }
        self.data.insert(product.id, product);
        Ok(())
    }

    fn delete(&mut self, id: u64) -> Result<(), ProductNotFoundError> {
        match self.data.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ProductNotFoundError { id }),
        }
    }
}

#[derive(Debug)]
pub struct ProductNotFoundError {
    pub id: u64,
}

impl Display for ProductNotFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ProductNotFoundError] Product not found with ID: {}", self.id)
    }
}

impl std::error::Error for ProductNotFoundError {}
