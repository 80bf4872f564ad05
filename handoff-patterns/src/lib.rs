pub mod adapter;
pub mod builder;
pub mod feeders;
pub mod observer;
pub mod repository;
pub mod singleton;
pub mod state;
pub mod strategy;
pub mod template;
