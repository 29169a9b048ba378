pub mod health;
pub mod sales;
