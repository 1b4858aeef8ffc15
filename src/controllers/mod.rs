pub mod admin;
pub mod contact;
pub mod health;
pub mod pricing;
pub mod quote;
pub mod talent;
