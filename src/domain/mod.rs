pub mod admin;
pub mod auth;
pub mod contact;
pub mod pricing;
pub mod quote;
pub mod shared;
pub mod talent;
