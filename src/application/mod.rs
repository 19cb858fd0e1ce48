//! Application services orchestrating domain logic over the store.

pub mod services;
