pub mod accounts;
pub mod commands;
pub mod config;
pub mod secure_key;
pub mod seeder;

pub use seeder::{SeedError, SeedReport, WhitelistEntry, WhitelistSeeder};
