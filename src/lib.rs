mod client;

pub mod cache;
pub mod config;
pub mod credential;
pub mod errors;
pub mod fetcher;
pub mod query;
pub mod telemetry;

pub use client::FotmobClient;
pub use config::{Config, ConfigLocation, read_config};
pub use credential::Credential;
pub use errors::Error;
pub use query::{LeagueQuery, LeagueTab, MatchDetailsQuery};

#[cfg(test)]
mod tests;
