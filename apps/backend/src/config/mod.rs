pub mod app;

pub use app::{CardSourceConfig, Config, GameSettings};
