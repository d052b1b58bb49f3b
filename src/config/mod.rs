//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FaucetConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The signing key is NOT part of the config file; it comes from the
//!   `FAUCET_PRIVATE_KEY` environment variable only

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::FaucetConfig;
pub use schema::BlockchainConfig;
pub use schema::DispenseConfig;
pub use schema::StoreConfig;
