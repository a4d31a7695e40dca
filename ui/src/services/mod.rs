//! Infrastructure Services
//!
//! - **wallet**: connected account and chain from the injected browser wallet
//! - **backend**: LP inventory, approvals and migration calls behind a trait
//! - **config**: per-chain migrator addresses and sandbox tuning
//! - **errors**: wallet and backend error types
//!
//! The services are designed to be WASM-first, using browser APIs and async traits
//! without Send/Sync bounds for compatibility.

pub mod backend;
pub mod config;
pub mod errors;
pub mod wallet;

use std::rc::Rc;

use backend::MigrationBackend;
use config::MigrateConfig;
use wallet::WalletProvider;

/// Everything the page talks to, shared through the Dioxus context
#[derive(Clone)]
pub struct MigrateServices {
    pub wallet: Rc<dyn WalletProvider>,
    pub backend: Rc<dyn MigrationBackend>,
    pub config: MigrateConfig,
}

impl MigrateServices {
    pub fn new(
        wallet: Rc<dyn WalletProvider>,
        backend: Rc<dyn MigrationBackend>,
        config: MigrateConfig,
    ) -> Self {
        Self {
            wallet,
            backend,
            config,
        }
    }
}
