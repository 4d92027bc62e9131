//! secret-hub - Manage GitHub Actions repository secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── list          # list-secrets
//! │   ├── bulk          # bulk-add-secrets
//! │   ├── delete        # delete-secret
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── api/          # GitHub secrets API (trait + reqwest client)
//!     ├── cipher/       # Sealed-box encryption
//!     ├── config        # Token, endpoint and timeout resolution
//!     ├── domain/       # Repository, credential, key, batch, outcome types
//!     ├── provision     # Batch provisioning
//!     └── validation    # Secret name and repository checks
//! ```
//!
//! # Flow
//!
//! A provisioning run fetches the repository public key once, seals every
//! value against it with a fresh ephemeral key, and submits the ciphertexts
//! tagged with the key id. Listing and deleting go straight to the API client.

pub mod cli;
pub mod core;
pub mod error;
