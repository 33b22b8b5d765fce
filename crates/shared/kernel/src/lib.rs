//! Kernel utilities shared by the identity server crates.
//! Keep this crate lightweight; it binds configuration sources onto the domain models and
//! re-exports them.
//!
//! ## Config loading
//! ```rust
//! use sts_kernel::config::ConfigLoader;
//! use sts_kernel::domain::config::{RootConfig, RootConfiguration};
//!
//! let cfg: RootConfiguration =
//!     ConfigLoader::new().env_source(Vec::<(String, String)>::new()).load().unwrap();
//! assert!(cfg.register_configuration().enabled);
//! ```

pub mod config;

pub use sts_domain as domain;
