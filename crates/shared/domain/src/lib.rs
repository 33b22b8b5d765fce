//! # Domain Models
//!
//! This crate contains the configuration model of the identity server with a single
//! dependency (`serde`). Keep it lean: no I/O, no file or environment binding, no validation.
//! Binding lives in `sts-kernel`; consumers depend on the [`config::RootConfig`] contract.

pub mod config;
