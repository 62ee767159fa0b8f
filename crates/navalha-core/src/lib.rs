//! # navalha-core: Pure Business Logic for Navalha POS
//!
//! This crate is the heart of Navalha POS, a point-of-sale and inventory
//! system for a single small retail business. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Navalha POS Architecture                        │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                     apps/cli (front-end)                      │ │
//! │  │   product ─► sale ─► outflow ─► report ─► backup commands     │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────┐  ┌────────────▼─────────┐  ┌───────────────────┐ │
//! │  │ navalha-db   │  │ ★ navalha-core ★     │  │ navalha-backup    │ │
//! │  │ MySQL, pool, │◄─┤ money, types,        │  │ mysqldump/mysql   │ │
//! │  │ repositories │  │ validation, reports  │  │ subprocess wrapper│ │
//! │  └──────────────┘  │                      │  └───────────────────┘ │
//! │                    │ NO I/O • NO DATABASE │                        │
//! │                    │ PURE FUNCTIONS ONLY  │                        │
//! │                    └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, Outflow, PaymentMethod)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validation`] - Business rule validation
//! - [`report`] - Daily and monthly report computation
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output
//! 2. **Integer money**: all monetary values are cents (i64)
//! 3. **Explicit errors**: typed errors, never strings or panics

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

pub use error::ValidationError;
pub use money::Money;
pub use types::*;
