//! Core components of the bot.
//!
//! This module contains the foundational building blocks:
//! - The provider client ([`XueqiuClient`]) and its builder.
//! - The primary [`BotError`] type.
//! - Startup [`Config`] resolved from the environment.

/// The provider client (`XueqiuClient`), builder, and session handling.
pub mod client;
/// Startup configuration resolved once and passed explicitly.
pub mod config;
/// The primary error type (`BotError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::XueqiuClient`
pub use client::{XueqiuClient, XueqiuClientBuilder};
pub use config::Config;
pub use error::BotError;
