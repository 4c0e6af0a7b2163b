// ABOUTME: Configuration module for the larder application
// ABOUTME: Combines deployment environment, logging and matching configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! Configuration comes from environment variables only:
//!
//! - **Environment**: deployment mode (`ENVIRONMENT`)
//! - **Logging**: level, format and fields (`RUST_LOG`, `LOG_FORMAT`, ...)
//! - **Matching**: thresholds and ranking limits (`LARDER_*`)

/// Environment-driven application configuration
pub mod environment;

pub use environment::{AppConfig, Environment};
