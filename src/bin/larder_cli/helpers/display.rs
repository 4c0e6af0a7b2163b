// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for larder-cli
// ABOUTME: Writes command results to stdout as pretty JSON

use std::io::{self, Write};

use larder::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Print `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Print an error to stderr in the JSON error envelope
pub fn print_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}", response.error.message),
    }
}
