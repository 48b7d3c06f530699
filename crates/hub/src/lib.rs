// Copyright (C) 2025 The rankcast authors.
// SPDX-License-Identifier: Apache-2.0

//! Rankcast evaluation broadcast hub.
//!
//! A websocket server that evaluates 7 cards hands and fans the results
//! out to every connected client. Each connection owns its own session
//! deck, there is no state shared between sessions beyond the client
//! registry used for broadcasting.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hub;
pub mod message;
pub mod server;

pub use server::Config;
