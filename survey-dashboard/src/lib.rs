//! Browser controller for the survey dashboard page. Everything outside
//! `web` and `bridge` is plain Rust behind the traits in `host`, so the
//! page behavior runs under native tests.

pub mod chart_config;
pub mod controller;
pub mod dto;
pub mod error;
pub mod host;
pub mod reveal;
pub mod scroll;
pub mod submit;
pub mod tooltip;

#[cfg(target_arch = "wasm32")]
mod bridge;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod testing;
