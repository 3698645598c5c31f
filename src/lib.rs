//! Weather tiles for the terminal - fetch, classify, render.
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod classify;
pub mod components;
pub mod effect;
pub mod reducer;
pub mod state;
