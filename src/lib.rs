//! Flipswitch - an undoable light switch.
//!
//! A [`Switch`](commands::Switch) executes [`Command`](commands::Command)s
//! against a [`Light`](light::Light) and keeps a history so the most recent
//! flip can be undone. The [`App`](app::App) drives it from an interactive
//! prompt.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod light;
pub mod logging;
