//! Platform-independent core for the Smart Learn catalog browser.
//!
//! Holds the static e-book catalog, the pure filter engine, the paged
//! viewer state machine, and the screen/navigation state machine that a
//! platform shell drives with [`input::InputEvent`]s and renders from
//! [`render::Screen`] view models. No I/O happens in this crate.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod catalog;
pub mod filter;
pub mod input;
pub mod render;
pub mod settings;
pub mod text_policy;
pub mod viewer;
