//! Palabrle
//!
//! A Spanish five-letter word game with accent-aware scoring and keyboard hints.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palabrle::core::{Feedback, Word};
//!
//! let guess = Word::new("tenue").unwrap();
//! let secret = Word::new("césar").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &secret);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types and scoring
pub mod core;

// Round state
pub mod game;

// On-screen keyboard layout
pub mod keyboard;

// Word lists
pub mod wordlists;

// Win/loss persistence
pub mod stats;

// Runtime configuration and logging
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
