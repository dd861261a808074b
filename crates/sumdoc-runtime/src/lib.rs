//! Process runtime for sumdoc.
//!
//! Implements the [`TextGenerator`](sumdoc_core::TextGenerator) port by
//! running `ollama run <model> <prompt>` and collecting its output.

#![deny(unsafe_code)]

mod command;
mod generator;

pub use command::OllamaCommandBuilder;
pub use generator::{OllamaConfig, OllamaGenerator};
