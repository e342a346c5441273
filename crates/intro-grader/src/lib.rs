//! Core library for the self-introduction grading service.
//!
//! The `grading` module holds the rubric pipeline; `nlp` defines the
//! collaborator seams (tokenizers, embedding encoder, grammar checker,
//! sentiment scorer) the pipeline is handed at startup.

pub mod config;
pub mod error;
pub mod grading;
pub mod nlp;
pub mod telemetry;
