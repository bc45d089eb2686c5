//! Classification and propagation of failures
//!
//! A failure starts out as a [`Fault::Raw`] value. The layer that detects it
//! classifies it with an [`ErrorKind`](faultline_core::ErrorKind), which
//! captures the call path once; outer layers may re-classify it and add
//! context without losing the original cause. At the boundary,
//! [`Fault::extract`] turns any fault into the [`ClassifiedError`] sent to
//! the client.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod aggregate;
mod causal;
mod classified;
mod ext;
mod fault;

pub use aggregate::AggregateError;
pub use causal::CausalError;
pub use classified::ClassifiedError;
pub use ext::ResultExt;
pub use fault::Fault;
pub use faultline_core::{ErrorKind, HttpError, translate};
