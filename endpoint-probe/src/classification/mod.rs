//! Outcome classification - pure mapping from probe results to report rows
//!
//! Every probe ends either with an HTTP status or a transport error. This
//! module folds both into the closed [`OutcomeKind`] taxonomy plus a short
//! detail string, without any presentation concerns.

pub mod classifier;
pub mod kind;

pub use classifier::{classify, classify_error, classify_status, TIMEOUT_DETAIL};
pub use kind::OutcomeKind;
