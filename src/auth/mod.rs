//! OAuth completion flow.

pub mod callback;
