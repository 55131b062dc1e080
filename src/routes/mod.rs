//! Routing: path classification and the edge/in-page authorization gates.

pub mod guard;
