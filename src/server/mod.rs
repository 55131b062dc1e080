//! Server-side pieces of the client app (ssr feature only).

pub mod edge;
