//! Server-side modules (SSR feature only)

pub mod ui;
