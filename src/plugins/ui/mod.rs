//! Screen-space UI (render-only).

pub mod health_bar;
