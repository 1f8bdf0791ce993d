//! Report rendering

pub mod email;

pub use email::{format_usd, render_email};
