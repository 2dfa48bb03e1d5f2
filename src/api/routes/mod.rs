//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod layout;
pub mod render;
pub mod uploads;
