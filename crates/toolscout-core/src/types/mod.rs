//! Core types for the tool catalog
//!
//! This module contains the shared record types used across the engine
//! and catalog sources.

mod category;
mod review;
mod tool;

pub use category::Category;
pub use review::Review;
pub use tool::{PricingTier, Tool, ToolId};
