//! Service layer for business logic.
//!
//! Separates persistence and page transitions from UI handlers so they can be
//! tested without a window.

pub mod navigation_service;
pub mod outfit_store;

pub use outfit_store::OutfitStore;
