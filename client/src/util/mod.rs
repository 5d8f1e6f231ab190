//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic: storage, clock, geolocation, push SDK and route guards.

pub mod auth;
pub mod browser;
pub mod clock;
pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod js;
pub mod push;
pub mod storage;
