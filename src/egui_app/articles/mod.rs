//! Article management
//!
//! The controller that keeps the local article collection in step with the
//! server.

pub mod controller;

pub use controller::ArticleController;
