/// State management module
///
/// This module handles all editor state, including:
/// - Shadow parameters and single-field updates (edit.rs)
/// - Shared data structures (data.rs)
/// - The layer collection and active selection (store.rs)
/// - The built-in preset library (presets.rs)

pub mod data;
pub mod edit;
pub mod presets;
pub mod store;

pub use data::{LayerId, ShadowLayer};
pub use edit::{ShadowParams, ShadowUpdate};
pub use presets::PresetLibrary;
pub use store::LayerStore;
