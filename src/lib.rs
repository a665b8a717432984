//! Rig Picker Core Library
//!
//! This library provides the core of an in-application picker authoring
//! tool for 3D animation hosts: typed button entities with JSON
//! persistence, named picker documents, hierarchical organization, and
//! grouped undo/redo layered onto the host's own undo system. Rendering,
//! dialogs, and other widget plumbing live in the embedding application
//! and talk to this crate through [`controller::PickerController`] and
//! the [`scene::SceneHost`] contract.

// Module declarations
pub mod config;
pub mod constants;
pub mod controller;
pub mod history;
pub mod hotkeys;
pub mod mirror;
pub mod models;
pub mod scene;
pub mod services;
