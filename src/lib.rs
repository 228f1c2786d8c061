//! Editing core for a browser-based 2D scene editor.
//!
//! Users drag assets and text boxes from a library onto an infinite canvas,
//! then move, rotate, scale, and delete them, pan and zoom the view, and
//! export or import the scene as JSON. This crate is compiled to WebAssembly
//! and owns all of the state and math: coordinate transforms between screen
//! and world space, per-item transforms, the one-gesture-at-a-time pointer
//! state machine, and the scene store. The host page renders items as DOM
//! elements and applies the [`engine::Action`]s returned by each call.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EditorCore`] and the [`engine::Action`] effects it returns |
//! | [`web`] | `wasm-bindgen` wrapper the host page talks to |
//! | [`doc`] | Items and the ordered, single-selection scene store |
//! | [`view`] | Pan/zoom view and screen/world conversion |
//! | [`transform`] | Per-item translate/rotate/scale, snapping, pivot geometry |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing item bodies and selection handles |
//! | [`document`] | JSON export/import of the scene |
//! | [`catalog`] | Asset library listing |
//! | [`config`] | Host-supplied editor configuration |
//! | [`consts`] | Shared numeric constants (zoom limits, default sizes, handle radii) |

pub mod catalog;
pub mod config;
pub mod consts;
pub mod doc;
pub mod document;
pub mod engine;
pub mod hit;
pub mod input;
pub mod transform;
pub mod view;
pub mod web;
