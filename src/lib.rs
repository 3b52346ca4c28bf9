//! Peelable sticker widget.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! single sticker on a canvas that the user can peel back by dragging from its
//! right edge. Each frame the sticker is split along a fold line into a front
//! face and a shaded, mirrored rear face. Released stickers ease back to rest;
//! a drag far enough left peels the sticker off and notifies the host, which
//! then shows whatever was underneath.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`host`] | `StickerWidget` and `TiltWidget` JS exports, the animation-frame loop |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`peel`] | Anchor/drag state, interaction phases, and the completion gate |
//! | [`animate`] | Return-to-rest easing |
//! | [`geom`] | Points, fold line derivation, mirror transform, clip quads |
//! | [`paint`] | Declarative per-frame paint operations |
//! | [`render`] | Replays paint operations on a `Canvas2D` context |
//! | [`input`] | Pointer event types and the [`input::Phase`] enum |
//! | [`layout`] | Sizing the surface from the image and the host's width cap |
//! | [`logging`] | Console logging and panic hook for the browser |
//! | [`config`] | Tuning values, overridable from JSON |
//! | [`tilt`] | Alternate swipe-to-tilt presentation |
//! | [`consts`] | Default numeric and color constants |

pub mod animate;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod host;
pub mod input;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod peel;
pub mod render;
pub mod tilt;
