//! # andresromero.dev
//!
//! Personal portfolio site server: a landing page, a uses page, and an
//! on-demand social-preview image endpoint, all in one self-contained
//! binary.
//!
//! # Architecture
//!
//! The only piece with a real contract is the preview endpoint:
//!
//! ```text
//! GET /og?title=…  →  effective_title  →  render_card  →  PNG bytes
//!                     (default when       (1200×630,
//!                      absent/empty)       fixed layout)
//! ```
//!
//! Everything else is presentational: compile-time HTML templates served
//! over a three-route axum router.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`og`] | Preview cards — typesetting, canvas composition, PNG encoding |
//! | [`pages`] | Maud templates for the landing, uses, and 404 pages |
//! | [`server`] | axum router, handlers, bind/serve loop |
//! | [`config`] | Optional `config.toml` loading and validation |
//! | [`logging`] | Tracing subscriber setup for serve mode |
//!
//! # Design Decisions
//!
//! ## Deterministic Preview Cards
//!
//! The card renderer registers exactly one font face, compiled into the
//! binary, and never touches system font discovery. Combined with a fixed
//! layout and PNG output, two requests with the same title produce
//! byte-identical responses on any host — which is what lets `/og` carry a
//! year-long `Cache-Control` header.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, interpolation is auto-escaped, and there is no
//! template directory to ship or get out of sync.
//!
//! ## Stateless Handlers
//!
//! Requests share only the immutable config. The preview renderer builds
//! its typesetter per invocation rather than guarding a shared one with a
//! lock; the work is CPU-bound and bounded, and the handler stays safe for
//! arbitrarily many concurrent requests with no coordination.
//!
//! ## Pure-Rust Imaging
//!
//! Text shaping and rasterization use `cosmic-text`, pixel work and PNG
//! encoding use the `image` crate — no system libraries, no font packages
//! to install. The binary runs anywhere.

pub mod config;
pub mod logging;
pub mod og;
pub mod pages;
pub mod server;
