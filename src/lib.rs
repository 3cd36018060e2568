//! In-page behavior patch for web views embedded in a native desktop host.
//!
//! This crate is compiled to WebAssembly and injected into the page by the
//! host. It does two things: every pointer-lock request made by the page asks
//! for unadjusted (raw) mouse movement, and the fullscreen hotkey (F11) is
//! redirected to the host as a `"toggle_fullscreen"` message instead of being
//! handled by the browser.
//!
//! The logic lives in browser-free modules so it can be tested on the host
//! target; [`web`] binds it to the live DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | Pointer-lock options bag and the unadjusted-movement override |
//! | [`capability`] | The pointer-lock seam, the [`capability::RawMovement`] decorator and its provider |
//! | [`lifecycle`] | One-shot install guard |
//! | [`bridge`] | Hotkey matching and the outbound host channel |
//! | [`config`] | Host-supplied configuration |
//! | [`error`] | Crate error type |
//! | [`web`] | `wasm-bindgen` entry points and DOM wiring |

pub mod bridge;
pub mod capability;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod options;
pub mod web;

pub use error::ShimError;
