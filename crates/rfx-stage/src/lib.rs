//! # rfx-stage — ReelFlex Stage System
//!
//! Defines the canonical round phases of a reflex-reel game.
//! The presentation layer never understands engine internals — only STAGES.
//!
//! ## Philosophy
//!
//! Every round of a reflex-reel game passes through the same semantic phases:
//! - Round starts → Reels stop one by one → Round evaluated → Won/Lost → (Game over)
//!
//! This crate defines these phases and the event/trace types built on them.

pub mod event;
pub mod stage;
pub mod taxonomy;
pub mod trace;

pub use event::*;
pub use stage::*;
pub use taxonomy::*;
pub use trace::*;
