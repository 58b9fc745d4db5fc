//! # rfx-round — ReelFlex Round Engine
//!
//! Deterministic round engine for the three-reel reflex trainer: reels
//! cycle continuously, the player stops each one individually, and
//! aligning all three values scores points; three mismatches end the
//! session.
//!
//! ## Architecture
//!
//! ```text
//! RoundEngine
//!     │
//!     ├── RoundConfig (spin speed, starting triple, award values)
//!     ├── SymbolSet (fixed 9-glyph wheel)
//!     ├── Paytable (triple awards)
//!     └── ScoreStore (injected high-score persistence)
//!           │
//!           v
//!     RoundResult → Vec<StageEvent>
//! ```
//!
//! The engine is passive: the host schedules the `TickHandle`s it hands
//! out and delivers them back, all on one serial queue with the user's
//! stop actions. Handles are validated at fire time, which is the sole
//! cancellation mechanism.

pub mod config;
pub mod engine;
pub mod paytable;
pub mod reel;
pub mod round;
pub mod scheduler;
pub mod store;
pub mod symbols;
pub mod timing;

pub use config::*;
pub use engine::*;
pub use paytable::*;
pub use reel::*;
pub use round::*;
pub use scheduler::*;
pub use store::*;
pub use symbols::*;
pub use timing::*;
