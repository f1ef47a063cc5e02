//! Event system for decoupled inter-module communication.
//!
//! A simple publish/subscribe mechanism on `std::sync::mpsc`. The tick
//! thread and the command reader publish; the main loop receives and
//! handles everything on one thread.
//!
//! ```text
//! ┌─────────────┐                         ┌────────────────┐
//! │ Tick thread │                         │ Command reader │
//! └──────┬──────┘                         └───────┬────────┘
//!        │ publish()                              │ publish()
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ recv() / drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     Main loop                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
