//! choreo-api-core: the stage surface shared by the animation engine and hosts
//! (core, engine-agnostic)

pub mod selector;
pub mod stage;
pub mod style;

pub use selector::{Selector, SelectorError};
pub use stage::{Stage, TargetHandle, TargetRef, TimerId, WatchId};
pub use style::{StyleValue, StyleValueKind};
