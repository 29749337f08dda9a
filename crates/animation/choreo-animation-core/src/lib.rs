//! Choreo Animation Core (engine-agnostic)
//!
//! Staged visual transitions over a tree of render targets. The engine owns
//! an arena of [`AnimationNode`]s; a host implements the
//! [`Stage`](choreo_api_core::Stage) trait and drives one play cycle per root
//! by delivering frames, timer expirations, and transition-end events back
//! into [`Animation`].

pub mod config;
pub mod effects;
pub mod engine;
pub mod ids;
pub mod node;
pub mod options;
pub mod registry;
pub mod style_batch;
pub mod subscribers;
pub mod watcher;

// Re-exports for consumers (hosts and adapters)
pub use config::Config;
pub use effects::{EffectEndpoint, EffectProperty, EffectStore, EndpointKind};
pub use engine::Animation;
pub use ids::{IdAllocator, NodeId};
pub use node::{AfterBuilder, AnimationNode, BeforeBuilder, StageFn};
pub use options::{AnimationOptions, PlayOptions};
pub use registry::{AnimationRegistry, NodeFactory};
pub use style_batch::StyleBatch;
pub use subscribers::{FinishEvent, FinishFn, FinishSubscribers};
pub use watcher::TransitionWatch;
pub use choreo_api_core::{Stage, StyleValue, TargetHandle, TargetRef, TimerId, WatchId};
