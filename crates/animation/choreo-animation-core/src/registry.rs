//! Name-to-factory lookup for node variants.
//!
//! A registry is caller-owned, not process-wide: whoever composes trees also
//! owns the map, so registration order is local to that owner and tests never
//! see each other's entries. Looking up an unregistered name is not an error;
//! it falls back to a plain base node seeded from the creation options.

use crate::engine::Animation;
use crate::ids::NodeId;
use crate::options::AnimationOptions;
use hashbrown::HashMap;
use std::fmt;

/// Builds one node variant inside the given engine.
pub type NodeFactory = Box<dyn Fn(&mut Animation, &AnimationOptions) -> NodeId>;

#[derive(Default)]
pub struct AnimationRegistry {
    factories: HashMap<String, NodeFactory>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a name. The last registration for a name wins.
    pub fn register(&mut self, name: &str, factory: NodeFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    /// Instantiate the variant registered under `name`, or a base node when
    /// the name is unknown.
    pub fn create(&self, anim: &mut Animation, name: &str, opts: AnimationOptions) -> NodeId {
        match self.factories.get(name) {
            Some(factory) => factory(anim, &opts),
            None => anim.create_node_with(opts),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for AnimationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRegistry")
            .field("names", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_base_node() {
        let registry = AnimationRegistry::new();
        let mut anim = Animation::default();
        let id = registry.create(&mut anim, "md-modal-enter", AnimationOptions::default());
        assert_eq!(anim.node(id).options(), &AnimationOptions::default());
        assert_eq!(anim.duration_of(id, None), 0.0);
    }

    #[test]
    fn registered_factory_builds_the_variant() {
        let mut registry = AnimationRegistry::new();
        registry.register(
            "fade",
            Box::new(|anim, opts| {
                let id = anim.create_node_with(opts.clone());
                anim.node_mut(id).from_to("opacity", "0", "1", false);
                id
            }),
        );
        let mut anim = Animation::default();
        let id = registry.create(&mut anim, "fade", AnimationOptions::default());
        assert!(anim.node(id).effects().get("opacity").unwrap().tweens());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = AnimationRegistry::new();
        registry.register(
            "slide",
            Box::new(|anim, opts| anim.create_node_with(opts.clone())),
        );
        registry.register(
            "slide",
            Box::new(|anim, opts| {
                let id = anim.create_node_with(opts.clone());
                anim.node_mut(id).duration(150.0);
                id
            }),
        );
        assert_eq!(registry.len(), 1);

        let mut anim = Animation::default();
        let id = registry.create(&mut anim, "slide", AnimationOptions::default());
        assert_eq!(anim.duration_of(id, None), 150.0);
    }
}
