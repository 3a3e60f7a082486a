use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::likes::handler::LikeHandler;
use crate::likes::LikeTarget;
use crate::middleware::error::{AppError, AppResult};

/// Maps each like target to the handler servicing it.
///
/// Populated once while the application is composed, then shared read-only
/// behind an `Arc`.
#[derive(Default, Clone)]
pub struct LikeRegistry {
    handlers: HashMap<LikeTarget, Arc<dyn LikeHandler>>,
}

impl LikeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the handler for `target`.
    pub fn register(&mut self, target: LikeTarget, handler: Arc<dyn LikeHandler>) {
        debug_assert_eq!(target, handler.target());
        if self.handlers.insert(target, handler).is_some() {
            debug!(%target, "like handler replaced");
        }
    }

    pub fn get(&self, target: LikeTarget) -> AppResult<&dyn LikeHandler> {
        self.handlers
            .get(&target)
            .map(|h| h.as_ref())
            .ok_or_else(|| AppError::UnsupportedLikeTarget {
                target: target.to_string(),
            })
    }

    pub fn lookup(&self, tag: &str) -> AppResult<&dyn LikeHandler> {
        let target = LikeTarget::from_str(tag).map_err(|_| AppError::UnsupportedLikeTarget {
            target: tag.to_string(),
        })?;
        self.get(target)
    }

    pub fn targets(&self) -> Vec<LikeTarget> {
        self.handlers.keys().copied().collect()
    }
}

impl Debug for LikeRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LikeRegistry")
            .field("targets", &self.targets())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::interfaces::repositories::like::LikeToggle;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use strum::IntoEnumIterator;

    /// In-memory handler following the same toggle rules as the database one.
    pub(crate) struct FakeLikeHandler {
        target: LikeTarget,
        members: HashSet<i64>,
        targets: HashSet<i64>,
        state: Mutex<FakeState>,
    }

    #[derive(Default)]
    struct FakeState {
        relations: HashSet<(i64, i64)>,
        counters: HashMap<i64, u32>,
    }

    impl FakeLikeHandler {
        pub(crate) fn new(target: LikeTarget, members: &[i64], targets: &[i64]) -> Self {
            Self {
                target,
                members: members.iter().copied().collect(),
                targets: targets.iter().copied().collect(),
                state: Mutex::new(FakeState::default()),
            }
        }

        /// Relation without a matching counter increment.
        pub(crate) fn insert_orphan_relation(&self, member_id: i64, target_id: i64) {
            self.state
                .lock()
                .unwrap()
                .relations
                .insert((member_id, target_id));
        }

        pub(crate) fn count(&self, target_id: i64) -> u32 {
            *self
                .state
                .lock()
                .unwrap()
                .counters
                .get(&target_id)
                .unwrap_or(&0)
        }
    }

    #[async_trait]
    impl LikeHandler for FakeLikeHandler {
        fn target(&self) -> LikeTarget {
            self.target
        }

        async fn toggle(&self, member_id: i64, target_id: i64) -> AppResult<LikeToggle> {
            if !self.members.contains(&member_id) {
                return Err(AppError::not_found("member", member_id));
            }
            if !self.targets.contains(&target_id) {
                return Err(AppError::not_found(&self.target.to_string(), target_id));
            }
            let mut state = self.state.lock().unwrap();
            let liked = !state.relations.remove(&(member_id, target_id));
            if liked {
                state.relations.insert((member_id, target_id));
            }
            let counter = state.counters.entry(target_id).or_insert(0);
            *counter = if liked {
                *counter + 1
            } else {
                counter.saturating_sub(1)
            };
            Ok(LikeToggle {
                liked,
                likes_nr: *counter,
            })
        }

        async fn exists(&self, member_id: i64, target_id: i64) -> AppResult<bool> {
            Ok(self
                .state
                .lock()
                .unwrap()
                .relations
                .contains(&(member_id, target_id)))
        }
    }

    fn full_registry() -> LikeRegistry {
        let mut registry = LikeRegistry::new();
        for target in LikeTarget::iter() {
            registry.register(target, Arc::new(FakeLikeHandler::new(target, &[42], &[7])));
        }
        registry
    }

    #[test]
    fn lookup_is_total_over_registered_targets() {
        let registry = full_registry();
        for target in LikeTarget::iter() {
            let handler = registry.lookup(&target.to_string()).unwrap();
            assert_eq!(handler.target(), target);
            assert_eq!(registry.get(target).unwrap().target(), target);
        }
    }

    #[test]
    fn lookup_rejects_unknown_tag() {
        let registry = full_registry();
        let err = registry.lookup("Unknown").err().unwrap();
        assert_eq!(
            err,
            AppError::UnsupportedLikeTarget {
                target: "Unknown".to_string()
            }
        );
    }

    #[test]
    fn lookup_rejects_known_but_unregistered_target() {
        let mut registry = LikeRegistry::new();
        registry.register(
            LikeTarget::Designer,
            Arc::new(FakeLikeHandler::new(LikeTarget::Designer, &[], &[])),
        );
        assert!(registry.lookup("designer").is_ok());
        let err = registry.lookup("Product").err().unwrap();
        assert_eq!(
            err,
            AppError::UnsupportedLikeTarget {
                target: "product".to_string()
            }
        );
    }

    #[test]
    fn register_overwrites_existing_handler() {
        let mut registry = LikeRegistry::new();
        let first = Arc::new(FakeLikeHandler::new(LikeTarget::Product, &[1], &[1]));
        let second = Arc::new(FakeLikeHandler::new(LikeTarget::Product, &[2], &[2]));
        registry.register(LikeTarget::Product, first);
        registry.register(LikeTarget::Product, second);
        assert_eq!(registry.targets(), vec![LikeTarget::Product]);
    }
}
