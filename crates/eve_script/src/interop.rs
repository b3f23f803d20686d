//! Per-thread installation of the native bridge.
//!
//! Script-facing wrappers carry only ids. Every operation looks up the
//! bridge bound to the current thread, performs exactly one call, and drops
//! the lookup again. Nothing is cached between calls.

use std::cell::RefCell;
use std::rc::Rc;

use eve_interop::NativeBridge;
use tracing::debug;

thread_local! {
    static BRIDGE: RefCell<Option<Rc<dyn NativeBridge>>> = const { RefCell::new(None) };
}

/// Keeps a bridge installed on the current thread.
///
/// Dropping the guard reinstates whatever bridge was bound before, so guards
/// nest.
#[must_use = "the bridge is unbound as soon as the guard is dropped"]
pub struct BridgeGuard {
    previous: Option<Rc<dyn NativeBridge>>,
}

impl Drop for BridgeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        BRIDGE.with(|slot| slot.replace(previous));
        debug!("native bridge unbound");
    }
}

/// Install `bridge` for every script call made on this thread.
pub fn bind(bridge: Rc<dyn NativeBridge>) -> BridgeGuard {
    let previous = BRIDGE.with(|slot| slot.replace(Some(bridge)));
    debug!(nested = previous.is_some(), "native bridge bound");
    BridgeGuard { previous }
}

/// Returns `true` if a bridge is bound on this thread.
#[must_use]
pub fn is_bound() -> bool {
    BRIDGE.with(|slot| slot.borrow().is_some())
}

/// Run `f` against the bound bridge.
///
/// The bridge is cloned out of the slot first, so `f` may re-enter script
/// code that makes further calls.
///
/// # Panics
///
/// Panics if no bridge is bound on this thread.
pub(crate) fn with_native<R>(f: impl FnOnce(&dyn NativeBridge) -> R) -> R {
    let bridge = BRIDGE.with(|slot| slot.borrow().clone());
    match bridge {
        Some(bridge) => f(bridge.as_ref()),
        None => panic!("no native bridge bound on this thread; call eve_script::interop::bind first"),
    }
}

/// Run a getter that writes into caller-owned memory and return the value.
pub(crate) fn read_out<T: Default>(f: impl FnOnce(&dyn NativeBridge, &mut T)) -> T {
    let mut out = T::default();
    with_native(|native| f(native, &mut out));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eve_native::HeadlessEngine;

    #[test]
    fn test_bind_and_unbind() {
        assert!(!is_bound());
        {
            let _guard = bind(Rc::new(HeadlessEngine::new()));
            assert!(is_bound());
        }
        assert!(!is_bound());
    }

    #[test]
    fn test_nested_guard_restores_previous() {
        let outer = Rc::new(HeadlessEngine::new());
        let inner = Rc::new(HeadlessEngine::new());
        outer.create_entity("outer", eve_interop::EntityId::INVALID);

        let _outer_guard = bind(outer);
        {
            let _inner_guard = bind(inner);
            let found = with_native(|n| n.entity_find_by_name("outer"));
            assert!(found.is_none());
        }
        let found = with_native(|n| n.entity_find_by_name("outer"));
        assert!(found.is_valid());
    }

    #[test]
    #[should_panic(expected = "no native bridge bound")]
    fn test_unbound_call_panics() {
        with_native(|n| n.application_quit());
    }
}
