//! User-triggered workflows: each is a linear sequence of backend calls that
//! writes its outcome into injected render targets.

pub mod compare;
pub mod jobs;
pub mod target;
pub mod upload;

use leptos::prelude::*;

/// Per-workflow "request in flight" flag.
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// Clears the flag when dropped, including on early return.
pub struct BusyGuard<'a, B: BusyFlag> {
    flag: &'a B,
}

impl<B: BusyFlag> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}

/// Claim the workflow, or `None` if an invocation is already running.
/// Overlapping invocations of the same workflow are refused rather than raced.
pub fn try_begin<B: BusyFlag>(flag: &B) -> Option<BusyGuard<'_, B>> {
    if flag.is_busy() {
        return None;
    }
    flag.set_busy(true);
    Some(BusyGuard { flag })
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_second_invocation_is_refused_while_busy() {
        let flag = Cell::new(false);

        let guard = try_begin(&flag).expect("First invocation should start");
        assert!(flag.get());
        assert!(try_begin(&flag).is_none(), "Overlapping invocation must be refused");

        drop(guard);
        assert!(!flag.get());
        assert!(try_begin(&flag).is_some(), "Flag should be free again");
    }
}
