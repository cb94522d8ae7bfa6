// Copyright 2025 the Tandem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection callbacks.
//!
//! A view reports selection changes in two places:
//!
//! - the sink passed to each gesture call, which is how a coordinator routes
//!   the change to the other view while it still holds `&mut` to both;
//! - its own [`Observers`] registry, for long-lived listeners that are not
//!   part of the propagation (logging, a status bar, tests).
//!
//! `None` always means "no selection"; for week sets, `Some` of an empty set
//! means "a selection that matched nothing".

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// A callback sink for selection changes.
///
/// Implemented for any `FnMut(Option<&S>)`.
pub trait SelectionSink<S: ?Sized> {
    /// Called once per reported change.
    fn selection_changed(&mut self, selection: Option<&S>);
}

impl<S: ?Sized, F> SelectionSink<S> for F
where
    F: FnMut(Option<&S>),
{
    fn selection_changed(&mut self, selection: Option<&S>) {
        self(selection);
    }
}

/// Records every reported selection, in order.
#[derive(Clone, Debug)]
pub struct Recorder<S> {
    events: Vec<Option<S>>,
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<S> Recorder<S> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded selections, oldest first.
    #[must_use]
    pub fn events(&self) -> &[Option<S>] {
        &self.events
    }

    /// The most recent selection report, if any was made.
    #[must_use]
    pub fn last(&self) -> Option<&Option<S>> {
        self.events.last()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<Option<S>> {
        core::mem::take(&mut self.events)
    }
}

impl<S: Clone> SelectionSink<S> for Recorder<S> {
    fn selection_changed(&mut self, selection: Option<&S>) {
        self.events.push(selection.cloned());
    }
}

/// Handle returned by [`Observers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// A registry of boxed selection sinks, notified in subscription order.
pub struct Observers<S: ?Sized + 'static> {
    next_id: u64,
    entries: SmallVec<[Entry<S>; 2]>,
}

struct Entry<S: ?Sized + 'static> {
    id: ObserverId,
    sink: Box<dyn SelectionSink<S>>,
}

impl<S: ?Sized + 'static> Default for Observers<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: SmallVec::new(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Observers<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<ObserverId> = self.entries.iter().map(|e| e.id).collect();
        f.debug_struct("Observers")
            .field("ids", &ids)
            .finish_non_exhaustive()
    }
}

impl<S: ?Sized + 'static> Observers<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink; it is called for every later notification.
    pub fn subscribe(&mut self, sink: impl SelectionSink<S> + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            sink: Box::new(sink),
        });
        id
    }

    /// Removes a sink. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Number of subscribed sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls every sink with `selection`.
    pub fn notify(&mut self, selection: Option<&S>) {
        for entry in &mut self.entries {
            entry.sink.selection_changed(selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use super::{Observers, Recorder, SelectionSink};

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        let mut sink = |s: Option<&u32>| seen.push(s.copied());
        sink.selection_changed(Some(&3));
        sink.selection_changed(None);
        assert_eq!(seen, [Some(3), None]);
    }

    #[test]
    fn recorder_keeps_order_and_drains() {
        let mut rec = Recorder::new();
        rec.selection_changed(Some(&1_u32));
        rec.selection_changed(None);
        assert_eq!(rec.last(), Some(&None));
        assert_eq!(rec.take(), [Some(1), None]);
        assert!(rec.events().is_empty());
    }

    #[test]
    fn observers_notify_until_unsubscribed() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::<u32>::new();

        let first = {
            let log = Rc::clone(&log);
            observers.subscribe(move |s: Option<&u32>| log.borrow_mut().push((1, s.copied())))
        };
        {
            let log = Rc::clone(&log);
            observers.subscribe(move |s: Option<&u32>| log.borrow_mut().push((2, s.copied())));
        }

        observers.notify(Some(&7));
        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        observers.notify(None);

        assert_eq!(*log.borrow(), [(1, Some(7)), (2, Some(7)), (2, None)]);
        assert_eq!(observers.len(), 1);
    }
}
