use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Change notifications emitted by a [`MineField`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEvent {
    /// A cell became visited; carries the cell state after the update.
    CellOpened { coords: Coord2, cell: Cell },
    /// A mine was revealed, no further cells will open.
    GameOver,
    /// A flag was placed or removed.
    FlagChanged { coords: Coord2, cell: Cell },
}

impl FieldEvent {
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::CellOpened { .. } => EventKind::CellOpened,
            Self::GameOver => EventKind::GameOver,
            Self::FlagChanged { .. } => EventKind::FlagChanged,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CellOpened,
    GameOver,
    FlagChanged,
}

pub trait FieldObserver {
    fn notify(&mut self, event: &FieldEvent);
}

impl<F> FieldObserver for F
where
    F: FnMut(&FieldEvent),
{
    fn notify(&mut self, event: &FieldEvent) {
        self(event)
    }
}

/// Subscribers grouped by event kind, called synchronously in the order they subscribed.
#[derive(Default)]
pub struct EventRegistry {
    subscribers: BTreeMap<EventKind, Vec<Box<dyn FieldObserver>>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, observer: impl FieldObserver + 'static) {
        self.subscribers
            .entry(kind)
            .or_default()
            .push(Box::new(observer));
    }

    pub fn dispatch(&mut self, event: &FieldEvent) {
        if let Some(observers) = self.subscribers.get_mut(&event.kind()) {
            for observer in observers.iter_mut() {
                observer.notify(event);
            }
        }
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.subscribers.iter().map(|(kind, list)| (kind, list.len())))
            .finish()
    }
}
