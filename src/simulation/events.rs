use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::simulation::geometry::Point;

pub trait Event: Debug + Any {
    fn step(&self) -> u64;
    fn as_any(&self) -> &dyn Any;
}

type OnEventFn = dyn Fn(&dyn Event) + 'static;

/// Holds call-backs for event processing. Rust has no reflection, so
/// subscribers register per concrete event type and dispatch goes through
/// `TypeId` plus a downcast. This keeps the event types compile-time checked.
#[derive(Default)]
pub struct EventsManager {
    per_type: HashMap<TypeId, Vec<Rc<OnEventFn>>>,
    catch_all: Vec<Box<OnEventFn>>,
}

impl Debug for EventsManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EventsManager {{ per_type: {:?}, catch_all: {:?} }}",
            self.per_type.len(),
            self.catch_all.len()
        )
    }
}

impl EventsManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish_event(&mut self, event: &dyn Event) {
        let tid = event.as_any().type_id();
        if let Some(list) = self.per_type.get(&tid).cloned() {
            for handler in list {
                handler(event);
            }
        }
        for handler in &self.catch_all {
            handler(event);
        }
    }

    /// Registers a callback for one specific event type.
    pub fn on<E, F>(&mut self, f: F)
    where
        E: Event,
        F: Fn(&E) + 'static,
    {
        let type_id = TypeId::of::<E>();
        let entry = self.per_type.entry(type_id).or_default();
        entry.push(Rc::new(move |ev: &dyn Event| {
            if let Some(e) = ev.as_any().downcast_ref::<E>() {
                f(e);
            }
        }));
    }

    /// Registers a callback for all event types.
    pub fn on_any<F>(&mut self, f: F)
    where
        F: Fn(&dyn Event) + 'static,
    {
        self.catch_all.push(Box::new(f));
    }
}

/// A vehicle covered one velocity step.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleMoved {
    pub step: u64,
    pub model: String,
    pub position: Point,
    pub fuel: f64,
}

/// A vehicle could not cover its step distance and drained its tank.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleStalled {
    pub step: u64,
    pub model: String,
    pub position: Point,
}

/// Both vehicles occupy the same coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct VehiclesCrashed {
    pub step: u64,
    pub position: Point,
}

impl Event for VehicleMoved {
    fn step(&self) -> u64 {
        self.step
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Event for VehicleStalled {
    fn step(&self) -> u64 {
        self.step
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Event for VehiclesCrashed {
    fn step(&self) -> u64 {
        self.step
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}
