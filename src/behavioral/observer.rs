// Observer: a subject pushes its value to an explicit registry of observers.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use crate::error::Result;

pub trait Observer {
    fn update(&mut self, value: i32, out: &mut dyn Write) -> io::Result<()>;
}

pub type SharedObserver = Rc<RefCell<dyn Observer>>;

/// Handle returned by [`DataSubject::add_observer`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Subject holding one integer value.
#[derive(Default)]
pub struct DataSubject {
    data: i32,
    changed: bool,
    next_id: u64,
    observers: Vec<(ObserverId, SharedObserver)>,
}

impl DataSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`. Registering the same observer twice returns the
    /// id of the existing registration.
    pub fn add_observer(&mut self, observer: SharedObserver) -> ObserverId {
        if let Some((id, _)) = self.observers.iter().find(|(_, o)| same_observer(o, &observer)) {
            return *id;
        }
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        tracing::debug!(?id, registered = self.observers.len(), "observer added");
        id
    }

    /// Returns whether `id` was registered.
    pub fn delete_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        let removed = self.observers.len() != before;
        tracing::debug!(?id, removed, "observer deleted");
        removed
    }

    pub fn count_observers(&self) -> usize {
        self.observers.len()
    }

    pub fn set_data(&mut self, new_value: i32, out: &mut dyn Write) -> io::Result<()> {
        self.data = new_value;
        self.changed = true;
        self.notify_observers(out)
    }

    pub fn data(&self) -> i32 {
        self.data
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Push the current value to every registered observer, in registration
    /// order, if the subject is dirty.
    fn notify_observers(&mut self, out: &mut dyn Write) -> io::Result<()> {
        if !self.changed {
            return Ok(());
        }
        self.changed = false;
        for (_, observer) in &self.observers {
            observer.borrow_mut().update(self.data, out)?;
        }
        Ok(())
    }
}

fn same_observer(a: &SharedObserver, b: &SharedObserver) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

#[derive(Debug, Default)]
pub struct DataObserver {
    last_value: Option<i32>,
}

impl DataObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_value(&self) -> Option<i32> {
        self.last_value
    }
}

impl Observer for DataObserver {
    fn update(&mut self, value: i32, out: &mut dyn Write) -> io::Result<()> {
        self.last_value = Some(value);
        writeln!(out, "DataObserver: Received update. New data value: {value}")
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut data_subject = DataSubject::new();
    let data_observer = Rc::new(RefCell::new(DataObserver::new()));

    let registration = data_subject.add_observer(data_observer.clone());

    // Set new data value, and observer will be notified
    data_subject.set_data(42, out)?;

    data_subject.delete_observer(registration);

    // No notification after unregistering
    data_subject.set_data(99, out)?;
    Ok(())
}
