use crate::obs::ChangeEvent;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, rc::Rc};

///
/// ChangeSink
///
/// Boundary trait between store mutations and whatever observes them.
/// Sinks receive events after the mutation has fully applied and must not
/// call back into the stores.
///

pub trait ChangeSink {
    fn record(&self, event: ChangeEvent);
}

///
/// SinkHandle
///
/// Optional shared sink slot owned by each store. Stores stay independent
/// values; wiring several of them to one sink is the caller's choice, not
/// process-wide state.
///

#[derive(Clone, Default)]
pub struct SinkHandle(Option<Rc<dyn ChangeSink>>);

impl SinkHandle {
    pub fn set(&mut self, sink: Rc<dyn ChangeSink>) {
        self.0 = Some(sink);
    }

    pub fn emit(&self, event: ChangeEvent) {
        if let Some(sink) = &self.0 {
            sink.record(event);
        }
    }
}

///
/// CounterSink
///
/// Ephemeral, in-memory counters of applied mutations, snapshotted as a
/// serializable report.
///

#[derive(Default)]
pub struct CounterSink {
    state: RefCell<ChangeReport>,
}

impl CounterSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time snapshot of the counters.
    #[must_use]
    pub fn report(&self) -> ChangeReport {
        self.state.borrow().clone()
    }
}

impl ChangeSink for CounterSink {
    fn record(&self, event: ChangeEvent) {
        let mut state = self.state.borrow_mut();

        match event {
            ChangeEvent::EntityCreated { .. } => state.entities_created += 1,
            ChangeEvent::EntityDeleted { .. } => state.entities_deleted += 1,
            ChangeEvent::FieldAdded { .. } => state.fields_added += 1,
            ChangeEvent::FieldRemoved { .. } => state.fields_removed += 1,
            ChangeEvent::DisplayFieldSet { .. } => state.display_fields_set += 1,
            ChangeEvent::RecordCreated { .. } => state.records_created += 1,
            ChangeEvent::RecordUpdated { .. } => state.records_updated += 1,
            ChangeEvent::RecordDeleted { .. } => state.records_deleted += 1,
        }
    }
}

///
/// ChangeReport
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ChangeReport {
    pub entities_created: u64,
    pub entities_deleted: u64,
    pub fields_added: u64,
    pub fields_removed: u64,
    pub display_fields_set: u64,
    pub records_created: u64,
    pub records_updated: u64,
    pub records_deleted: u64,
}

///
/// TESTS
///
