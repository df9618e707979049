//! Observability: mutation events emitted by the stores and the sink
//! abstractions consuming them.
//!
//! Store logic only emits [`ChangeEvent`]s; everything downstream —
//! counters, reactive readouts in a presentation layer — hangs off
//! [`ChangeSink`]. Stores additionally expose a `version()` counter so a
//! subscriber that prefers polling can diff snapshots instead.

mod sink;

pub use sink::*;

use flexdb_schema::types::{EntityId, FieldId, RecordId};

///
/// ChangeEvent
///
/// One applied store mutation. Calls that no-op (stale ids) emit nothing.
///

#[derive(Clone, Copy, Debug)]
pub enum ChangeEvent {
    EntityCreated { entity: EntityId },
    EntityDeleted { entity: EntityId },
    FieldAdded { entity: EntityId, field: FieldId },
    FieldRemoved { entity: EntityId, field: FieldId },
    DisplayFieldSet { entity: EntityId, field: FieldId },
    RecordCreated { record: RecordId },
    RecordUpdated { record: RecordId },
    RecordDeleted { record: RecordId },
}
