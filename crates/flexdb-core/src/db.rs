use crate::{
    obs::ChangeSink,
    relation::Resolver,
    store::{RecordStore, SchemaStore},
};
use std::rc::Rc;

///
/// Db
///
/// A handle bundling one schema store and one record store. Writes go
/// through the public stores; derived reads go through [`Resolver`] and
/// the view engine. Instances are fully independent — there is no
/// process-wide store state — so tests and embedders can run as many
/// workspaces side by side as they like.
///

#[derive(Default)]
pub struct Db {
    pub schema: SchemaStore,
    pub records: RecordStore,
}

impl Db {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route change events from both stores into one sink.
    pub fn set_sink(&mut self, sink: Rc<dyn ChangeSink>) {
        self.schema.set_sink(Rc::clone(&sink));
        self.records.set_sink(sink);
    }

    /// Borrowing relational reader over current store state.
    #[must_use]
    pub const fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.schema, &self.records)
    }
}

///
/// TESTS
///
