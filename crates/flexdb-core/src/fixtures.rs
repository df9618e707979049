//! Demo workspace seed.
//!
//! Bootstrap state is configuration, not core contract: a process may
//! start with these entities and records for demos, or with nothing at
//! all. Tests share the seed as a realistic fixture.

use crate::{db::Db, store::RecordData};
use flexdb_schema::node::FieldKind;
use flexdb_schema::types::{EntityId, FieldId, RecordId};

///
/// SeededWorkspace
///
/// Ids of the seeded schema and records, for callers that address them
/// directly.
///

#[derive(Clone, Copy, Debug)]
pub struct SeededWorkspace {
    pub account: EntityId,
    pub lead: EntityId,
    pub acme: RecordId,
    pub acme_lead: RecordId,
}

/// Seed the demo workspace: an `Account` entity (short-text `Name` as the
/// display field, long-text `Description`, plus an `Account Leads`
/// backlink), a `Lead` entity with a `Status` option field and an
/// `Account` reference, and one sample record on each side.
pub fn seed_demo(db: &mut Db) -> SeededWorkspace {
    let account = db.schema.create_entity("Account", "Accounts");
    let account_name = db.schema.add_field(account, "Name", FieldKind::ShortText);
    let account_description = db
        .schema
        .add_field(account, "Description", FieldKind::LongText);
    if let Some(field) = account_name {
        db.schema.set_display_name_field(account, field);
    }

    let lead = db.schema.create_entity("Lead", "Leads");
    let lead_name = db.schema.add_field(lead, "Name", FieldKind::ShortText);
    let lead_status = db.schema.add_field(
        lead,
        "Status",
        FieldKind::Option {
            values: ["New", "Qualified", "Closed"]
                .map(String::from)
                .to_vec(),
        },
    );
    let lead_account = db
        .schema
        .add_field(lead, "Account", FieldKind::Reference { target: account });
    if let Some(source_field) = lead_account {
        db.schema.add_field(
            account,
            "Account Leads",
            FieldKind::Backlink {
                source_entity: lead,
                source_field,
            },
        );
    }
    if let Some(field) = lead_name {
        db.schema.set_display_name_field(lead, field);
    }

    let mut acme = RecordData::new();
    insert_value(&mut acme, account_name, "Acme");
    insert_value(
        &mut acme,
        account_description,
        "Industrial anvils and rocket skates.",
    );
    let acme = db.records.create_record(account, acme);

    let mut first_lead = RecordData::new();
    insert_value(&mut first_lead, lead_name, "Anvil restock");
    insert_value(&mut first_lead, lead_status, "New");
    insert_value(&mut first_lead, lead_account, &acme.to_string());
    let acme_lead = db.records.create_record(lead, first_lead);

    SeededWorkspace {
        account,
        lead,
        acme,
        acme_lead,
    }
}

// Seed data maps tolerate missing field ids the same way the stores do.
fn insert_value(data: &mut RecordData, field: Option<FieldId>, value: &str) {
    if let Some(field) = field {
        data.insert(field, value.to_string());
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_builds_the_demo_schema_and_records() {
        let mut db = Db::new();
        let seed = seed_demo(&mut db);

        let account = db.schema.get(seed.account).unwrap();
        assert_eq!(account.plural_name, "Accounts");
        assert_eq!(account.fields.len(), 3);
        assert!(account.display_name_field_id.is_some());

        let lead = db.schema.get(seed.lead).unwrap();
        assert_eq!(lead.fields.len(), 3);

        assert_eq!(db.records.list_by_entity(seed.account).count(), 1);
        assert_eq!(db.records.list_by_entity(seed.lead).count(), 1);
    }

    #[test]
    fn seeded_lead_references_the_seeded_account() {
        let mut db = Db::new();
        let seed = seed_demo(&mut db);

        let lead = db.records.get(seed.acme_lead).unwrap();
        assert!(
            lead.data
                .values()
                .any(|value| value == &seed.acme.to_string())
        );
    }
}
