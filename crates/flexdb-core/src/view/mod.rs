pub mod compare;

use crate::store::Record;
use flexdb_schema::node::{Entity, Field};
use flexdb_schema::types::FieldId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// Direction
///
/// Sort direction for the record-list view.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// Sort
///
/// Active sort order of a view. The `none` step of the cycling contract
/// is the absence of a `Sort` on the view state.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Sort {
    pub field: FieldId,
    pub direction: Direction,
}

///
/// ViewState
///
/// Presentation state of one record-list view: free-text filter, visible
/// columns, and sort order. Filter and sort select and order rows; column
/// visibility projects columns and never removes a record.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ViewState {
    pub filter_text: String,
    pub visible_fields: BTreeSet<FieldId>,
    pub sort: Option<Sort>,
}

impl ViewState {
    /// Default view over an entity at open time: no filter, every field
    /// visible, unsorted.
    #[must_use]
    pub fn for_entity(entity: &Entity) -> Self {
        Self {
            filter_text: String::new(),
            visible_fields: entity.fields.iter().map(|field| field.id).collect(),
            sort: None,
        }
    }

    /// Header activation contract: repeated activation of the same field
    /// steps none → ascending → descending → none; activating a different
    /// field restarts at ascending whatever the previous state.
    pub fn cycle_sort(&mut self, field: FieldId) {
        self.sort = match self.sort {
            Some(sort) if sort.field == field => match sort.direction {
                Direction::Asc => Some(Sort {
                    field,
                    direction: Direction::Desc,
                }),
                Direction::Desc => None,
            },
            _ => Some(Sort {
                field,
                direction: Direction::Asc,
            }),
        };
    }

    pub fn set_column_visible(&mut self, field: FieldId, visible: bool) {
        if visible {
            self.visible_fields.insert(field);
        } else {
            self.visible_fields.remove(&field);
        }
    }

    /// Columns to render, in entity field order.
    #[must_use]
    pub fn visible_columns<'a>(&self, entity: &'a Entity) -> Vec<&'a Field> {
        entity
            .fields
            .iter()
            .filter(|field| self.visible_fields.contains(&field.id))
            .collect()
    }

    /// Produce the ordered row set for this view: filter, then a stable
    /// sort into a new ordering. The filtered order is left untouched in
    /// the input, so a later re-sort starts from the same baseline.
    #[must_use]
    pub fn project<'a>(&self, records: &[&'a Record]) -> Vec<&'a Record> {
        let mut rows: Vec<&Record> = records
            .iter()
            .copied()
            .filter(|record| self.matches_filter(record))
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare::field_value_cmp(a.value(sort.field), b.value(sort.field));
                match sort.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            });
        }

        rows
    }

    // Raw-substring filter over every stored value; reference and backlink
    // values match on stored ids, not resolved labels.
    fn matches_filter(&self, record: &Record) -> bool {
        if self.filter_text.is_empty() {
            return true;
        }

        record
            .data
            .values()
            .any(|value| compare::text_contains_ci(value, &self.filter_text))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordData;
    use flexdb_schema::types::{EntityId, RecordId, Ulid};

    fn field_id(n: u128) -> FieldId {
        FieldId::from_ulid(Ulid::from_parts(1, n))
    }

    fn record(n: u128, pairs: &[(FieldId, &str)]) -> Record {
        Record {
            id: RecordId::from_ulid(Ulid::from_parts(2, n)),
            entity_id: EntityId::from_ulid(Ulid::from_parts(3, 1)),
            data: pairs
                .iter()
                .map(|(field, value)| (*field, (*value).to_string()))
                .collect(),
        }
    }

    fn values<'a>(rows: &[&'a Record], field: FieldId) -> Vec<&'a str> {
        rows.iter().map(|r| r.value(field)).collect()
    }

    #[test]
    fn empty_filter_keeps_every_record() {
        let x = field_id(1);
        let records = [record(1, &[(x, "a")]), record(2, &[])];
        let refs: Vec<&Record> = records.iter().collect();

        let state = ViewState::default();
        assert_eq!(state.project(&refs).len(), 2);
    }

    #[test]
    fn filter_matches_any_value_case_insensitively() {
        let (name, notes) = (field_id(1), field_id(2));
        let records = [
            record(1, &[(name, "Mirion Technologies")]),
            record(2, &[(name, "Acme"), (notes, "ex-MIRION staff")]),
            record(3, &[(name, "Globex")]),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let state = ViewState {
            filter_text: "MIRION".to_string(),
            ..ViewState::default()
        };

        let rows = state.project(&refs);
        assert_eq!(values(&rows, name), vec!["Mirion Technologies", "Acme"]);
    }

    #[test]
    fn filter_matches_reference_values_on_the_raw_id() {
        let reference = field_id(1);
        let target = RecordId::from_ulid(Ulid::from_parts(4, 4)).to_string();
        let records = [record(1, &[(reference, target.as_str())]), record(2, &[])];
        let refs: Vec<&Record> = records.iter().collect();

        let state = ViewState {
            filter_text: target[..8].to_lowercase(),
            ..ViewState::default()
        };
        assert_eq!(state.project(&refs).len(), 1);
    }

    #[test]
    fn numeric_sort_orders_by_value_not_lexically() {
        let x = field_id(1);
        let records = [
            record(1, &[(x, "10")]),
            record(2, &[(x, "2")]),
            record(3, &[(x, "9")]),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let mut state = ViewState::default();
        state.cycle_sort(x);

        assert_eq!(values(&state.project(&refs), x), vec!["2", "9", "10"]);

        state.cycle_sort(x);
        assert_eq!(values(&state.project(&refs), x), vec!["10", "9", "2"]);
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let x = field_id(1);
        let records = [
            record(1, &[(x, "2")]),
            record(2, &[(x, "1")]),
            record(3, &[(x, "2")]),
        ];
        let refs: Vec<&Record> = records.iter().collect();

        let mut state = ViewState::default();
        state.cycle_sort(x);

        let rows = state.project(&refs);
        assert_eq!(values(&rows, x), vec!["1", "2", "2"]);
        assert_eq!(rows[1].id, records[0].id);
        assert_eq!(rows[2].id, records[2].id);
    }

    #[test]
    fn missing_sort_values_compare_as_empty() {
        let x = field_id(1);
        let records = [record(1, &[(x, "b")]), record(2, &[])];
        let refs: Vec<&Record> = records.iter().collect();

        let mut state = ViewState::default();
        state.cycle_sort(x);

        assert_eq!(values(&state.project(&refs), x), vec!["", "b"]);
    }

    #[test]
    fn projection_does_not_disturb_the_input_order() {
        let x = field_id(1);
        let records = [record(1, &[(x, "b")]), record(2, &[(x, "a")])];
        let refs: Vec<&Record> = records.iter().collect();

        let mut state = ViewState::default();
        state.cycle_sort(x);
        let sorted = state.project(&refs);

        assert_eq!(values(&sorted, x), vec!["a", "b"]);
        assert_eq!(values(&refs, x), vec!["b", "a"]);
    }

    #[test]
    fn cycle_sort_steps_through_the_contract() {
        let (x, y) = (field_id(1), field_id(2));
        let mut state = ViewState::default();

        state.cycle_sort(x);
        assert_eq!(
            state.sort,
            Some(Sort {
                field: x,
                direction: Direction::Asc
            })
        );

        state.cycle_sort(x);
        assert_eq!(
            state.sort,
            Some(Sort {
                field: x,
                direction: Direction::Desc
            })
        );

        state.cycle_sort(x);
        assert_eq!(state.sort, None);

        // a different field resets straight to ascending
        state.cycle_sort(x);
        state.cycle_sort(y);
        assert_eq!(
            state.sort,
            Some(Sort {
                field: y,
                direction: Direction::Asc
            })
        );
    }

    #[test]
    fn column_visibility_projects_columns_not_rows() {
        use flexdb_schema::node::{Entity, Field, FieldKind};

        let mut entity = Entity::new(EntityId::from_ulid(Ulid::from_parts(3, 1)), "A", "As");
        let (x, y) = (field_id(1), field_id(2));
        entity.fields.push(Field::new(x, "X", FieldKind::ShortText));
        entity.fields.push(Field::new(y, "Y", FieldKind::ShortText));

        let mut state = ViewState::for_entity(&entity);
        assert_eq!(state.visible_columns(&entity).len(), 2);

        state.set_column_visible(x, false);
        let columns = state.visible_columns(&entity);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].id, y);

        // hiding a column never drops a record
        let records = [record(1, &[(x, "only x")])];
        let refs: Vec<&Record> = records.iter().collect();
        assert_eq!(state.project(&refs).len(), 1);
    }
}
