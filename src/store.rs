use crate::models::{ApplicationInput, ApplicationPatch, ApplicationRecord};

/// In-memory collection of application records. Insertion order is the
/// collection order; updates edit in place and deletes close the gap.
/// Validation happens in the form layer, not here.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    records: Vec<ApplicationRecord>,
    next_id: u64,
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a fresh id, appends the record, and returns it.
    pub fn add(&mut self, input: ApplicationInput) -> &ApplicationRecord {
        self.next_id += 1;
        let record = ApplicationRecord {
            id: self.next_id,
            company_name: input.company_name,
            job_title: input.job_title,
            job_type: input.job_type,
            status: input.status,
            location: input.location,
            applied_date: input.applied_date,
            notes: input.notes,
        };
        self.records.push(record);
        // Just pushed, so the vec is non-empty.
        &self.records[self.records.len() - 1]
    }

    /// Overlays the patch onto the record with the given id. Unknown ids are
    /// a no-op; relative order never changes.
    pub fn update(&mut self, id: u64, patch: &ApplicationPatch) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            patch.apply(record);
        }
    }

    /// Removes the record with the given id; no-op if absent.
    pub fn delete(&mut self, id: u64) {
        self.records.retain(|r| r.id != id);
    }

    pub fn get(&self, id: u64) -> Option<&ApplicationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn records(&self) -> &[ApplicationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bulk add for startup seed data.
    pub fn seed(&mut self, inputs: Vec<ApplicationInput>) {
        for input in inputs {
            self.add(input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JobType, Status};
    use chrono::NaiveDate;

    fn input(company: &str) -> ApplicationInput {
        ApplicationInput {
            company_name: company.to_string(),
            job_title: "Software Engineer".to_string(),
            job_type: JobType::FullTime,
            status: Status::Applied,
            location: "Remote".to_string(),
            applied_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            notes: None,
        }
    }

    #[test]
    fn add_assigns_unique_ids_and_stores_input() {
        let mut store = ApplicationStore::new();
        let a = store.add(input("Acme")).id;
        let b = store.add(input("Globex")).id;
        assert_ne!(a, b);

        let found = store.get(a).unwrap();
        assert_eq!(found.company_name, "Acme");
        assert_eq!(found.job_type, JobType::FullTime);
        assert_eq!(found.applied_date, NaiveDate::from_ymd_opt(2024, 5, 10));
    }

    #[test]
    fn update_merges_patch_and_preserves_order() {
        let mut store = ApplicationStore::new();
        let a = store.add(input("Acme")).id;
        let b = store.add(input("Globex")).id;
        let c = store.add(input("Initech")).id;

        let patch = ApplicationPatch {
            status: Some(Status::Selected),
            location: Some("Berlin".to_string()),
            ..Default::default()
        };
        store.update(b, &patch);

        let updated = store.get(b).unwrap();
        assert_eq!(updated.status, Status::Selected);
        assert_eq!(updated.location, "Berlin");
        assert_eq!(updated.company_name, "Globex");

        let ids: Vec<u64> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(store.get(a).unwrap().status, Status::Applied);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = ApplicationStore::new();
        store.add(input("Acme"));
        let before: Vec<_> = store.records().to_vec();

        store.update(999, &ApplicationPatch {
            company_name: Some("Ghost".to_string()),
            ..Default::default()
        });
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn delete_removes_only_the_matching_record() {
        let mut store = ApplicationStore::new();
        let a = store.add(input("Acme")).id;
        let b = store.add(input("Globex")).id;

        store.delete(a);
        assert!(store.get(a).is_none());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(b).unwrap().company_name, "Globex");
    }

    #[test]
    fn delete_unknown_id_leaves_collection_unchanged() {
        let mut store = ApplicationStore::new();
        store.add(input("Acme"));
        store.add(input("Globex"));
        let before: Vec<_> = store.records().to_vec();

        store.delete(42_000);
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = ApplicationStore::new();
        let a = store.add(input("Acme")).id;
        store.delete(a);
        let b = store.add(input("Globex")).id;
        assert_ne!(a, b);
    }

    #[test]
    fn seed_appends_in_order() {
        let mut store = ApplicationStore::new();
        store.seed(vec![input("Acme"), input("Globex")]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].company_name, "Acme");
        assert_eq!(store.records()[1].company_name, "Globex");
    }
}
