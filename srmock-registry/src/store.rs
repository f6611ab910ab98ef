//! The authoritative in-memory schema store.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::fingerprint;
use crate::types::{Schema, SubjectSchema};

/// In-memory schema store enforcing registry id/version semantics.
///
/// All state sits behind one mutex held for the duration of each operation,
/// so no caller ever observes a half-applied registration (an id allocated
/// but no record appended, a fingerprint cached before its record exists).
/// Operations are short and never block internally, so the coarse lock is
/// not a throughput concern for the test workloads this store serves.
///
/// # Thread safety
///
/// All operations take `&self` and may be called concurrently; `register`
/// is the only mutator.
#[derive(Debug, Default)]
pub struct SchemaStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    /// Every registered record, in registration order. Insertion order is
    /// authoritative: version numbering counts a subject's records, and id
    /// lookups return the first match.
    schemas: Vec<SubjectSchema>,
    /// Content fingerprint -> id. The first registration of a given content
    /// fixes its id forever.
    ids_by_fingerprint: HashMap<u64, i32>,
    /// Last id handed out; ids start at 1 and are never reused.
    id_sequence: i32,
}

impl SchemaStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` under `subject` and returns the stored record.
    ///
    /// Re-registering content a subject already holds is idempotent and
    /// returns the existing record. Identical content under a different
    /// subject reuses the content's id but gets that subject's next version.
    /// Distinct content always gets a fresh id. Never fails.
    pub fn register(&self, subject: &str, schema: Schema) -> SubjectSchema {
        let mut inner = self.inner.lock();

        let fp = fingerprint::rabin(schema.schema.as_bytes());
        let known = inner.ids_by_fingerprint.get(&fp).copied();

        if let Some(id) = known {
            // Content already registered; idempotent if this subject has it.
            if let Some(existing) = inner.find_by_subject_id(subject, id) {
                return existing.clone();
            }
        }

        let id = known.unwrap_or_else(|| inner.next_id());
        let version = inner.next_version(subject);
        let record = SubjectSchema {
            subject: subject.to_owned(),
            version,
            id,
            schema,
        };

        debug!(subject, id, version, "registered schema");

        inner.schemas.push(record.clone());
        inner.ids_by_fingerprint.insert(fp, id);
        record
    }

    /// Returns the content of the first record (in registration order) with
    /// the given id. Ties across subjects go to the first registered.
    pub fn schema_by_id(&self, id: i32) -> Option<Schema> {
        let inner = self.inner.lock();
        inner
            .schemas
            .iter()
            .find(|record| record.id == id)
            .map(|record| record.schema.clone())
    }

    /// Returns the record registered under exactly `(subject, version)`.
    pub fn schema_by_subject_version(&self, subject: &str, version: i32) -> Option<SubjectSchema> {
        let inner = self.inner.lock();
        inner
            .schemas
            .iter()
            .find(|record| record.subject == subject && record.version == version)
            .cloned()
    }

    /// Returns every record sharing the given id, across all subjects, in
    /// registration order. Empty when the id is unknown.
    pub fn subject_versions_by_id(&self, id: i32) -> Vec<SubjectSchema> {
        let inner = self.inner.lock();
        inner
            .schemas
            .iter()
            .filter(|record| record.id == id)
            .cloned()
            .collect()
    }

    /// Total number of stored records.
    pub fn len(&self) -> usize {
        self.inner.lock().schemas.len()
    }

    /// True when nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StoreInner {
    fn next_id(&mut self) -> i32 {
        self.id_sequence += 1;
        self.id_sequence
    }

    fn next_version(&self, subject: &str) -> i32 {
        self.schemas
            .iter()
            .filter(|record| record.subject == subject)
            .count() as i32
            + 1
    }

    fn find_by_subject_id(&self, subject: &str, id: i32) -> Option<&SubjectSchema> {
        self.schemas
            .iter()
            .find(|record| record.subject == subject && record.id == id)
    }
}
