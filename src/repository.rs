use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::form::Draft;
use crate::models::{Draftable, Entity, Meta};

/// One page's in-memory record list.
#[derive(Debug, Clone)]
pub struct Repository<E> {
    records: Vec<E>,
}

impl<E: Entity> Repository<E> {
    pub fn seeded(records: Vec<E>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[E] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    fn find(&self, id: &str) -> Option<&E> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<E> {
        let position = self.position(id)?;
        Some(self.records.remove(position))
    }

    pub fn replace_all(&mut self, records: Vec<E>) {
        self.records = records;
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if self.find(&id).is_none() {
                return id;
            }
        }
    }
}

impl<E: Draftable> Repository<E> {
    pub fn insert(&mut self, draft: &E::Draft, now: DateTime<Utc>) -> Result<&E, ValidationError> {
        draft.check_required()?;

        let record = E::from_draft(Meta::new(self.fresh_id(), now), draft)?;
        let position = self.records.len();
        self.records.push(record);

        Ok(&self.records[position])
    }

    /// `Ok(None)` when no record has `id`.
    pub fn update(
        &mut self,
        id: &str,
        draft: &E::Draft,
        now: DateTime<Utc>,
    ) -> Result<Option<&E>, ValidationError> {
        let Some(position) = self.position(id) else {
            return Ok(None);
        };
        draft.check_required()?;

        let mut meta = self.records[position].meta().clone();
        meta.touch(now);
        self.records[position] = E::from_draft(meta, draft)?;

        Ok(Some(&self.records[position]))
    }
}
