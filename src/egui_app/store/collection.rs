//! Merged Collection
//!
//! Ordered, identifier-unique sequence of user records. Existing records keep
//! their position; fetched records are appended only when their identifier is
//! new.

use std::collections::HashSet;

use crate::shared::user::{UserId, UserRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedCollection {
    users: Vec<UserRecord>,
}

impl MergedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRecord> {
        self.users.iter()
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.iter().find(|user| &user.id == id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.get(id).is_some()
    }

    fn position(&self, id: &UserId) -> Option<usize> {
        self.users.iter().position(|user| &user.id == id)
    }

    /// Append every fetched record whose identifier is not already present.
    ///
    /// Duplicates inside `batch` itself are also dropped (first one wins).
    /// Returns how many records were appended.
    pub fn merge(&mut self, batch: Vec<UserRecord>) -> usize {
        let mut seen: HashSet<UserId> = self.users.iter().map(|user| user.id.clone()).collect();
        let before = self.users.len();
        self.users
            .extend(batch.into_iter().filter(|user| seen.insert(user.id.clone())));
        self.users.len() - before
    }

    /// Append a record, handing it back if the identifier is taken
    pub fn push(&mut self, record: UserRecord) -> Result<(), UserRecord> {
        if self.contains(&record.id) {
            return Err(record);
        }
        self.users.push(record);
        Ok(())
    }

    /// Replace the record with the same identifier in place.
    ///
    /// Returns the previous record, or hands `record` back when the id is
    /// absent or the listed record has a different origin. A listed record's
    /// origin never changes.
    pub fn replace(&mut self, record: UserRecord) -> Result<UserRecord, UserRecord> {
        match self.position(&record.id) {
            Some(index) if self.users[index].origin() == record.origin() => {
                Ok(std::mem::replace(&mut self.users[index], record))
            }
            _ => Err(record),
        }
    }

    pub fn remove(&mut self, id: &UserId) -> Option<UserRecord> {
        self.position(id).map(|index| self.users.remove(index))
    }

    /// Case-insensitive substring match on the display name
    pub fn search(&self, query: &str) -> Vec<&UserRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.users.iter().collect();
        }
        self.users
            .iter()
            .filter(|user| user.name.to_lowercase().contains(query.as_str()))
            .collect()
    }
}
