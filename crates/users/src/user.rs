use serde::{Deserialize, Serialize};

use subhub_core::{DomainError, DomainResult, Entity, Record, UserId};

/// Keys a user can be looked up by in a record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserKey {
    Id,
    Email,
}

/// User record: profile fields plus the ids of the users this user follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    /// In subscription order. Duplicates and ids of deleted users are allowed.
    subscribed_to_user_ids: Vec<UserId>,
}

impl User {
    pub fn new(id: UserId, draft: CreateUser) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            subscribed_to_user_ids: Vec::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subscribed_to_user_ids(&self) -> &[UserId] {
        &self.subscribed_to_user_ids
    }

    pub fn is_subscribed_to(&self, target: &UserId) -> bool {
        self.subscribed_to_user_ids.contains(target)
    }

    /// Append `target` to the subscription list.
    ///
    /// No duplicate check: subscribing twice records the target twice.
    pub fn subscribe_to(&mut self, target: &UserId) {
        self.subscribed_to_user_ids.push(target.clone());
    }

    /// Remove every occurrence of `target` from the subscription list.
    pub fn unsubscribe_from(&mut self, target: &UserId) {
        self.subscribed_to_user_ids.retain(|id| id != target);
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(ids) = patch.subscribed_to_user_ids {
            self.subscribed_to_user_ids = ids;
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Record for User {
    type Key = UserKey;
    type Draft = CreateUser;
    type Patch = UserPatch;

    fn next_id() -> Self::Id {
        UserId::new()
    }

    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self {
        Self::new(id, draft)
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        self.apply(patch);
    }

    fn key_equals(&self, key: Self::Key, value: &str) -> bool {
        match key {
            UserKey::Id => self.id.as_str() == value,
            UserKey::Email => self.email == value,
        }
    }
}

/// Create shape: every user field except the id and the subscription list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Partial update shape. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_to_user_ids: Option<Vec<UserId>>,
}

impl UserPatch {
    /// Profile fields are free-form strings; only replacement ids are checked.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(ids) = &self.subscribed_to_user_ids {
            for id in ids {
                id.validate()?;
            }
        }
        Ok(())
    }
}
