use serde::Deserialize;

use subhub_core::{DomainResult, UserId};
use subhub_users::{CreateUser, UserPatch};

use crate::app::extract::Validate;

// -------------------------
// Path params
// -------------------------

/// `/:id` path segment.
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: UserId,
}

// -------------------------
// Request DTOs
// -------------------------

/// Body of `subscribeTo` / `unsubscribeFrom`: the subscribing user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SubscribeRequest {
    pub user_id: UserId,
}

// -------------------------
// Validation
// -------------------------

impl Validate for IdParam {
    fn validate(&self) -> DomainResult<()> {
        self.id.validate()
    }
}

impl Validate for SubscribeRequest {
    fn validate(&self) -> DomainResult<()> {
        self.user_id.validate()
    }
}

// Field presence and types are enforced by deserialization; contents are free-form.
impl Validate for CreateUser {
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}

impl Validate for UserPatch {
    fn validate(&self) -> DomainResult<()> {
        UserPatch::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_request_shape() {
        let ok: SubscribeRequest = serde_json::from_value(serde_json::json!({ "userId": "b" })).unwrap();
        assert!(Validate::validate(&ok).is_ok());

        let empty: SubscribeRequest = serde_json::from_value(serde_json::json!({ "userId": "" })).unwrap();
        assert!(Validate::validate(&empty).is_err());

        assert!(serde_json::from_value::<SubscribeRequest>(serde_json::json!({})).is_err());
        assert!(
            serde_json::from_value::<SubscribeRequest>(serde_json::json!({ "userId": "b", "x": 1 }))
                .is_err()
        );
    }
}
