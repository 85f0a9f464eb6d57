use crate::repository::dto::User;
use bson::{oid::ObjectId, Bson};
use serde::Deserialize;

///
/// Raw shape of a user document as the mobile client writes it.
///
/// `fcm_tokens` is kept as [Bson] on purpose: the field is owned by the
/// client app and has been observed missing or with the wrong type.
/// Conversion to [User] validates it and falls back to an empty token
/// set instead of failing the whole sweep.
///
#[derive(Deserialize)]
pub struct UserFindEntity {
    pub _id: ObjectId,

    #[serde(default)]
    pub fcm_tokens: Option<Bson>,
}

impl From<UserFindEntity> for User {
    fn from(entity: UserFindEntity) -> Self {
        let push_tokens = match entity.fcm_tokens {
            Some(Bson::Array(values)) => values
                .into_iter()
                .filter_map(|value| match value {
                    Bson::String(token) => Some(token),
                    value => {
                        tracing::warn!(user_id = %entity._id, ?value, "ignoring non string push token");
                        None
                    }
                })
                .collect(),
            Some(value) => {
                tracing::warn!(user_id = %entity._id, ?value, "fcm_tokens has unexpected shape");
                Vec::new()
            }
            None => Vec::new(),
        };

        Self {
            id: entity._id,
            push_tokens,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::doc;

    #[test]
    fn missing_tokens_field_yields_empty_set() {
        let document = doc! { "_id": ObjectId::new() };

        let user = User::from(bson::from_document::<UserFindEntity>(document).unwrap());

        assert!(user.push_tokens.is_empty());
    }

    #[test]
    fn non_array_tokens_field_yields_empty_set() {
        let document = doc! { "_id": ObjectId::new(), "fcm_tokens": "not an array" };

        let user = User::from(bson::from_document::<UserFindEntity>(document).unwrap());

        assert!(user.push_tokens.is_empty());
    }

    #[test]
    fn mixed_array_keeps_only_string_tokens() {
        let document = doc! {
            "_id": ObjectId::new(),
            "fcm_tokens": ["token-a", 42, "token-b", Bson::Null],
        };

        let user = User::from(bson::from_document::<UserFindEntity>(document).unwrap());

        assert_eq!(user.push_tokens, vec!["token-a", "token-b"]);
    }

    #[test]
    fn document_without_id_is_rejected() {
        let document = doc! { "fcm_tokens": ["token-a"] };

        let entity = bson::from_document::<UserFindEntity>(document);

        assert!(entity.is_err());
    }
}
