use super::{
    dto::{InactivityThreshold, User},
    entity::UserFindEntity,
    error::Error,
    UsersRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Cursor, Database, IndexModel};
use time::OffsetDateTime;

const USERS: &str = "users";
const INDEX_NAME_LAST_LOGIN: &str = "index_last_login";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(USERS).await?;

        let collection = database.collection::<Document>(USERS);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_LAST_LOGIN.to_string()) {
            Self::create_last_login_index(&collection).await?;
            tracing::debug!("created index {USERS}.{INDEX_NAME_LAST_LOGIN}");
        }

        Ok(Self { database })
    }

    async fn create_last_login_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "last_login": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_LAST_LOGIN.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    ///
    /// Selection carrying the at-most-once guarantee: users flagged for
    /// this threshold fail the `$ne` clause and are never re-selected
    /// until the flag is cleared by a new login.
    ///
    fn inactive_unnotified_filter(
        threshold: InactivityThreshold,
        last_active_before: OffsetDateTime,
    ) -> Document {
        let mut filter = doc! {
            "last_login": { "$lte": DateTime::from(last_active_before) },
        };
        filter.insert(threshold.flag_field(), doc! { "$ne": true });

        filter
    }

    fn notified_flag_update(threshold: InactivityThreshold) -> Document {
        let mut fields = Document::new();
        fields.insert(threshold.flag_field(), true);

        doc! { "$set": fields }
    }

    ///
    /// Collects users from a cursor, skipping documents that fail to
    /// deserialize. One broken user record must not starve every other
    /// user of their notification.
    ///
    async fn collect_users(mut cursor: Cursor<Document>) -> Result<Vec<User>, Error> {
        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            match bson::from_document::<UserFindEntity>(document) {
                Ok(entity) => users.push(User::from(entity)),
                Err(err) => tracing::warn!(%err, "skipping malformed user document"),
            }
        }

        Ok(users)
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<User>, Error> {
        let cursor = self
            .database
            .collection::<Document>(USERS)
            .find(doc! {})
            .await?;

        Self::collect_users(cursor).await
    }

    async fn find_inactive_unnotified(
        &self,
        threshold: InactivityThreshold,
        last_active_before: OffsetDateTime,
    ) -> Result<Vec<User>, Error> {
        let filter = Self::inactive_unnotified_filter(threshold, last_active_before);

        let cursor = self
            .database
            .collection::<Document>(USERS)
            .find(filter)
            .await?;

        Self::collect_users(cursor).await
    }

    async fn set_notified_flag(
        &self,
        user_ids: &[ObjectId],
        threshold: InactivityThreshold,
    ) -> Result<(), Error> {
        let filter = doc! {
            "_id": { "$in": user_ids.to_vec() },
        };
        let update = Self::notified_flag_update(threshold);

        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_many(filter, update)
            .await?;

        tracing::debug!(
            matched = update_result.matched_count,
            modified = update_result.modified_count,
            flag = threshold.flag_field(),
            "set notified flag"
        );

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::{macros::datetime, Duration};

    #[test]
    fn inactive_filter_excludes_already_flagged_users() {
        let cutoff = datetime!(2024-06-05 10:00:00 UTC);

        let filter = UsersRepositoryImpl::inactive_unnotified_filter(
            InactivityThreshold::FiveDays,
            cutoff,
        );

        assert_eq!(
            filter,
            doc! {
                "last_login": { "$lte": DateTime::from(cutoff) },
                "notified_5_days": { "$ne": true },
            }
        );
    }

    #[test]
    fn each_threshold_gates_on_its_own_flag() {
        let cutoff = datetime!(2024-06-05 11:00:00 UTC);

        let filter = UsersRepositoryImpl::inactive_unnotified_filter(
            InactivityThreshold::TwentyDays,
            cutoff,
        );

        assert!(filter.contains_key("notified_20_days"));
        assert!(!filter.contains_key("notified_5_days"));
    }

    #[test]
    fn selection_cutoff_is_inclusive() {
        let cutoff = datetime!(2024-06-05 10:00:00 UTC);
        let bound = DateTime::from(cutoff);

        // $lte at the value level: a login exactly at the cutoff is
        // selected, a login one second later is not.
        assert!(DateTime::from(cutoff) <= bound);
        assert!(DateTime::from(cutoff + Duration::seconds(1)) > bound);
    }

    #[test]
    fn flag_update_sets_only_the_threshold_flag() {
        let update = UsersRepositoryImpl::notified_flag_update(InactivityThreshold::TwentyDays);

        assert_eq!(update, doc! { "$set": { "notified_20_days": true } });
    }
}
