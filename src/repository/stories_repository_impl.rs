use super::{dto::Story, entity::StoryFindEntity, error::Error, StoriesRepository};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use time::OffsetDateTime;

const STORIES: &str = "stories";
const INDEX_NAME_CREATED_AT: &str = "index_created_at";

pub struct StoriesRepositoryImpl {
    database: Database,
}

impl StoriesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(STORIES).await?;

        let collection = database.collection::<Document>(STORIES);
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_CREATED_AT.to_string()) {
            Self::create_created_at_index(&collection).await?;
            tracing::debug!("created index {STORIES}.{INDEX_NAME_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "created_at": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn created_since_filter(created_after: OffsetDateTime) -> Document {
        doc! {
            "created_at": { "$gte": DateTime::from(created_after) },
        }
    }

    /// Callers rely on this ordering to pick the newest story as `first()`.
    fn newest_first_sort() -> Document {
        doc! { "created_at": -1 }
    }
}

#[async_trait]
impl StoriesRepository for StoriesRepositoryImpl {
    async fn find_created_since(
        &self,
        created_after: OffsetDateTime,
    ) -> Result<Vec<Story>, Error> {
        let filter = Self::created_since_filter(created_after);

        let mut cursor = self
            .database
            .collection::<Document>(STORIES)
            .find(filter)
            .sort(Self::newest_first_sort())
            .await?;

        let mut stories = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            match bson::from_document::<StoryFindEntity>(document) {
                Ok(entity) => stories.push(Story::from(entity)),
                Err(err) => tracing::warn!(%err, "skipping malformed story document"),
            }
        }

        Ok(stories)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::{macros::datetime, Duration};

    #[test]
    fn window_filter_keeps_fresh_and_drops_stale_timestamps() {
        let now = datetime!(2024-06-10 12:00:00 UTC);
        let cutoff = now - Duration::minutes(65);

        let filter = StoriesRepositoryImpl::created_since_filter(cutoff);

        assert_eq!(
            filter,
            doc! {
                "created_at": { "$gte": DateTime::from(cutoff) },
            }
        );

        // $gte at the value level: a story published 40 minutes ago is
        // inside the window, one published 70 minutes ago is not.
        let bound = DateTime::from(cutoff);
        assert!(DateTime::from(now - Duration::minutes(40)) >= bound);
        assert!(DateTime::from(now - Duration::minutes(70)) < bound);
    }

    #[test]
    fn sort_puts_newest_story_first() {
        assert_eq!(
            StoriesRepositoryImpl::newest_first_sort(),
            doc! { "created_at": -1 }
        );
    }
}
