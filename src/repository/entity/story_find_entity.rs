use crate::repository::dto::Story;
use bson::{oid::ObjectId, DateTime};
use serde::Deserialize;

const FALLBACK_TITLE: &str = "New story";

#[derive(Deserialize)]
pub struct StoryFindEntity {
    pub _id: ObjectId,

    #[serde(default)]
    pub title: Option<String>,

    pub created_at: DateTime,
}

impl From<StoryFindEntity> for Story {
    fn from(entity: StoryFindEntity) -> Self {
        Self {
            id: entity._id,
            title: entity.title.unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            created_at: entity.created_at.to_time_0_3(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::doc;

    #[test]
    fn missing_title_falls_back_to_placeholder() {
        let document = doc! { "_id": ObjectId::new(), "created_at": DateTime::now() };

        let story = Story::from(bson::from_document::<StoryFindEntity>(document).unwrap());

        assert_eq!(story.title, FALLBACK_TITLE);
    }

    #[test]
    fn title_is_preserved_when_present() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": "The Lighthouse Keeper",
            "created_at": DateTime::now(),
        };

        let story = Story::from(bson::from_document::<StoryFindEntity>(document).unwrap());

        assert_eq!(story.title, "The Lighthouse Keeper");
    }
}
