use bson::oid::ObjectId;
use time::OffsetDateTime;

pub struct Story {
    pub id: ObjectId,
    pub title: String,
    pub created_at: OffsetDateTime,
}
