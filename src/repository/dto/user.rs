use bson::oid::ObjectId;

pub struct User {
    pub id: ObjectId,

    ///
    /// Device registration tokens. One entry per installed device,
    /// empty when the user never registered a device (or the stored
    /// field was malformed).
    ///
    pub push_tokens: Vec<String>,
}
