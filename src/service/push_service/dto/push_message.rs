///
/// Notification payload shared by every token of one dispatch cycle.
///
#[derive(Debug, Clone)]
pub struct PushMessage {
    pub title: String,
    pub body: String,
}
