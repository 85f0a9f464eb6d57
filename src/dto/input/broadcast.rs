use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Broadcast {
    pub title: String,
    pub body: String,
}
