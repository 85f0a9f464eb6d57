use uuid::Uuid;

///
/// Operator authenticated by the JWT middleware.
///
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}
