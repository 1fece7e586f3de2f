use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "1721894400000",
        "name": "John Doe",
        "phone": "555-1234"
    })
)]
pub struct Employee {
    /// Opaque time-derived id, unique for the session.
    #[schema(example = "1721894400000")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    /// Free text, not validated.
    #[schema(example = "555-1234")]
    #[serde(default)]
    pub phone: String,
}
