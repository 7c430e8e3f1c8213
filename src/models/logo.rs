use serde::{Deserialize, Serialize};

/// A named logo with its raw SVG markup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Logo {
    pub id: i64,
    pub name: String,
    pub svg: String,
}
