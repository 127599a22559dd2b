//! Frontend Models
//!
//! Data structures matching the items endpoint payload.

use serde::{Deserialize, Serialize};

/// Item record as served by the backend. Only `id` and `name` are consumed;
/// extra fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
}
