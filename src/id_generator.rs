use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of one gesture's drawable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawableId(Uuid);

impl DrawableId {
    /// Fold the id into a 64-bit seed for per-drawable noise
    pub fn seed(&self) -> u64 {
        let bits = self.0.as_u128();
        (bits as u64) ^ ((bits >> 64) as u64)
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

pub fn generate_id() -> DrawableId {
    DrawableId(Uuid::new_v4())
}
