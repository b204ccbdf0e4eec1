//! Identifier generation for lists and tasks

use uuid::Uuid;

use crate::types::Identifier;

/// Generate a new globally unique identifier
///
/// Random (v4) UUIDs in hyphenated lowercase form. Collisions are not
/// handled anywhere downstream; the reducers rely on this being unique.
pub fn new_id() -> Identifier {
    Uuid::new_v4().to_string()
}
