//! Identifier generation for new products.

use uuid::Uuid;

/// Produce a fresh product id: a random (v4) UUID in hyphenated lowercase form.
pub fn generate() -> String {
    Uuid::new_v4().to_string()
}
