//! Item ID generation

/// Generate a timestamp-ordered item ID
///
/// Callers never check for collisions; two items with the same ID are both
/// affected by an ID-based edit.
pub fn generate_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
