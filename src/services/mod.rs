pub mod character_service;
pub mod favorite_service;
pub mod planet_service;
pub mod user_service;

/// Narrow a requested id to the `i32` key space; anything wider matches no row.
pub(crate) fn row_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
