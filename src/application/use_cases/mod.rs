use serde::Serialize;

pub mod admin;
pub mod admin_auth;
pub mod feedback;
pub mod order;

/// One page of a listing, newest entries first.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: i64, per_page: i64, total: i64) -> Self {
        Self {
            items,
            page,
            per_page,
            total,
            total_pages: (total + per_page - 1) / per_page.max(1),
        }
    }
}
