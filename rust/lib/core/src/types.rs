use serde::Serialize;

/// One page of a search, with totals.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    /// 1-based page number.
    pub page: usize,
    /// Page size.
    pub limit: usize,
    /// Number of records matching the filters, across all pages.
    pub total: usize,
    /// `ceil(total / limit)`.
    pub pages: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> Page<T> {
    /// Slice one page out of the full, already ordered match list.
    pub fn slice(all: Vec<T>, page: usize, limit: usize) -> Self {
        let total = all.len();
        let skip = (page - 1).saturating_mul(limit);
        let data = all.into_iter().skip(skip).take(limit).collect();
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(limit),
            data,
        }
    }
}

/// Generate a new random ID (UUIDv4, no dashes).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Whether `id` has the shape produced by [`new_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
