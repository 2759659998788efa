use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use macgen_core::{Page, ServiceError};

use crate::model::{DeviceFamily, WorkOrder};
use super::MacGenService;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

/// Search filters, sort and pagination. Filters are ANDed; absent or
/// empty filters match everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub work_order_number: Option<String>,
    /// Case-insensitive substring of the customer name.
    pub customer_name: Option<String>,
    pub item_type: Option<String>,
    pub start_mac_id: Option<String>,
    /// `"latest"` or `"oldest"`; anything else keeps store order.
    pub date: Option<String>,
    /// JSON number or numeric string.
    pub page: Option<Value>,
    pub limit: Option<Value>,
}

/// Creation-time ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Latest,
    Oldest,
}

impl SortOrder {
    pub fn from_param(value: Option<&str>) -> Option<Self> {
        match value {
            Some("latest") => Some(Self::Latest),
            Some("oldest") => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Validated form of a [`SearchQuery`].
struct Filter<'a> {
    work_order_number: Option<&'a str>,
    customer_name: Option<String>,
    item_type: Option<DeviceFamily>,
    start_mac_id: Option<&'a str>,
}

impl<'a> Filter<'a> {
    fn from_query(q: &'a SearchQuery) -> Result<Self, ServiceError> {
        let item_type = match non_empty(&q.item_type) {
            Some(s) => Some(DeviceFamily::parse(s).ok_or_else(|| {
                ServiceError::Validation(format!("Invalid itemType '{}'; must be 'ONT' or 'SWITCH'", s))
            })?),
            None => None,
        };
        Ok(Self {
            work_order_number: non_empty(&q.work_order_number),
            customer_name: non_empty(&q.customer_name).map(str::to_lowercase),
            item_type,
            start_mac_id: non_empty(&q.start_mac_id),
        })
    }

    fn matches(&self, order: &WorkOrder) -> bool {
        if self.work_order_number.is_some_and(|n| n != order.work_order_number) {
            return false;
        }
        if let Some(needle) = &self.customer_name {
            if !order.customer_name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if self.item_type.is_some_and(|t| t != order.item_type) {
            return false;
        }
        if let Some(start) = self.start_mac_id {
            if order.start_mac_id.as_deref() != Some(start) {
                return false;
            }
        }
        true
    }
}

impl MacGenService {
    /// Filter, sort and paginate work orders. Pagination and the item type
    /// are validated before the store is read.
    pub fn search(&self, query: &SearchQuery) -> Result<Page<WorkOrder>, ServiceError> {
        let page = positive_param(query.page.as_ref(), "page", DEFAULT_PAGE)?;
        let limit = positive_param(query.limit.as_ref(), "limit", DEFAULT_LIMIT)?;
        let filter = Filter::from_query(query)?;
        let sort = SortOrder::from_param(query.date.as_deref());

        let mut matched: Vec<WorkOrder> = self
            .list_work_orders()?
            .into_iter()
            .filter(|o| filter.matches(o))
            .collect();

        if let Some(sort) = sort {
            matched.sort_by_cached_key(|o| (created_at(o), o.order_sequence));
            if sort == SortOrder::Latest {
                matched.reverse();
            }
        }

        debug!("search matched {} work-orders (page {}, limit {})", matched.len(), page, limit);
        Ok(Page::slice(matched, page, limit))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn created_at(order: &WorkOrder) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(&order.create_at).ok()
}

/// Positive integer from a JSON number or numeric string; `default` when
/// absent or null.
fn positive_param(value: Option<&Value>, name: &str, default: usize) -> Result<usize, ServiceError> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    match parsed.and_then(|n| usize::try_from(n).ok()) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(ServiceError::Validation(format!("{} must be a positive integer", name))),
    }
}
