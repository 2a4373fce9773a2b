use rust_decimal::Decimal;

/// Page shown when the location names none.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the location names none.
pub const DEFAULT_LIMIT: u32 = 12;

/// Which product field a query sorts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Title,
    Price,
}

impl SortField {
    /// The value this field serializes to in the location parameter map.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Price => "price",
        }
    }

    /// Parses a location parameter value. Unrecognized values fall back to
    /// the default — the decode step never rejects.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "price" => SortField::Price,
            _ => SortField::Title,
        }
    }
}

/// Direction of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The value this order serializes to in the location parameter map.
    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Parses a location parameter value. Unrecognized values fall back to
    /// ascending.
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// The desired catalog view: filters, sort, and paging.
///
/// This is a plain value object with no storage of its own — it is decoded
/// from the navigable location's parameter map on every navigation and
/// serialized back on every commit. Absent optional fields mean "no
/// constraint".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive substring match against product titles only.
    pub search: Option<String>,
    /// Case-insensitive category equality.
    pub category: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    pub max_price: Option<Decimal>,
    /// `Some(true)` = in stock only, `Some(false)` = out of stock only,
    /// `None` = both.
    pub in_stock: Option<bool>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// 1-based page number. Not clamped anywhere: a page past the end of
    /// the result set evaluates to an empty slice.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            min_price: None,
            max_price: None,
            in_stock: None,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryState {
    /// Returns `true` if any filter field (not sort or paging) constrains
    /// the result set.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.search.is_some()
            || self.category.is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.in_stock.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_state_has_spec_defaults() {
        let query = QueryState::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 12);
        assert_eq!(query.sort_field, SortField::Title);
        assert_eq!(query.sort_order, SortOrder::Asc);
        assert!(!query.has_active_filters());
    }

    #[test]
    fn sort_field_param_roundtrip() {
        assert_eq!(SortField::from_param(SortField::Price.as_param()), SortField::Price);
        assert_eq!(SortField::from_param(SortField::Title.as_param()), SortField::Title);
    }

    #[test]
    fn sort_field_unknown_param_falls_back_to_title() {
        assert_eq!(SortField::from_param("rating"), SortField::Title);
    }

    #[test]
    fn sort_order_unknown_param_falls_back_to_asc() {
        assert_eq!(SortOrder::from_param("descending"), SortOrder::Asc);
        assert_eq!(SortOrder::from_param("desc"), SortOrder::Desc);
    }

    #[test]
    fn any_single_filter_field_is_active() {
        let query = QueryState {
            in_stock: Some(false),
            ..QueryState::default()
        };
        assert!(query.has_active_filters());
    }
}
