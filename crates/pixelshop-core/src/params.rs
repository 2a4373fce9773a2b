//! The navigable-location codec.
//!
//! A view is fully described by a flat string-keyed parameter map, so it
//! survives reloads and can be shared as a query string. Decoding is
//! tolerant by contract: malformed numeric values read as absent (never
//! zero), unknown sort tokens fall back to defaults, and nothing in here
//! can fail. Encoding is canonical: default-valued and absent fields are
//! omitted, never written as empty or null tokens.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rust_decimal::Decimal;

use crate::query::{QueryState, SortField, SortOrder, DEFAULT_LIMIT, DEFAULT_PAGE};

pub const KEY_PAGE: &str = "page";
pub const KEY_LIMIT: &str = "limit";
pub const KEY_SEARCH: &str = "search";
pub const KEY_CATEGORY: &str = "category";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_IN_STOCK: &str = "inStock";
pub const KEY_SORT_FIELD: &str = "sortField";
pub const KEY_SORT_ORDER: &str = "sortOrder";

/// The flat string-keyed parameter map the location stores.
pub type ParamMap = BTreeMap<String, String>;

/// Characters percent-encoded in query-string keys and values: everything
/// outside the RFC 3986 unreserved set.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Decodes a parameter map into a [`QueryState`].
///
/// Never fails: absent or malformed values yield the field's default
/// (`page`, `limit`, sort) or absence (filters). `inStock` is only read
/// when the key is present — a present `"false"` is a real constraint, not
/// an absent one.
#[must_use]
pub fn decode(params: &ParamMap) -> QueryState {
    QueryState {
        search: non_empty(params.get(KEY_SEARCH)),
        category: non_empty(params.get(KEY_CATEGORY)),
        min_price: parse_decimal(params.get(KEY_MIN_PRICE)),
        max_price: parse_decimal(params.get(KEY_MAX_PRICE)),
        in_stock: params.get(KEY_IN_STOCK).and_then(|v| match v.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }),
        sort_field: params
            .get(KEY_SORT_FIELD)
            .map_or_else(SortField::default, |v| SortField::from_param(v)),
        sort_order: params
            .get(KEY_SORT_ORDER)
            .map_or_else(SortOrder::default, |v| SortOrder::from_param(v)),
        page: parse_u32(params.get(KEY_PAGE)).unwrap_or(DEFAULT_PAGE),
        limit: parse_u32(params.get(KEY_LIMIT)).unwrap_or(DEFAULT_LIMIT),
    }
}

/// Encodes a [`QueryState`] into its canonical parameter map.
///
/// Fields equal to their default are omitted, as are absent optionals, so
/// `encode(decode(m))` reproduces `m` minus redundant keys.
#[must_use]
pub fn encode(query: &QueryState) -> ParamMap {
    let mut params = ParamMap::new();
    if let Some(search) = &query.search {
        params.insert(KEY_SEARCH.to_string(), search.clone());
    }
    if let Some(category) = &query.category {
        params.insert(KEY_CATEGORY.to_string(), category.clone());
    }
    if let Some(min) = query.min_price {
        params.insert(KEY_MIN_PRICE.to_string(), min.to_string());
    }
    if let Some(max) = query.max_price {
        params.insert(KEY_MAX_PRICE.to_string(), max.to_string());
    }
    if let Some(in_stock) = query.in_stock {
        params.insert(KEY_IN_STOCK.to_string(), in_stock.to_string());
    }
    if query.sort_field != SortField::default() {
        params.insert(
            KEY_SORT_FIELD.to_string(),
            query.sort_field.as_param().to_string(),
        );
    }
    if query.sort_order != SortOrder::default() {
        params.insert(
            KEY_SORT_ORDER.to_string(),
            query.sort_order.as_param().to_string(),
        );
    }
    if query.page != DEFAULT_PAGE {
        params.insert(KEY_PAGE.to_string(), query.page.to_string());
    }
    if query.limit != DEFAULT_LIMIT {
        params.insert(KEY_LIMIT.to_string(), query.limit.to_string());
    }
    params
}

/// Parses a raw query string (without the leading `?`) into a parameter
/// map. Pairs that fail UTF-8 percent-decoding are dropped; a repeated key
/// keeps its last value.
#[must_use]
pub fn parse_query_string(raw: &str) -> ParamMap {
    let mut params = ParamMap::new();
    for pair in raw.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = value.replace('+', " ");
        let (Ok(key), Ok(value)) = (
            percent_decode_str(key).decode_utf8(),
            percent_decode_str(&value).decode_utf8(),
        ) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        params.insert(key.into_owned(), value.into_owned());
    }
    params
}

/// Serializes a parameter map as a percent-encoded query string (without
/// the leading `?`). Schema keys come out in the documented order; any
/// unrecognized keys follow alphabetically.
#[must_use]
pub fn encode_query_string(params: &ParamMap) -> String {
    const SCHEMA_ORDER: [&str; 9] = [
        KEY_PAGE,
        KEY_LIMIT,
        KEY_SEARCH,
        KEY_CATEGORY,
        KEY_MIN_PRICE,
        KEY_MAX_PRICE,
        KEY_IN_STOCK,
        KEY_SORT_FIELD,
        KEY_SORT_ORDER,
    ];

    let mut pairs = Vec::with_capacity(params.len());
    for key in SCHEMA_ORDER {
        if let Some(value) = params.get(key) {
            pairs.push(encode_pair(key, value));
        }
    }
    for (key, value) in params {
        if !SCHEMA_ORDER.contains(&key.as_str()) {
            pairs.push(encode_pair(key, value));
        }
    }
    pairs.join("&")
}

fn encode_pair(key: &str, value: &str) -> String {
    format!(
        "{}={}",
        utf8_percent_encode(key, QUERY_COMPONENT),
        utf8_percent_encode(value, QUERY_COMPONENT)
    )
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

fn parse_decimal(value: Option<&String>) -> Option<Decimal> {
    value.and_then(|v| v.parse().ok())
}

fn parse_u32(value: Option<&String>) -> Option<u32> {
    value.and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> ParamMap {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_decodes_to_defaults() {
        assert_eq!(decode(&ParamMap::new()), QueryState::default());
    }

    #[test]
    fn full_map_decodes_every_field() {
        let params = map(&[
            ("page", "3"),
            ("limit", "24"),
            ("search", "pixel"),
            ("category", "smartphones"),
            ("minPrice", "10.50"),
            ("maxPrice", "99"),
            ("inStock", "true"),
            ("sortField", "price"),
            ("sortOrder", "desc"),
        ]);
        let query = decode(&params);
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 24);
        assert_eq!(query.search.as_deref(), Some("pixel"));
        assert_eq!(query.category.as_deref(), Some("smartphones"));
        assert_eq!(query.min_price, Some("10.50".parse().unwrap()));
        assert_eq!(query.max_price, Some("99".parse().unwrap()));
        assert_eq!(query.in_stock, Some(true));
        assert_eq!(query.sort_field, SortField::Price);
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn malformed_numbers_read_as_absent_not_zero() {
        let params = map(&[("minPrice", "cheap"), ("maxPrice", ""), ("page", "two")]);
        let query = decode(&params);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
        assert_eq!(query.page, DEFAULT_PAGE);
    }

    #[test]
    fn in_stock_false_is_a_constraint_when_present() {
        let query = decode(&map(&[("inStock", "false")]));
        assert_eq!(query.in_stock, Some(false));
    }

    #[test]
    fn in_stock_garbage_value_reads_as_absent() {
        let query = decode(&map(&[("inStock", "maybe")]));
        assert_eq!(query.in_stock, None);
    }

    #[test]
    fn empty_search_reads_as_absent() {
        let query = decode(&map(&[("search", "")]));
        assert_eq!(query.search, None);
    }

    #[test]
    fn encode_omits_defaults_entirely() {
        assert!(encode(&QueryState::default()).is_empty());
    }

    #[test]
    fn encode_omits_cleared_fields_rather_than_writing_empty_tokens() {
        let query = QueryState {
            search: None,
            page: 2,
            ..QueryState::default()
        };
        let params = encode(&query);
        assert!(!params.contains_key(KEY_SEARCH));
        assert_eq!(params.get(KEY_PAGE).map(String::as_str), Some("2"));
    }

    #[test]
    fn roundtrip_drops_only_redundant_keys() {
        let original = map(&[
            ("page", "2"),
            ("search", "usb cable"),
            ("inStock", "false"),
            ("sortField", "price"),
            ("sortOrder", "asc"), // default: redundant
            ("limit", "12"),      // default: redundant
        ]);
        let roundtripped = encode(&decode(&original));
        let expected = map(&[("page", "2"), ("search", "usb cable"), ("inStock", "false"), ("sortField", "price")]);
        assert_eq!(roundtripped, expected);
    }

    #[test]
    fn roundtrip_is_idempotent() {
        let once = encode(&decode(&map(&[("search", "tv"), ("maxPrice", "300")])));
        let twice = encode(&decode(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn query_string_roundtrip_preserves_reserved_characters() {
        let params = map(&[("search", "50% off & more"), ("page", "2")]);
        let encoded = encode_query_string(&params);
        assert_eq!(parse_query_string(&encoded), params);
    }

    #[test]
    fn query_string_schema_keys_come_out_in_documented_order() {
        let params = map(&[("sortField", "price"), ("page", "2"), ("search", "tv")]);
        assert_eq!(encode_query_string(&params), "page=2&search=tv&sortField=price");
    }

    #[test]
    fn parse_query_string_tolerates_leading_question_mark_and_plus() {
        let params = parse_query_string("?search=usb+cable&page=2");
        assert_eq!(params.get("search").map(String::as_str), Some("usb cable"));
        assert_eq!(params.get("page").map(String::as_str), Some("2"));
    }

    #[test]
    fn parse_query_string_skips_empty_pairs_and_keeps_last_duplicate() {
        let params = parse_query_string("page=1&&page=4&=orphan");
        assert_eq!(params.get("page").map(String::as_str), Some("4"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn decoded_query_string_feeds_decode() {
        let query = decode(&parse_query_string("search=phone&minPrice=100&sortOrder=desc"));
        assert_eq!(query.search.as_deref(), Some("phone"));
        assert_eq!(query.min_price, Some("100".parse().unwrap()));
        assert_eq!(query.sort_order, SortOrder::Desc);
    }
}
