//! Query-string builder for PostgREST filter and selection conventions.
//!
//! Values are kept literal; percent-encoding happens exactly once when the
//! pairs are attached to a request.

use std::fmt::Display;

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Ordered list of `column=op.value` filters plus optional `select` / `order`.
///
/// ```
/// use axelin_postgrest::{Order, Query};
///
/// let pairs = Query::new()
///     .eq("parent_id", 3)
///     .order("name", Order::Asc)
///     .select("*")
///     .into_pairs();
///
/// assert_eq!(
///     pairs,
///     vec![
///         ("parent_id".to_string(), "eq.3".to_string()),
///         ("select".to_string(), "*".to_string()),
///         ("order".to_string(), "name.asc".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    filters: Vec<(String, String)>,
    select: Option<String>,
    order: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on `column = value`.
    pub fn eq(mut self, column: &str, value: impl Display) -> Self {
        self.filters.push((column.to_string(), format!("eq.{value}")));
        self
    }

    /// Filter on `column IS NULL`.
    pub fn is_null(mut self, column: &str) -> Self {
        self.filters.push((column.to_string(), "is.null".to_string()));
        self
    }

    /// Filter on `column IN (values...)`. Items containing PostgREST
    /// reserved characters are double-quoted.
    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        let items: Vec<String> = values
            .into_iter()
            .map(|v| quote_list_item(&v.to_string()))
            .collect();
        self.filters
            .push((column.to_string(), format!("in.({})", items.join(","))));
        self
    }

    /// Columns (or embedding expression) to return.
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// Append a sort key. Repeated calls sort by multiple columns.
    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order.push(format!("{column}.{}", direction.as_str()));
        self
    }

    /// Default the selection to `*` when none was given.
    pub fn or_select_all(mut self) -> Self {
        if self.select.is_none() {
            self.select = Some("*".to_string());
        }
        self
    }

    /// Flatten into query pairs: filters first, then `select`, then `order`.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        let mut pairs = self.filters;
        if let Some(select) = self.select {
            pairs.push(("select".to_string(), select));
        }
        if !self.order.is_empty() {
            pairs.push(("order".to_string(), self.order.join(",")));
        }
        pairs
    }
}

fn quote_list_item(item: &str) -> String {
    const RESERVED: &[char] = &[',', '.', ':', '(', ')', '"', '\\', ' '];
    if item.contains(RESERVED) {
        let escaped = item.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    } else {
        item.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: Query) -> Vec<(String, String)> {
        query.into_pairs()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn by_id_lookup_shape() {
        assert_eq!(
            pairs(Query::new().eq("id", 7).select("*")),
            vec![pair("id", "eq.7"), pair("select", "*")]
        );
    }

    #[test]
    fn values_are_not_pre_encoded() {
        assert_eq!(
            pairs(Query::new().eq("slug", "a b&c")),
            vec![pair("slug", "eq.a b&c")]
        );
    }

    #[test]
    fn is_null_filter() {
        assert_eq!(
            pairs(Query::new().is_null("parent_id")),
            vec![pair("parent_id", "is.null")]
        );
    }

    #[test]
    fn in_list_quotes_reserved_items() {
        assert_eq!(
            pairs(Query::new().in_list("name", ["plain", "a,b", "say \"hi\""])),
            vec![pair("name", r#"in.(plain,"a,b","say \"hi\"")"#)]
        );
    }

    #[test]
    fn multiple_orders_joined() {
        assert_eq!(
            pairs(
                Query::new()
                    .order("status", Order::Asc)
                    .order("created_at", Order::Desc)
            ),
            vec![pair("order", "status.asc,created_at.desc")]
        );
    }

    #[test]
    fn or_select_all_keeps_explicit_select() {
        assert_eq!(
            pairs(Query::new().eq("id", 1).or_select_all()),
            vec![pair("id", "eq.1"), pair("select", "*")]
        );
        assert_eq!(
            pairs(Query::new().select("id,name").or_select_all()),
            vec![pair("select", "id,name")]
        );
    }
}
