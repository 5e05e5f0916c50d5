//! Builder for the data API's query-string operators.

/// An ordered set of query parameters for one table request.
///
/// Operators compose left to right exactly as they will appear on the URL;
/// the REST layer passes them straight to [`reqwest::RequestBuilder::query`].
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the returned columns (comma-separated list).
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_owned(), columns.to_owned()));
        self
    }

    /// Equality filter on one column.
    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.params
            .push((column.to_owned(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Case-insensitive pattern match (`%` wildcards).
    pub fn ilike(mut self, column: &str, pattern: impl AsRef<str>) -> Self {
        self.params
            .push((column.to_owned(), format!("ilike.{}", pattern.as_ref())));
        self
    }

    /// Sort by one column, descending.
    pub fn order_desc(mut self, column: &str) -> Self {
        self.params
            .push(("order".to_owned(), format!("{column}.desc")));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".to_owned(), count.to_string()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_list_query_builds_the_expected_operators() {
        let query = Query::new()
            .select("id,title,category,image_url,user_id,created_at")
            .eq("category", "Desserts")
            .order_desc("created_at")
            .limit(12);

        assert_eq!(
            query.params(),
            &[
                (
                    "select".to_owned(),
                    "id,title,category,image_url,user_id,created_at".to_owned()
                ),
                ("category".to_owned(), "eq.Desserts".to_owned()),
                ("order".to_owned(), "created_at.desc".to_owned()),
                ("limit".to_owned(), "12".to_owned()),
            ]
        );
    }

    #[test]
    fn ownership_scope_stacks_two_equality_filters() {
        let query = Query::new().eq("id", "r1").eq("user_id", "u1");
        assert_eq!(
            query.params(),
            &[
                ("id".to_owned(), "eq.r1".to_owned()),
                ("user_id".to_owned(), "eq.u1".to_owned()),
            ]
        );
    }

    #[test]
    fn search_uses_ilike_with_wildcards() {
        let query = Query::new().ilike("title", "%shrimp%");
        assert_eq!(
            query.params(),
            &[("title".to_owned(), "ilike.%shrimp%".to_owned())]
        );
    }
}
