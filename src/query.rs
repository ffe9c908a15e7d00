//! Query-string parameters for list endpoints.

use chrono::NaiveDate;
use url::Url;

/// Date format LiquidPlanner accepts for `from_date`/`to_date` filters.
const DATE_FORMAT: &str = "%m/%d/%Y";

/// Ordered query-string parameters.
///
/// Keys may repeat (`filter[]` does). An empty query adds nothing to the URL,
/// not even the `?`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use liquidplanner::Query;
///
/// let query = Query::new()
///     .from_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .limit(10)
///     .filter("is_done is false");
/// assert_eq!(query.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Maximum number of items to return.
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    /// Only items on or after this date.
    #[must_use]
    pub fn from_date(self, date: NaiveDate) -> Self {
        self.param("from_date", date.format(DATE_FORMAT))
    }

    /// Only items on or before this date.
    #[must_use]
    pub fn to_date(self, date: NaiveDate) -> Self {
        self.param("to_date", date.format(DATE_FORMAT))
    }

    /// Add a filter expression such as `"is_done is false"`.
    #[must_use]
    pub fn filter(self, expression: impl Into<String>) -> Self {
        self.param("filter[]", expression.into())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encode the parameters onto `url`, replacing any existing query.
    pub(crate) fn apply_to(&self, url: &mut Url) {
        if self.pairs.is_empty() {
            url.set_query(None);
            return;
        }
        url.query_pairs_mut()
            .clear()
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Query::new(), |query, (k, v)| query.param(k, v))
    }
}
