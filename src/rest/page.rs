//! Paginated list envelopes.
//!
//! Printify wraps list results in a Laravel-style envelope: the items sit in
//! `data`, next to page counters and navigation URLs.

use serde::{Deserialize, Deserializer, Serialize};

/// A navigation entry in [`Page::links`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PageLink {
    /// Target URL, `None` for disabled entries such as "previous" on page 1.
    pub url: Option<String>,
    /// Display label, e.g. `"1"` or `"Next &raquo;"`.
    #[serde(default)]
    pub label: String,
    /// Whether this entry is the current page.
    #[serde(default)]
    pub active: bool,
}

/// One page of results.
///
/// `data` is never null: a null or missing `data` decodes as `T::default()`.
///
/// # Example
///
/// ```rust
/// use printify_api::rest::Page;
///
/// let json = r#"{"current_page":1,"data":[1,2],"last_page":3,"per_page":2,"total":6}"#;
/// let page: Page<Vec<u32>> = serde_json::from_str(json).unwrap();
///
/// assert_eq!(page.data, vec![1, 2]);
/// assert_eq!(page.next_page(), Some(2));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Page<T> {
    /// The 1-based number of this page.
    #[serde(deserialize_with = "lenient_u32")]
    pub current_page: u32,

    /// The items on this page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: T,

    #[serde(default)]
    pub first_page_url: Option<String>,

    /// Index of the first item on this page, `None` when the page is empty.
    #[serde(default)]
    pub from: Option<u64>,

    /// Number of the last page.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub last_page: u32,

    #[serde(default)]
    pub last_page_url: Option<String>,

    /// Navigation links for rendering a pager.
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<PageLink>,

    #[serde(default)]
    pub next_page_url: Option<String>,

    /// The collection URL without query parameters.
    #[serde(default)]
    pub path: Option<String>,

    /// Maximum items per page.
    #[serde(default, deserialize_with = "lenient_u32")]
    pub per_page: u32,

    #[serde(default)]
    pub prev_page_url: Option<String>,

    /// Index of the last item on this page, `None` when the page is empty.
    #[serde(default)]
    pub to: Option<u64>,

    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
}

impl<T> Page<T> {
    /// Returns the number of the following page, or `None` on the last page.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.current_page < self.last_page {
            Some(self.current_page + 1)
        } else {
            None
        }
    }

    /// Returns `true` if there is a page after this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// Consumes the page, returning its items.
    pub fn into_data(self) -> T {
        self.data
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Counters occasionally arrive as strings (`"per_page": "10"`).
fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Counter {
        Number(u32),
        Text(String),
    }

    match Counter::deserialize(deserializer)? {
        Counter::Number(value) => Ok(value),
        Counter::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
