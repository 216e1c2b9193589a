use serde::{Deserialize, Serialize};

/// One fetched batch of a listing.
///
/// Item order is the server's and is preserved as-is. `next_cursor` is an
/// opaque token: the client never constructs or inspects it, only passes
/// it back verbatim to get the following page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the server reported no further page.
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Wire shape of a listing response: `results` plus a `next` link.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
}

impl<T> ListResponse<T> {
    /// Convert to a [`Page`], extracting the reusable cursor token from
    /// the `next` link. Endpoints differ in how they format the link
    /// (bare token vs. full URL), so extraction is injected.
    pub fn into_page(self, extract: impl Fn(&str) -> Option<String>) -> Page<T> {
        let next_cursor = self
            .next
            .as_deref()
            .and_then(extract)
            .filter(|cursor| !cursor.is_empty());
        Page {
            items: self.results,
            next_cursor,
        }
    }
}

/// Extractor for endpoints whose `next` field is already a bare token.
pub fn cursor_verbatim(next: &str) -> Option<String> {
    (!next.is_empty()).then(|| next.to_string())
}

/// Extractor for endpoints whose `next` field is a full URL carrying the
/// token in a `cursor` query parameter.
pub fn cursor_from_url(next: &str) -> Option<String> {
    let (_, query) = next.split_once('?')?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == "cursor" && !value.is_empty()).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_verbatim() {
        assert_eq!(cursor_verbatim("abc"), Some("abc".to_string()));
        assert_eq!(cursor_verbatim(""), None);
    }

    #[test]
    fn test_cursor_from_url() {
        assert_eq!(
            cursor_from_url("https://api.example.com/departments/?cursor=cD0yMA%3D%3D&page_size=25"),
            Some("cD0yMA%3D%3D".to_string())
        );
        assert_eq!(
            cursor_from_url("https://api.example.com/departments/?page_size=25&cursor=abc"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn test_cursor_from_url_without_token() {
        assert_eq!(cursor_from_url("https://api.example.com/departments/"), None);
        assert_eq!(
            cursor_from_url("https://api.example.com/departments/?page_size=25"),
            None
        );
        assert_eq!(
            cursor_from_url("https://api.example.com/departments/?cursor="),
            None
        );
    }

    #[test]
    fn test_into_page() {
        let response = ListResponse {
            results: vec![1, 2, 3],
            next: Some("https://api.example.com/items/?cursor=tok".to_string()),
        };
        let page = response.into_page(cursor_from_url);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.next_cursor.as_deref(), Some("tok"));
        assert!(!page.is_last());
    }

    #[test]
    fn test_list_response_wire_shape() {
        let response: ListResponse<serde_json::Value> = serde_json::from_str(
            r#"{"results": [{"id": 1}, {"id": 2}], "next": "https://api.example.test/items/?cursor=abc"}"#,
        )
        .unwrap();
        let page = response.into_page(cursor_from_url);
        assert_eq!(page.len(), 2);
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));

        // A missing `next` field means the listing ends here.
        let response: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.next.is_none());
    }

    #[test]
    fn test_into_page_last() {
        let response: ListResponse<i32> = ListResponse {
            results: vec![9],
            next: None,
        };
        let page = response.into_page(cursor_verbatim);
        assert!(page.is_last());
    }
}
