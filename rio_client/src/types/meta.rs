use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Body used when a call decodes "nothing": an empty 2xx response is parsed
/// from this document.
pub(crate) const EMPTY_BODY: &str = "{}";

/// One page of a list result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Zero-based page number.
    pub number: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl PageInfo {
    /// `true` when a page follows this one.
    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}

/// Uniform view over the list responses, whatever their item field is called.
pub trait ListResult {
    type Item;

    fn page(&self) -> &PageInfo;
    fn items(&self) -> &[Self::Item];
    fn into_items(self) -> Vec<Self::Item>;
}

/// Implements [`ListResult`] for a list response with `page` and an item vec.
macro_rules! list_result {
    ($list:ty, $field:ident, $item:ty) => {
        impl $crate::types::ListResult for $list {
            type Item = $item;

            fn page(&self) -> &$crate::types::PageInfo {
                &self.page
            }

            fn items(&self) -> &[$item] {
                &self.$field
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}
pub(crate) use list_result;

/// A decoded response together with the HTTP status it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub status_code: u16,
    pub data: T,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// The canonical empty response (204s, deletes, zero-length bodies).
///
/// Decodes from any JSON object, so calls that sometimes echo a body still
/// succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// Body sent by calls that carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmptyRequest {}
