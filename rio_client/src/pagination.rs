//! Walking every page of a list endpoint.

use std::future::Future;

use crate::{
    query::PageQuery,
    types::{ListResult, Response},
    Error,
};

/// Fetches pages `0..totalPages` with `per_page` items each and returns the
/// concatenated items.
///
/// ```no_run
/// # async fn example(client: &rio_client::Client) -> Result<(), rio_client::Error> {
/// let brokers = rio_client::collect_pages(100, |query| async move {
///     client.list_brokers(&query).await
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn collect_pages<L, F, Fut>(per_page: i64, mut fetch: F) -> Result<Vec<L::Item>, Error>
where
    L: ListResult,
    F: FnMut(PageQuery) -> Fut,
    Fut: Future<Output = Result<Response<L>, Error>>,
{
    let mut items = Vec::new();
    let mut page = 0;
    loop {
        let response = fetch(PageQuery::new(page, per_page)).await?;
        let total_pages = response.page().total_pages;
        items.extend(response.into_inner().into_items());
        page += 1;
        if page >= total_pages {
            break;
        }
    }
    Ok(items)
}
