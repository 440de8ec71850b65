use storesearch::{SearchResultItem, StoreSearchClient};
use tracing::{info, instrument};

use crate::{
    alert::{alert_from_item, Alerts},
    filter::{FilterCriteria, ItemFilter},
};

/// Runs one invocation: a single search request, then filtering and formatting.
///
/// Transport and decoding errors are returned as-is; nothing is retried.
#[instrument(skip(client, criteria), fields(search_term = %criteria.search_term))]
pub async fn search_alerts(
    client: &StoreSearchClient,
    criteria: &FilterCriteria,
) -> Result<Alerts, storesearch::Error> {
    let results = client.search(&criteria.search_term).await?;
    let received = results.items.len();
    let alerts = collect_alerts(results.items, &ItemFilter::new(criteria));
    info!(received, matched = alerts.len(), "search complete");
    Ok(alerts)
}

/// Keeps the items that pass `filter` and formats them. Later duplicates of an id replace earlier ones.
pub fn collect_alerts(
    items: impl IntoIterator<Item = SearchResultItem>,
    filter: &ItemFilter,
) -> Alerts {
    items
        .into_iter()
        .filter(|item| filter.matches(item))
        .map(|item| alert_from_item(&item))
        .collect()
}
