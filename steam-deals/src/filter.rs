use storesearch::SearchResultItem;
use tracing::debug;

use crate::discount::discount_percent;

/// What one invocation is looking for. A zero threshold means "don't care".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub max_price_cents: i64,
    pub min_discount_percent: i64,
}

/// Predicates built once per invocation from [`FilterCriteria`].
///
/// An item survives when it has a price block and passes every active
/// threshold. Inactive thresholds always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFilter {
    price_ceiling: Option<i64>,
    discount_floor: Option<i64>,
}

impl ItemFilter {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            price_ceiling: (criteria.max_price_cents != 0).then_some(criteria.max_price_cents),
            discount_floor: (criteria.min_discount_percent != 0)
                .then_some(criteria.min_discount_percent),
        }
    }

    pub fn matches(&self, item: &SearchResultItem) -> bool {
        let matched = Self::has_price(item) && self.price_ok(item) && self.discount_ok(item);
        if !matched {
            debug!(item = %item.id, name = %item.name, "item filtered out");
        }
        matched
    }

    fn has_price(item: &SearchResultItem) -> bool {
        item.price.is_some()
    }

    fn price_ok(&self, item: &SearchResultItem) -> bool {
        let Some(ceiling) = self.price_ceiling else {
            return true;
        };
        item.price
            .as_ref()
            .and_then(|price| price.final_cents)
            .is_some_and(|final_cents| final_cents <= ceiling)
    }

    fn discount_ok(&self, item: &SearchResultItem) -> bool {
        self.discount_floor
            .map_or(true, |floor| discount_percent(item) >= floor)
    }
}
