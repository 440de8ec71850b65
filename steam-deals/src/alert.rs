use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use storesearch::{ItemId, SearchResultItem};

use crate::discount::discount_percent;

const STORE_APP_URL: &str = "http://store.steampowered.com/app";

/// A formatted alert for one matching item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub title: String,
    /// Markdown
    pub comment: String,
}

/// Every alert produced by one invocation, keyed by item id.
pub type Alerts = BTreeMap<ItemId, AlertRecord>;

/// Renders cents as `R$ X.XX`. A missing price renders as `R$ --`.
pub fn format_price(cents: Option<i64>) -> String {
    match cents {
        Some(cents) => format!("R$ {}", Decimal::new(cents, 2)),
        None => "R$ --".to_string(),
    }
}

pub fn alert_from_item(item: &SearchResultItem) -> (ItemId, AlertRecord) {
    let discount = discount_percent(item);
    let final_price = format_price(item.price.as_ref().and_then(|price| price.final_cents));
    let SearchResultItem {
        id,
        name,
        tiny_image,
        ..
    } = item;
    let mut title = format!("{name} a {final_price}");
    // negative discounts (price went up) still count as no discount here
    if discount > 0 {
        title.push_str(&format!(" com {discount}% de desconto"));
    }
    let comment =
        format!("### {name} - **{final_price}**\n\n[![Acessar]({tiny_image})]({STORE_APP_URL}/{id})");
    (*id, AlertRecord { title, comment })
}
