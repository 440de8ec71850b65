//! Invocation parameters and their conversion into [`FilterCriteria`].

use clap::builder::NonEmptyStringValueParser;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use thiserror::Error;

use crate::filter::FilterCriteria;

pub const DEFAULT_SEARCH_TERM: &str = "Counter Strike";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvocationError {
    #[error("search term must not be empty")]
    EmptySearchTerm,
    #[error("discount must be between 0 and 100, got {0}")]
    DiscountOutOfRange(i64),
    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),
    #[error("price {0} is too large")]
    PriceOutOfRange(Decimal),
    #[error("invalid price {0:?}: {1}")]
    InvalidPrice(String, String),
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct InvocationParams {
    /// Name of the item to search for
    #[arg(
        long,
        env = "STEAM_DEALS_SEARCH_TERM",
        default_value = DEFAULT_SEARCH_TERM,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub search_term: String,

    /// Minimum discount wanted, in percent. 0 disables the check
    #[arg(
        long,
        env = "STEAM_DEALS_DISCOUNT",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub discount: u8,

    /// Maximum price wanted, in reais. 0 disables the check
    #[arg(long, env = "STEAM_DEALS_PRICE", default_value = "0", value_parser = parse_money)]
    pub price: Decimal,
}

impl Default for InvocationParams {
    fn default() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            discount: 0,
            price: Decimal::ZERO,
        }
    }
}

impl InvocationParams {
    pub fn criteria(&self) -> Result<FilterCriteria, InvocationError> {
        if self.search_term.is_empty() {
            return Err(InvocationError::EmptySearchTerm);
        }
        let min_discount_percent = i64::from(self.discount);
        if min_discount_percent > 100 {
            return Err(InvocationError::DiscountOutOfRange(min_discount_percent));
        }
        Ok(FilterCriteria {
            search_term: self.search_term.clone(),
            max_price_cents: price_to_cents(self.price)?,
            min_discount_percent,
        })
    }
}

/// Converts an amount of money to cents, dropping anything past the second decimal.
pub fn price_to_cents(price: Decimal) -> Result<i64, InvocationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(InvocationError::NegativePrice(price));
    }
    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.trunc().to_i64())
        .ok_or(InvocationError::PriceOutOfRange(price))
}

/// Accepts `10`, `10.5` or `10,50`.
fn parse_money(value: &str) -> Result<Decimal, InvocationError> {
    let normalized = value.trim().replace(',', ".");
    let price: Decimal = normalized
        .parse()
        .map_err(|e: rust_decimal::Error| InvocationError::InvalidPrice(value.to_string(), e.to_string()))?;
    price_to_cents(price)?;
    Ok(price)
}
