//! Searches the Steam storefront and turns the results that meet a price
//! ceiling and/or a discount floor into alert messages keyed by app id.

pub mod alert;
pub mod discount;
pub mod filter;
pub mod params;
pub mod pipeline;

pub use alert::{AlertRecord, Alerts};
pub use filter::{FilterCriteria, ItemFilter};
pub use params::{InvocationError, InvocationParams};
pub use pipeline::search_alerts;
