//! Price formatting.

use crate::Cents;

/// Format minor units as a dollar string: `1724` becomes `"$17.24"`.
pub fn format_price(cents: Cents) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
