//! Roster Assembly
//!
//! Pure transformation from raw sheet rows to the public roster. Column
//! headers come from the sheet itself; only the wishlist columns and the
//! consent column are known by name.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::Serialize;

/// Comma-separated supply wish columns, both mapped to `classroom_supply`.
const SUPPLY_COLUMNS: [&str; 2] = ["Top Classroom Supply Wishes", "Favorite Classroom Supplies"];

const GIFT_CARD_5_COLUMN: &str =
    "If you found a gift card for $5, where would you want it to be from?";
// The form itself says "or" here; the header must match it verbatim.
const GIFT_CARD_20_COLUMN: &str =
    "If you found a gift card or $20, where would you want it to be from?";

/// One form response, keyed by the sheet's column headers, plus `id`.
pub type ResponseRow = BTreeMap<String, String>;

/// A de-duplicated anonymous wishlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WishlistItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub item: String,
}

/// The assembled roster.
#[derive(Debug, Clone)]
pub struct TeacherRoster {
    /// Consenting responses; all responses when nobody consented
    pub requests: Vec<ResponseRow>,
    /// Wishlist items from the non-consenting responses
    pub anonymous_items: Vec<WishlistItem>,
    /// Every non-blank response, consenting or not
    pub total_teachers: usize,
}

impl TeacherRoster {
    /// Assemble the roster from raw rows (header row first).
    ///
    /// Ids follow the sheet row position, so a response keeps its id even
    /// when blank rows above it are dropped.
    pub fn assemble(rows: Vec<Vec<String>>, consent_column: &str) -> Option<Self> {
        let mut rows = rows.into_iter();
        let headers = rows.next()?;

        let responses: Vec<ResponseRow> = rows
            .enumerate()
            .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
            .map(|(index, row)| {
                let mut response: ResponseRow = headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| (header.clone(), row.get(i).cloned().unwrap_or_default()))
                    .collect();
                response.insert("id".to_string(), format!("teacher_{}", index + 1));
                response
            })
            .collect();

        let total_teachers = responses.len();

        let (public, anonymous): (Vec<_>, Vec<_>) = responses
            .iter()
            .cloned()
            .partition(|response| !declined(response, consent_column));

        let anonymous_items = wishlist_items(&anonymous);

        // Nobody consenting usually means the consent column was renamed,
        // so fail open and show everything.
        let requests = if public.is_empty() { responses } else { public };

        Some(Self {
            requests,
            anonymous_items,
            total_teachers,
        })
    }
}

/// A response is anonymous only when the consent answer contains "no".
/// Missing or blank answers count as consent.
fn declined(response: &ResponseRow, consent_column: &str) -> bool {
    response
        .get(consent_column)
        .is_some_and(|answer| !answer.is_empty() && answer.to_lowercase().contains("no"))
}

fn wishlist_items(anonymous: &[ResponseRow]) -> Vec<WishlistItem> {
    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |kind: &'static str, item: String| {
        let candidate = WishlistItem { kind, item };
        if seen.insert(candidate.clone()) {
            items.push(candidate);
        }
    };

    for response in anonymous {
        for column in SUPPLY_COLUMNS {
            if let Some(value) = response.get(column) {
                for wish in value.split(',') {
                    let wish = wish.trim();
                    if !wish.is_empty() {
                        push("classroom_supply", wish.to_string());
                    }
                }
            }
        }
        if let Some(value) = response.get(GIFT_CARD_5_COLUMN).filter(|v| !v.is_empty()) {
            push("gift_card_5", value.clone());
        }
        if let Some(value) = response.get(GIFT_CARD_20_COLUMN).filter(|v| !v.is_empty()) {
            push("gift_card_20", value.clone());
        }
    }

    items
}
