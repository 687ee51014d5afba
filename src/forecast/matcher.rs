//! Free-text team lookup against the standings table.

use crate::upstream::football_data::TableEntry;

/// Find the standings row for a free-text team query.
///
/// Case-insensitive against both full and short name. An exact match on
/// either name wins (first in table order); otherwise the last row whose
/// name contains the query wins. Empty queries match nothing.
pub fn find_team<'a>(table: &'a [TableEntry], query: &str) -> Option<&'a TableEntry> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    let names = |row: &TableEntry| {
        (
            row.team.name.to_lowercase(),
            row.team.short_name.as_deref().unwrap_or_default().to_lowercase(),
        )
    };

    table
        .iter()
        .find(|row| {
            let (name, short) = names(row);
            name == q || short == q
        })
        .or_else(|| {
            table.iter().rev().find(|row| {
                let (name, short) = names(row);
                name.contains(&q) || short.contains(&q)
            })
        })
}
