//! Typed view-models for the tree list.
//!
//! The renderer never works on markup: records map to [`ListEntry`] values
//! first, and the egui layer draws one widget row per entry. An empty record
//! sequence maps to exactly one informational placeholder entry.

use chrono::NaiveDate;
use shared::protocol::TreeRecord;

pub const SPECIES_PLACEHOLDER: &str = "---";
pub const EMPTY_LIST_HEADLINE: &str = "You haven't registered any tree yet!";
pub const EMPTY_LIST_SUBLINE: &str = "Do the right thing. Make the world greener!";

/// Day/month ordering convention for displayed dates. The stored
/// `planting_date` string is never rewritten; only its rendering varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    DayFirst,
    MonthFirst,
    YearFirst,
}

/// Picks a display convention from the locale environment (`LC_ALL`,
/// `LC_TIME`, `LANG`, first set wins). Unknown or unset locales fall back to
/// day-first.
pub fn date_style_from_env() -> DateStyle {
    let tag = ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_default();
    date_style_for_locale(&tag)
}

fn date_style_for_locale(tag: &str) -> DateStyle {
    let tag = tag.to_ascii_lowercase().replace('-', "_");
    if tag.starts_with("en_us") {
        DateStyle::MonthFirst
    } else if ["ja", "zh", "ko", "hu", "c", "posix"]
        .iter()
        .any(|prefix| tag == *prefix || tag.starts_with(&format!("{prefix}_")) || tag.starts_with(&format!("{prefix}.")))
    {
        DateStyle::YearFirst
    } else {
        DateStyle::DayFirst
    }
}

/// Formats a stored `YYYY-MM-DD` date for display. Anything that does not
/// parse as a calendar date is shown as stored.
pub fn format_planting_date(stored: &str, style: DateStyle) -> String {
    match NaiveDate::parse_from_str(stored.trim(), "%Y-%m-%d") {
        Ok(date) => {
            let pattern = match style {
                DateStyle::DayFirst => "%d/%m/%Y",
                DateStyle::MonthFirst => "%m/%d/%Y",
                DateStyle::YearFirst => "%Y-%m-%d",
            };
            date.format(pattern).to_string()
        }
        Err(_) => stored.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRowView {
    pub record: TreeRecord,
    pub species_display: String,
    pub planting_date_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Row(TreeRowView),
    Placeholder,
}

pub fn build_list_entries(records: &[TreeRecord], style: DateStyle) -> Vec<ListEntry> {
    if records.is_empty() {
        return vec![ListEntry::Placeholder];
    }
    records
        .iter()
        .map(|record| {
            let species_display = if record.species.trim().is_empty() {
                SPECIES_PLACEHOLDER.to_string()
            } else {
                record.species.clone()
            };
            ListEntry::Row(TreeRowView {
                species_display,
                planting_date_display: format_planting_date(&record.planting_date, style),
                record: record.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::TreeId;

    fn record(id: &str, species: &str, date: &str) -> TreeRecord {
        TreeRecord {
            id: TreeId::from(id),
            custom_name: "Ipê".to_string(),
            species: species.to_string(),
            location: "Park".to_string(),
            planting_date: date.to_string(),
        }
    }

    #[test]
    fn one_entry_per_record() {
        let records = vec![
            record("1", "", "2023-05-10"),
            record("2", "Quercus", "2020-02-29"),
            record("3", "", "2024-01-01"),
        ];
        let entries = build_list_entries(&records, DateStyle::DayFirst);
        assert_eq!(entries.len(), 3);
        assert!(entries
            .iter()
            .all(|entry| matches!(entry, ListEntry::Row(_))));
    }

    #[test]
    fn empty_sequence_yields_exactly_one_placeholder() {
        let entries = build_list_entries(&[], DateStyle::DayFirst);
        assert_eq!(entries, vec![ListEntry::Placeholder]);
    }

    #[test]
    fn blank_species_renders_dash_and_date_follows_convention() {
        let entries = build_list_entries(&[record("1", "", "2023-05-10")], DateStyle::DayFirst);
        let ListEntry::Row(row) = &entries[0] else {
            panic!("expected row");
        };
        assert_eq!(row.species_display, SPECIES_PLACEHOLDER);
        assert_eq!(row.planting_date_display, "10/05/2023");
        // The stored value stays untouched.
        assert_eq!(row.record.planting_date, "2023-05-10");
    }

    #[test]
    fn date_styles_reorder_components() {
        assert_eq!(
            format_planting_date("2023-05-10", DateStyle::MonthFirst),
            "05/10/2023"
        );
        assert_eq!(
            format_planting_date("2023-05-10", DateStyle::YearFirst),
            "2023-05-10"
        );
    }

    #[test]
    fn unparseable_dates_display_as_stored() {
        assert_eq!(
            format_planting_date("sometime in 2023", DateStyle::DayFirst),
            "sometime in 2023"
        );
    }

    #[test]
    fn locale_tags_map_to_conventions() {
        assert_eq!(date_style_for_locale("pt_BR.UTF-8"), DateStyle::DayFirst);
        assert_eq!(date_style_for_locale("en_US.UTF-8"), DateStyle::MonthFirst);
        assert_eq!(date_style_for_locale("en_GB.UTF-8"), DateStyle::DayFirst);
        assert_eq!(date_style_for_locale("ja_JP.UTF-8"), DateStyle::YearFirst);
        assert_eq!(date_style_for_locale("C"), DateStyle::YearFirst);
        assert_eq!(date_style_for_locale(""), DateStyle::DayFirst);
    }
}
