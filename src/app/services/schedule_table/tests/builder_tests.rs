//! Tests for schedule table construction

use super::*;
use crate::Error;
use crate::app::services::schedule_table::BuildMode;

fn rows_of<'a>(table: &'a ScheduleTable, name: &'a str) -> Vec<&'a ScheduleInterval> {
    table.rows_for(name).collect()
}

#[test]
fn test_build_empty_input() {
    let entries: Vec<RestaurantEntry> = Vec::new();
    let result = ScheduleTable::build(&entries, BuildMode::Strict).unwrap();

    assert!(result.table.is_empty());
    assert_eq!(result.stats.entries_seen, 0);
    assert!(result.is_complete());
}

#[test]
fn test_build_day_list_entry() {
    let entries = vec![RestaurantEntry::new(
        "A-1 Cafe Restaurant",
        "Mon, Wed-Sun 11 am - 10 pm",
    )];
    let table = ScheduleTable::from_entries(&entries).unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.rows()[0].day, WeekDay::Mon);
    assert_eq!(table.rows()[0].open, hm(11, 0));
    assert!(table.iter().all(|row| row.close == hm(22, 0)));
    assert!(table.iter().all(|row| row.day != WeekDay::Tue));
}

#[test]
fn test_build_midnight_split_on_sunday() {
    let entries = vec![RestaurantEntry::new("X", "Sun 11 pm - 1 am")];
    let table = ScheduleTable::from_entries(&entries).unwrap();

    assert_eq!(
        table.rows(),
        &[
            create_test_row("X", WeekDay::Sun, hm(23, 0), TimeOfDay::END_OF_DAY),
            create_test_row("X", WeekDay::Mon, TimeOfDay::MIDNIGHT, hm(1, 0)),
        ]
    );
}

#[test]
fn test_build_sample_restaurants() {
    let entries = create_sample_entries();
    let result = ScheduleTable::build(&entries, BuildMode::Strict).unwrap();
    let table = &result.table;

    assert_eq!(rows_of(table, "A-1 Cafe Restaurant").len(), 6);

    // Thai Stick crosses midnight every day
    let thai: Vec<&ScheduleInterval> = rows_of(table, "Thai Stick Restaurant");
    assert_eq!(thai.len(), 14);
    let wednesday: Vec<&&ScheduleInterval> =
        thai.iter().filter(|row| row.day == WeekDay::Wed).collect();
    assert_eq!(wednesday[0].open, TimeOfDay::MIDNIGHT);
    assert_eq!(wednesday[1].open, hm(11, 0));
    assert_eq!(wednesday[1].close, TimeOfDay::END_OF_DAY);

    // Monday: first the 11 am window, then Sunday's spill-over at the end
    let monday: Vec<&&ScheduleInterval> =
        thai.iter().filter(|row| row.day == WeekDay::Mon).collect();
    assert_eq!(monday[0].open, hm(11, 0));
    assert_eq!(monday[1].open, TimeOfDay::MIDNIGHT);

    // Closing at 12 am spills a zero-length row into the next day
    let jayce = rows_of(table, "Jayce's night club");
    assert_eq!(jayce.len(), 5);
    assert_eq!(jayce[0].day, WeekDay::Mon);
    assert_eq!(jayce[0].close, TimeOfDay::END_OF_DAY);
    assert_eq!(jayce[1].day, WeekDay::Tue);
    assert_eq!(jayce[1].open, TimeOfDay::MIDNIGHT);

    assert_eq!(result.stats.entries_seen, 8);
    assert_eq!(result.stats.entries_built, 8);
    assert_eq!(result.stats.rows_emitted, table.len());
    assert_eq!(result.stats.midnight_splits, 9);
}

#[test]
fn test_build_is_deterministic() {
    let entries = create_sample_entries();
    let first = ScheduleTable::from_entries(&entries).unwrap();
    let second = ScheduleTable::from_entries(&entries).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_strict_build_fails_fast() {
    let entries = vec![
        RestaurantEntry::new("Good", "Mon 9 am - 5 pm"),
        RestaurantEntry::new("Bad", "Someday 9 am - 5 pm"),
        RestaurantEntry::new("Also Good", "Tue 9 am - 5 pm"),
    ];

    let error = ScheduleTable::build(&entries, BuildMode::Strict).unwrap_err();
    assert!(matches!(error, Error::UnknownDayToken { ref token } if token == "Someday"));
    assert!(error.is_parse_error());
}

#[test]
fn test_permissive_build_skips_and_reports() {
    let entries = vec![
        RestaurantEntry::new("Good", "Mon 9 am - 5 pm"),
        RestaurantEntry::new(" Bad ", "Mon 9 am - 5 pm / Tue 9 am"),
        RestaurantEntry::new("Also Good", "Tue 9 am - 5 pm"),
    ];

    let result = ScheduleTable::build(&entries, BuildMode::Permissive).unwrap();

    // The failing entry contributes nothing, not even its valid first segment
    assert_eq!(result.table.restaurants(), vec!["Good", "Also Good"]);
    assert_eq!(result.table.len(), 2);
    assert!(!result.is_complete());

    assert_eq!(result.stats.entries_seen, 3);
    assert_eq!(result.stats.entries_built, 2);
    assert_eq!(result.stats.entries_skipped(), 1);

    let skipped = &result.stats.skipped[0];
    assert_eq!(skipped.restaurant, "Bad");
    assert_eq!(skipped.schedule, "Mon 9 am - 5 pm / Tue 9 am");
    assert!(matches!(skipped.error, Error::MissingTimeRange { found: 1, .. }));
}

#[test]
fn test_build_mode_default_is_strict() {
    assert_eq!(BuildMode::default(), BuildMode::Strict);
}
