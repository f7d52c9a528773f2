//! Tests for schedule queries

use super::*;

#[test]
fn test_open_at_with_time() {
    let table = create_lighthouse_table();

    let result = table.open_at(WeekDay::Mon, Some(hm(11, 30)));
    assert_eq!(result, vec!["A-1 Cafe Restaurant", "Nick's Lighthouse"]);

    let result = table.open_at(WeekDay::Mon, Some(hm(22, 45)));
    assert_eq!(result, vec!["Nick's Lighthouse"]);

    let result = table.open_at(WeekDay::Tue, Some(hm(0, 30)));
    assert_eq!(result, vec!["Nick's Lighthouse"]);
}

#[test]
fn test_open_at_boundaries_are_inclusive() {
    let table = ScheduleTable::from_rows(vec![create_test_row(
        "A-1 Cafe Restaurant",
        WeekDay::Mon,
        hm(11, 0),
        hm(22, 0),
    )]);

    assert_eq!(table.open_at(WeekDay::Mon, Some(hm(11, 0))).len(), 1);
    assert_eq!(table.open_at(WeekDay::Mon, Some(hm(22, 0))).len(), 1);
    assert!(table.open_at(WeekDay::Mon, Some(hm(10, 59))).is_empty());
    assert!(table.open_at(WeekDay::Mon, Some(hm(22, 1))).is_empty());
}

#[test]
fn test_open_at_without_time_matches_any_row_on_day() {
    let table = create_lighthouse_table();

    // Nick's appears twice on Tuesday but is listed once
    assert_eq!(table.open_at(WeekDay::Tue, None), vec!["Nick's Lighthouse"]);
    assert_eq!(table.open_at(WeekDay::Wed, None), vec!["Nick's Lighthouse"]);
    assert!(table.open_at(WeekDay::Sun, None).is_empty());
}

#[test]
fn test_open_at_preserves_first_seen_order() {
    let table = ScheduleTable::from_rows(vec![
        create_test_row("Zeta", WeekDay::Fri, hm(9, 0), hm(17, 0)),
        create_test_row("Alpha", WeekDay::Fri, hm(9, 0), hm(17, 0)),
        create_test_row("Zeta", WeekDay::Fri, hm(18, 0), hm(22, 0)),
    ]);

    assert_eq!(table.open_at(WeekDay::Fri, None), vec!["Zeta", "Alpha"]);
}

#[test]
fn test_timings_for_single_restaurant() {
    let table = create_lighthouse_table();
    let result = table.timings_for(&["Nick's Lighthouse"]);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].restaurant, "Nick's Lighthouse");
    assert_eq!(
        result[0].timings,
        vec![
            "Mon: 11:00 AM - 11:59 PM",
            "Tue: 12:00 AM - 01:00 AM",
            "Tue: 11:00 AM - 11:59 PM",
            "Wed: 12:00 AM - 01:00 AM",
        ]
    );
}

#[test]
fn test_timings_for_multiple_restaurants_in_request_order() {
    let table = create_lighthouse_table();
    let result = table.timings_for(&["A-1 Cafe Restaurant", "Nick's Lighthouse"]);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].restaurant, "A-1 Cafe Restaurant");
    assert_eq!(result[0].timings, vec!["Mon: 11:00 AM - 10:00 PM"]);
    assert_eq!(result[1].restaurant, "Nick's Lighthouse");
    assert_eq!(result[1].timings.len(), 4);
}

#[test]
fn test_timings_for_keeps_build_order_not_time_order() {
    let table = ScheduleTable::from_rows(vec![
        create_test_row("Night Owl", WeekDay::Tue, hm(11, 0), hm(23, 59)),
        create_test_row("Night Owl", WeekDay::Tue, hm(0, 0), hm(1, 0)),
    ]);

    let result = table.timings_for(&["Night Owl"]);
    assert_eq!(
        result[0].timings,
        vec!["Tue: 11:00 AM - 11:59 PM", "Tue: 12:00 AM - 01:00 AM"]
    );
}

#[test]
fn test_timings_for_unknown_and_repeated_names() {
    let table = create_lighthouse_table();
    let names = vec![
        "Unknown Diner".to_string(),
        "A-1 Cafe Restaurant".to_string(),
        "Unknown Diner".to_string(),
    ];
    let result = table.timings_for(names.as_slice());

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].restaurant, "Unknown Diner");
    assert!(result[0].timings.is_empty());
    assert_eq!(result[1].timings.len(), 1);
}

#[test]
fn test_restaurants_and_rows_for() {
    let table = create_lighthouse_table();

    assert_eq!(
        table.restaurants(),
        vec!["A-1 Cafe Restaurant", "Nick's Lighthouse"]
    );
    assert_eq!(table.rows_for("Nick's Lighthouse").count(), 4);
    assert_eq!(table.rows_for("Nobody").count(), 0);
}

#[test]
fn test_queries_on_empty_table() {
    let table = ScheduleTable::default();

    assert!(table.open_at(WeekDay::Mon, Some(hm(12, 0))).is_empty());
    assert!(table.restaurants().is_empty());
    assert!(table.timings_for(&["Anyone"])[0].timings.is_empty());
}
