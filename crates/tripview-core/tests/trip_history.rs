//! Tests for the trip history export

use std::io::Cursor;

use pretty_assertions::assert_eq;
use tripview_core::datalog::HistoryField;
use tripview_core::prelude::*;

const HEADER: &str = "Date,Time,odo mi,dist mi,elv ft,Energy,Gids,SGids,EGids,AHr,SOH,Hx,SHVolt,EHVolt,Drive,Regen,Charge,L1/L2,QC";

fn read(rows: &[&str]) -> Result<Vec<TripHistory>, ParseError> {
    let mut text = HEADER.to_string();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    TripHistoryReader::from_reader(Cursor::new(text), &ImportConfig::default())?.read_all()
}

#[test]
fn test_reads_history_rows() {
    let trips = read(&[
        "03/01/2025,14:22,28092.2,7.5,-120,2130,26,220,194,115.23,85.40%,62.51,380.5,371.2,2890,760,0,340,12",
        "03/02/2025,08:05:30,28110.0,17.8,85,4210,53,240,187,115.10,85.38%,62.50,385.0,366.9,5120,910,0,341,12",
    ])
    .unwrap();
    assert_eq!(trips.len(), 2);

    let first = &trips[0];
    assert_eq!(first.date.map(|d| d.to_string()).as_deref(), Some("2025-03-01"));
    assert_eq!(first.time.to_string(), "14:22:00");
    assert_eq!(first.gids_used(), 26);
    assert_eq!(first.state_of_health, "85.40%");
    assert!((first.distance_in(DistanceUnit::Kilometers).unwrap() - 12.07008).abs() < 1e-5);
    assert!((first.elevation_delta.to_meters().unwrap() + 36.576).abs() < 1e-9);
    assert!((first.end_hvolt - 371.2).abs() < 1e-9);

    assert_eq!(trips[1].time.to_string(), "08:05:30");
    assert_eq!(trips[1].drive, 5120);
}

#[test]
fn test_blank_date_is_allowed() {
    let trips = read(&[",14:22,28092.2,7.5,0,2130,26,220,194,115.23,85%,62.51,380.5,371.2,2890,760,0,340,12"]).unwrap();
    assert_eq!(trips[0].date, None);
}

#[test]
fn test_history_without_date_column() {
    let header = HEADER.trim_start_matches("Date,");
    let text = format!(
        "{}\n14:22,28092.2,7.5,0,2130,26,220,194,115.23,85%,62.51,380.5,371.2,2890,760,0,340,12\n",
        header
    );
    let reader = TripHistoryReader::from_reader(Cursor::new(text), &ImportConfig::default()).unwrap();
    assert!(!reader.assembler().is_bound(HistoryField::Date));
    let trips = reader.read_all().unwrap();
    assert_eq!(trips[0].date, None);
}

#[test]
fn test_blank_time_is_missing() {
    let err = read(&["03/01/2025,,28092.2,7.5,0,2130,26,220,194,115.23,85%,62.51,380.5,371.2,2890,760,0,340,12"])
        .err()
        .unwrap();
    assert!(matches!(err, ParseError::MissingField { row: 1, ref column } if column == "Time"));
}

#[test]
fn test_fractional_counter_is_malformed() {
    let err = read(&["03/01/2025,14:22,28092.2,7.5,0,2130.5,26,220,194,115.23,85%,62.51,380.5,371.2,2890,760,0,340,12"])
        .err()
        .unwrap();
    assert!(matches!(
        err,
        ParseError::MalformedValue { row: 1, ref column, .. } if column == "Energy"
    ));
}
