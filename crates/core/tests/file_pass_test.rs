use hotspot::geojson::hotspots_from_geojson;
use hotspot::{Config, Hotspot, HotspotError, JsonFileSink, JsonFileSource, OutputFormat, run_pass};
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

const USERS: &str = r#"[
    {"Latitude": 42.45,     "Longitude": -76.47, "Velocity": [1e-6, 0]},
    {"Latitude": 42.450001, "Longitude": -76.47, "Velocity": [0, 1e-6]},
    {"Latitude": 42.450002, "Longitude": -76.47},
    {"Latitude": 42.450003, "Longitude": -76.47},
    {"Latitude": 0,         "Longitude": 0}
]"#;

#[test]
fn test_json_file_pass() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("DemoUsers.json");
    let output = dir.path().join("DemoHotspots.json");
    fs::write(&input, USERS).unwrap();
    fs::write(&output, r#"{"old-cluster": {"Latitude": 1, "Longitude": 1, "Population": 4, "Radius": 0}}"#)
        .unwrap();

    let source = JsonFileSource::new(&input);
    let mut sink = JsonFileSink::new(&output, OutputFormat::Json);
    let report = run_pass(&Config::default(), &source, &mut sink).unwrap();

    assert_eq!(report.received, 5);
    assert_eq!(report.discarded, 1);

    let written: BTreeMap<String, Hotspot> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written.len(), 1);
    assert!(!written.contains_key("old-cluster"));

    let (id, hotspot) = &report.hotspots[0];
    assert_eq!(written[&id.to_string()], *hotspot);
    assert_eq!(hotspot.population, 4);
}

#[test]
fn test_geojson_file_pass() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    let output = dir.path().join("hotspots.geojson");
    fs::write(&input, USERS).unwrap();

    let source = JsonFileSource::new(&input);
    let mut sink = JsonFileSink::new(&output, OutputFormat::GeoJson);
    let report = run_pass(&Config::default(), &source, &mut sink).unwrap();

    let parsed = hotspots_from_geojson(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].0, report.hotspots[0].0.to_string());
    assert_eq!(parsed[0].1, report.hotspots[0].1);
}

#[test]
fn test_unreadable_source_keeps_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("hotspots.json");
    fs::write(&output, "{}").unwrap();

    let source = JsonFileSource::new(dir.path().join("missing.json"));
    let mut sink = JsonFileSink::new(&output, OutputFormat::Json);
    let err = run_pass(&Config::default(), &source, &mut sink).unwrap_err();

    assert!(matches!(err, HotspotError::SourceUnavailable(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "{}");
}

#[test]
fn test_malformed_record_does_not_abort_pass() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("users.json");
    let output = dir.path().join("hotspots.json");
    fs::write(
        &input,
        r#"{"u0": {"Latitude": 42.45,     "Longitude": -76.47},
            "u1": {"Latitude": 42.450001, "Longitude": -76.47},
            "u2": {"Latitude": 42.450002, "Longitude": -76.47},
            "u3": {"Latitude": 42.450003, "Longitude": -76.47},
            "u4": {"Latitude": null,      "Longitude": -76.47}}"#,
    )
    .unwrap();

    let source = JsonFileSource::new(&input);
    let mut sink = JsonFileSink::new(&output, OutputFormat::Json);
    let report = run_pass(&Config::default(), &source, &mut sink).unwrap();

    assert_eq!(report.received, 4);
    assert_eq!(report.hotspots.len(), 1);
    assert_eq!(report.hotspots[0].1.population, 4);
}
