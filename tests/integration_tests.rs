use kml2wpt::error::ErrorKind;
use kml2wpt::models::DmsAngle;
use kml2wpt::processors::BatchProcessor;
use kml2wpt::readers::KmlReader;
use kml2wpt::utils::{camel_case_name, wpt_file_name};
use kml2wpt::{convert_kml_to_wpt, Converter};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

fn single_placemark(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2"><Document><Placemark>{}</Placemark></Document></kml>"#,
        body
    )
}

#[test]
fn test_scenario_named_placemark() {
    let kml = single_placemark(
        "<name>Camp 1</name><Point><coordinates>-122.5,37.75,120</coordinates></Point>",
    );
    assert_eq!(
        convert_kml_to_wpt(&kml).unwrap(),
        "$FormatGEO\nCamp1 N 37 45 00.00 W 122 30 00.00 120 Camp 1"
    );
}

#[test]
fn test_scenario_unnamed_placemark() {
    let kml = single_placemark("<Point><coordinates>0,0,0</coordinates></Point>");
    assert_eq!(
        convert_kml_to_wpt(&kml).unwrap(),
        "$FormatGEO\nWaypoint N 00 00 00.00 E 000 00 00.00 0 Waypoint"
    );
}

#[test]
fn test_scenario_bad_coordinates() {
    let kml = single_placemark("<Point><coordinates>abc,10,0</coordinates></Point>");
    let err = convert_kml_to_wpt(&kml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CoordinateParse);
}

#[test]
fn test_scenario_no_placemarks() {
    let kml = r#"<kml xmlns="http://www.opengis.net/kml/2.2"><Document><name>Empty</name></Document></kml>"#;
    assert_eq!(convert_kml_to_wpt(kml).unwrap(), "$FormatGEO");
}

#[test]
fn test_header_and_count_invariants() {
    let kml = r#"<kml><Document>
        <Placemark><name>One</name><Point><coordinates>1,1</coordinates></Point></Placemark>
        <Placemark><name>No point</name></Placemark>
        <Folder><name>Waypoints</name>
            <Folder><Placemark><name>Hidden</name><Point><coordinates>2,2</coordinates></Point></Placemark></Folder>
        </Folder>
        <Folder><name>Kept</name>
            <Placemark><name>Two</name><description><![CDATA[Trail <i>head</i>]]></description><Point><coordinates>-3.5,-4.25,10.5</coordinates></Point></Placemark>
        </Folder>
    </Document></kml>"#;

    let output = convert_kml_to_wpt(kml).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "$FormatGEO");
    assert_eq!(lines.len() - 1, 2);
    assert_eq!(lines[1], "One N 01 00 00.00 E 001 00 00.00 0 One");
    assert_eq!(
        lines[2],
        "Two S 04 15 00.00 W 003 30 00.00 11 Two,Trail <i>head</i>"
    );
    assert!(!output.contains("Hidden"));
    assert_eq!(convert_kml_to_wpt(kml).unwrap(), output);
}

#[test]
fn test_malformed_document() {
    let err = convert_kml_to_wpt("<kml><Document></kml>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedDocument);
}

#[test]
fn test_dms_round_trip_properties() {
    for step in -1800..=1800 {
        let value = step as f64 * 0.0987654321;
        let lon = DmsAngle::longitude(value);
        assert!((lon.to_decimal() - value).abs() < 1e-6, "value {}", value);
        assert!(lon.minutes < 60);
        assert!(lon.seconds >= 0.0);
        assert_eq!(lon.hemisphere.letter(), if value >= 0.0 { 'E' } else { 'W' });
    }
}

#[test]
fn test_name_normalization() {
    assert_eq!(camel_case_name("rocky point #2"), "RockyPoint2");
    let kml = single_placemark("<name>   </name><Point><coordinates>1,2</coordinates></Point>");
    assert!(convert_kml_to_wpt(&kml).unwrap().ends_with(" Waypoint"));
}

#[test]
fn test_converter_summary_matches_output() {
    let kml = single_placemark("<name>A</name><Point><coordinates>1,2</coordinates></Point>");
    let converter = Converter::new();
    let summary = converter.summarize(&kml).unwrap();
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.waypoints, vec!["A"]);
}

#[test]
fn test_directory_conversion_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = temp_dir.path().join("Trip.KML");

    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        single_placemark("<name>Camp 1</name><Point><coordinates>-122.5,37.75,120</coordinates></Point>")
            .as_bytes(),
    );
    std::fs::write(&input, bytes).unwrap();

    let kml = KmlReader::read_path(&input).unwrap();
    assert!(kml.starts_with("<?xml"));

    let report = BatchProcessor::new(2)
        .process_directory(temp_dir.path(), None)
        .unwrap();
    assert_eq!(report.succeeded(), 1);

    let output = wpt_file_name(&input);
    assert_eq!(output, temp_dir.path().join("Trip.wpt"));
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "$FormatGEO\nCamp1 N 37 45 00.00 W 122 30 00.00 120 Camp 1"
    );
    assert_eq!(wpt_file_name(Path::new("a.kml")), Path::new("a.wpt"));
}
