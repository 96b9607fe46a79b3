#[cfg(test)]
mod test {
    use nmea2gpx::prelude::*;
    use std::path::{Path, PathBuf};

    fn test_resource(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("test_resources")
            .join("NMEA")
            .join(name)
    }

    fn document_time() -> Epoch {
        Epoch::from_gregorian_utc_hms(2024, 3, 1, 8, 0, 0)
    }

    /*
     * Converts given resource, returns (GPX document, statistics)
     */
    fn convert(name: &str, policy: HemispherePolicy) -> (String, Statistics) {
        let reader = BufferedReader::new(&test_resource(name)).unwrap();
        let mut gpx = GpxWriter::with_time(Vec::new(), "test", document_time()).unwrap();
        let statistics = process(reader, &mut gpx, policy).unwrap();
        let content = String::from_utf8(gpx.finish().unwrap()).unwrap();
        (content, statistics)
    }

    #[test]
    fn single_fix() {
        let (content, statistics) = convert("single_fix.nmea", HemispherePolicy::default());
        assert_eq!(
            content,
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
                "<gpx version=\"1.0\" creator=\"test\"><time>2024-03-01T08:00:00Z</time><trk><trkseg>",
                "<trkpt lat=\"50.881277\" lon=\"7.066073\"><time>2016-05-02T12:34:56Z</time><ele>68.3</ele><sat>8</sat></trkpt>",
                "</trkseg></trk></gpx>\n",
            )
        );
        assert_eq!(statistics.lines, 2);
        assert_eq!(statistics.points, 1);
    }
    #[test]
    fn no_fix() {
        let (content, statistics) = convert("no_fix.nmea", HemispherePolicy::default());
        assert!(!content.contains("<trkpt"));
        assert!(content.ends_with("<trk><trkseg></trkseg></trk></gpx>\n"));
        assert_eq!(statistics.points, 0);
        assert_eq!(statistics.no_fix, 1);
    }
    #[test]
    fn cold_start() {
        let (content, statistics) = convert("cold_start.nmea", HemispherePolicy::default());
        assert_eq!(
            statistics,
            Statistics {
                lines: 12,
                position_date: 4,
                fix_quality: 3,
                malformed: 2,
                uncorrelated: 5,
                no_fix: 3,
                points: 4,
            }
        );

        let first = "<trkpt lat=\"50.881277\" lon=\"7.066073\"><time>2016-05-02T08:30:01Z</time><ele>68.3</ele><sat>5</sat></trkpt>";
        let second = "<trkpt lat=\"50.881333\" lon=\"7.066167\"><time>2016-05-02T08:30:02Z</time><ele>69.1</ele><sat>6</sat></trkpt>";

        // every line re-attempts the merge of the held pair
        assert_eq!(content.matches(first).count(), 2);
        assert_eq!(content.matches(second).count(), 2);
        assert_eq!(content.matches("<trkpt").count(), 4);

        // emission order follows input order
        let first_offset = content.find(first).unwrap();
        let second_offset = content.find(second).unwrap();
        assert!(first_offset < second_offset);
    }
    #[test]
    fn hemispheres() {
        let (content, _) = convert("southern.nmea", HemispherePolicy::Ignore);
        assert!(content.contains("<trkpt lat=\"33.939633\" lon=\"151.205717\"><time>1994-06-13T22:05:16Z</time><ele>12.6</ele><sat>5</sat></trkpt>"));

        let (content, _) = convert("southern.nmea", HemispherePolicy::Apply);
        assert!(content.contains("<trkpt lat=\"-33.939633\" lon=\"-151.205717\"><time>1994-06-13T22:05:16Z</time><ele>12.6</ele><sat>5</sat></trkpt>"));
    }
    #[test]
    fn correlator_over_resource() {
        let content = std::fs::read_to_string(test_resource("cold_start.nmea")).unwrap();
        let mut correlator = Correlator::new(HemispherePolicy::default());
        let points = content
            .lines()
            .filter_map(|line| correlator.feed(line))
            .collect::<Vec<TrackPoint>>();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], points[1]);
        assert_eq!(points[2], points[3]);
        assert_eq!(points[0].satellites, 5);
        assert_eq!(points[2].satellites, 6);
        assert_eq!(correlator.statistics().points, 4);
    }
}
