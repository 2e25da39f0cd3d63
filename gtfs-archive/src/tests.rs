use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rgb::RGB8;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::objects::*;
use crate::{ArchiveConfig, Error, FeedRecord, GtfsArchive, GtfsFile};

const FIXTURE: &str = "fixtures/klt";
const STOP_COUNT: usize = 9375;
const SHAPE_POINTS: usize = 1236;

fn fixture_files() -> Vec<(String, Vec<u8>)> {
    let mut files: Vec<_> = fs::read_dir(FIXTURE)
        .expect("fixture directory")
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}

/// Fills `stops.txt` up to [STOP_COUNT] rows and adds a `shapes.txt` where shape `1`
/// has [SHAPE_POINTS] points, interleaved with the points of shape `2`
fn klt_files() -> Vec<(String, Vec<u8>)> {
    let mut files = fixture_files();
    for (name, content) in files.iter_mut() {
        if name.as_str() == "stops.txt" {
            let existing = content.iter().filter(|b| **b == b'\n').count() - 1;
            for i in 0..STOP_COUNT - existing {
                writeln!(
                    content,
                    "90220080{:08},Hållplats {},56.{:06},16.{:06},0,,",
                    i, i, i, i
                )
                .unwrap();
            }
        }
    }

    let mut shapes =
        String::from("shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence,shape_dist_traveled\n");
    for seq in 1..=SHAPE_POINTS {
        let step = (seq - 1) as f64;
        shapes.push_str(&format!(
            "1,{:.6},{:.6},{},{:.2}\n",
            56.666811 + step * 0.0001,
            16.318689 + step * 0.0001,
            seq,
            step * 29.263
        ));
        if seq % 100 == 0 {
            shapes.push_str(&format!("2,56.7,16.3,{},\n", seq / 100));
        }
    }
    files.push(("shapes.txt".to_owned(), shapes.into_bytes()));
    files
}

/// Zips the files inside `folder/`, as feeds are sometimes distributed
fn write_zip(path: &Path, folder: &str, files: &[(String, Vec<u8>)]) {
    let mut zip = zip::ZipWriter::new(fs::File::create(path).unwrap());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    if !folder.is_empty() {
        zip.add_directory(folder, options).unwrap();
    }
    for (name, content) in files {
        zip.start_file(format!("{}{}", folder, name), options)
            .unwrap();
        zip.write_all(content).unwrap();
    }
    zip.finish().unwrap();
}

fn config(dir: &TempDir) -> ArchiveConfig {
    ArchiveConfig::default().temp_root(dir.path().join("extracted"))
}

fn klt_zip(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("klt.zip");
    write_zip(&path, "klt/", &klt_files());
    path
}

fn open_klt(dir: &TempDir) -> GtfsArchive {
    config(dir).open_from_path(klt_zip(dir)).unwrap()
}

fn open_files(dir: &TempDir, files: &[(String, Vec<u8>)]) -> GtfsArchive {
    let path = dir.path().join("custom.zip");
    write_zip(&path, "", files);
    config(dir).open_from_path(path).unwrap()
}

#[test]
fn stream_every_stop() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let mut stops = archive.stops_file().unwrap();
    let mut count = 0;
    while let Some(_stop) = stops.next_record().unwrap() {
        count += 1;
    }
    assert_eq!(STOP_COUNT, count);
    assert_eq!(0, archive.materialize_count());
}

#[test]
fn stop_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let stop = archive.stop("9021008004033000").unwrap().unwrap();
    assert_eq!("Ottenby gård nedre", stop.name);
    assert_eq!(Some(56.232823), stop.latitude);
    assert_eq!(Some(16.417789), stop.longitude);
    assert_eq!(LocationType::StopArea, stop.location_type);
    assert_eq!(1, i32::from(stop.location_type));
    assert_eq!(None, archive.stop("unknown").unwrap());
}

#[test]
fn shape_points_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let shape = archive.shape("1").unwrap();
    assert_eq!(SHAPE_POINTS, shape.len());
    assert_eq!(
        (1..=SHAPE_POINTS).collect::<Vec<_>>(),
        shape.iter().map(|p| p.sequence).collect::<Vec<_>>()
    );
    assert_eq!(56.666811, shape[0].latitude);
    assert_eq!(16.318689, shape[0].longitude);
    assert_eq!(Some(0.0), shape[0].dist_traveled);
    assert_eq!(Some(292.63), shape[10].dist_traveled);

    let other = archive.shape("2").unwrap();
    assert_eq!(12, other.len());
    assert_eq!(None, other[0].dist_traveled);
    assert!(archive.shape("3").unwrap().is_empty());
}

#[test]
fn calendar_dates_of_a_service() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let dates = archive.calendar_dates_for_service("5").unwrap();
    assert_eq!(17, dates.len());
    assert_eq!(NaiveDate::from_ymd_opt(2019, 5, 17).unwrap(), dates[0].date);
    assert_eq!(Exception::Added, dates[0].exception_type);
    assert_eq!(Exception::Deleted, dates[1].exception_type);
    assert_eq!(NaiveDate::from_ymd_opt(2019, 6, 10).unwrap(), dates[16].date);
    assert!(dates.windows(2).all(|w| w[0].date < w[1].date));

    assert_eq!(2, archive.calendar_dates_for_service("6").unwrap().len());
}

#[test]
fn cleanup_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let root = archive.root().to_owned();
    assert!(root.join("stops.txt").is_file());

    archive.cleanup().unwrap();
    assert!(!root.exists());
    archive.cleanup().unwrap();
    assert!(matches!(archive.stops_file(), Err(Error::MissingFile(_))));
}

#[test]
fn views_survive_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let routes = archive.routes().unwrap();
    archive.cleanup().unwrap();
    assert!(std::sync::Arc::ptr_eq(&routes, &archive.routes().unwrap()));
}

#[test]
fn end_of_stream_is_sticky() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let mut agencies = archive.agency_file().unwrap();
    assert!(agencies.next_record().unwrap().is_some());
    assert!(agencies.next_record().unwrap().is_none());
    assert!(!agencies.is_open());

    // the file is gone, yet nothing is reopened
    archive.cleanup().unwrap();
    for _ in 0..3 {
        assert!(agencies.next_record().unwrap().is_none());
    }
}

#[test]
fn readers_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let mut first = archive.trips_file().unwrap();
    let mut second = archive.trips_file().unwrap();
    assert_eq!("trip1", first.next_record().unwrap().unwrap().id);
    assert_eq!("trip2", first.next_record().unwrap().unwrap().id);
    assert_eq!("trip1", second.next_record().unwrap().unwrap().id);

    let all = first.materialize().unwrap();
    assert_eq!(all, second.materialize().unwrap());
    assert_eq!(3, all.len());
    assert_eq!("trip3", first.next_record().unwrap().unwrap().id);
}

#[test]
fn index_is_built_once() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let first = archive.stop("9022008000010001").unwrap();
    let second = archive.stop("9022008000010001").unwrap();
    assert_eq!(first, second);
    assert_eq!(Some("Kalmar Centralstation, Läge A"), first.map(|s| s.name).as_deref());
    assert_eq!(1, archive.materialize_count());

    archive.stop("9022008000010002").unwrap();
    assert_eq!(1, archive.materialize_count());

    // another arrangement of the same file is another view
    archive.stops().unwrap();
    assert_eq!(2, archive.materialize_count());
    assert_eq!(2, archive.view_builds());
}

#[test]
fn archives_do_not_share_views() {
    let dir = tempfile::tempdir().unwrap();
    let path = klt_zip(&dir);
    let first = config(&dir).open_from_path(&path).unwrap();
    let second = config(&dir).open_from_path(&path).unwrap();
    assert_eq!(first.root(), second.root());

    first.routes().unwrap();
    second.routes().unwrap();
    assert_eq!(1, first.materialize_count());
    assert_eq!(1, second.materialize_count());
}

#[test]
fn last_duplicate_wins() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_files(
        &dir,
        &[(
            "routes.txt".to_owned(),
            b"route_id,route_short_name,route_type\nr1,first,3\nr2,other,3\nr1,second,0\n".to_vec(),
        )],
    );
    let route = archive.route("r1").unwrap().unwrap();
    assert_eq!("second", route.short_name);
    assert_eq!(RouteType::Tramway, route.route_type);
    assert_eq!(3, archive.routes().unwrap().len());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<_> = fixture_files()
        .into_iter()
        .filter(|(name, _)| name != "transfers.txt")
        .collect();
    let archive = open_files(&dir, &files);
    assert!(!archive.has_file(GtfsFile::Transfers));
    assert!(!archive.files().contains(&GtfsFile::Shapes));
    match archive.transfers_file() {
        Err(Error::MissingFile(name)) => assert_eq!("transfers.txt", name),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
    assert!(matches!(archive.transfers(), Err(Error::MissingFile(_))));
    assert!(archive.stops_file().is_ok());
}

#[test]
fn malformed_row_fails_the_read() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_files(
        &dir,
        &[(
            "stops.txt".to_owned(),
            b"stop_id,stop_name\n1,A\n2,B,extra\n3,C\n".to_vec(),
        )],
    );
    match archive.stops() {
        Err(Error::RowDecode { file_name, .. }) => assert_eq!("stops.txt", file_name),
        other => panic!("unexpected {:?}", other.map(|_| ())),
    }
    assert!(archive.stop("1").is_err());
    assert_eq!(0, archive.view_builds());

    let mut stops = archive.stops_file().unwrap();
    assert_eq!("1", stops.next_record().unwrap().unwrap().id);
    assert!(stops.next_record().is_err());
    assert!(stops.next_record().unwrap().is_none());
}

#[test]
fn header_and_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let mut agencies = archive.agency_file().unwrap();
    assert_eq!(
        vec![
            "agency_id",
            "agency_name",
            "agency_url",
            "agency_timezone",
            "agency_lang",
            "agency_phone"
        ],
        agencies.header().unwrap().names()
    );
    let agency = agencies.next_record().unwrap().unwrap();
    assert_eq!(Some("279".to_owned()), agency.id);
    assert_eq!("Kalmar Länstrafik", agency.name);
    assert_eq!(Some(agency), archive.agency("279").unwrap());
}

#[test]
fn typed_values() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);

    let route = archive.route("9011008010100000").unwrap().unwrap();
    assert_eq!(RouteType::Bus, route.route_type);
    assert_eq!(RGB8::new(0, 0x7f, 0xff), route.color);
    assert_eq!(RGB8::new(255, 255, 255), route.text_color);
    let route = archive.route("9011008010200000").unwrap().unwrap();
    assert_eq!(RouteType::Bus, route.route_type);
    assert_eq!("", route.long_name);
    assert_eq!(RGB8::new(255, 255, 255), route.color);
    assert_eq!(RGB8::new(0, 0, 0), route.text_color);
    assert_eq!(
        vec!["trip1", "trip3"],
        archive
            .trips_for_route("9011008010100000")
            .unwrap()
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
    );

    let stop_times = archive.stop_times_for_trip("trip1").unwrap();
    assert_eq!(3, stop_times.len());
    assert_eq!(Some(23 * 3600 + 50 * 60), stop_times[0].arrival_time);
    assert_eq!(None, stop_times[1].arrival_time);
    assert_eq!(Some(24 * 3600 + 35 * 60), stop_times[2].departure_time);
    assert_eq!(PickupDropOffType::NotAvailable, stop_times[0].drop_off_type);
    assert_eq!(Some(292.63), stop_times[2].shape_dist_traveled);

    let trip = archive.trip("trip2").unwrap().unwrap();
    assert_eq!(Some(DirectionType::Inbound), trip.direction_id);
    assert_eq!(Some("2".to_owned()), trip.shape_id);

    let calendar = archive.calendar_entry("6").unwrap().unwrap();
    assert!(!calendar.monday);
    assert!(calendar.sunday);
    assert_eq!(NaiveDate::from_ymd_opt(2019, 12, 15).unwrap(), calendar.end_date);

    let frequencies = archive.frequencies_for_trip("trip2").unwrap();
    assert_eq!(2, frequencies.len());
    assert_eq!(6 * 3600, frequencies[0].start_time);
    assert_eq!(Some(ExactTimes::ScheduleBased), frequencies[1].exact_times);

    let transfers = archive.transfers().unwrap();
    assert_eq!(TransferType::MinTime, transfers[0].transfer_type);
    assert_eq!(Some(180), transfers[0].min_transfer_time);
    assert_eq!(TransferType::Recommended, transfers[1].transfer_type);
    assert_eq!(None, transfers[1].min_transfer_time);

    let feed_info = archive.feed_info().unwrap();
    assert_eq!("Samtrafiken i Sverige AB", feed_info[0].name);
    assert_eq!(NaiveDate::from_ymd_opt(2019, 5, 6), feed_info[0].start_date);
    assert_eq!(Some("2019-05-17".to_owned()), feed_info[0].version);
}

#[test]
fn trimmed_values() {
    let dir = tempfile::tempdir().unwrap();
    let files = [(
        "stops.txt".to_owned(),
        b"stop_id,stop_name\n 1 , Kalmar C \n".to_vec(),
    )];
    let trimmed = open_files(&dir, &files);
    assert_eq!("Kalmar C", trimmed.stops().unwrap()[0].name);

    let raw = config(&dir)
        .trim_fields(false)
        .open_from_path(dir.path().join("custom.zip"))
        .unwrap();
    assert_eq!(" Kalmar C ", raw.stops().unwrap()[0].name);
}

#[test]
fn records_refer_to_their_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let stop = archive.stops_file().unwrap().next_record().unwrap().unwrap();
    let parent = stop.archive().unwrap();
    assert_eq!(archive.root(), parent.root());
    assert!(stop.archive_ref().same_archive(&archive.stops().unwrap()[0].archive));
    drop(parent);

    drop(archive);
    assert!(stop.archive().is_none());
}

#[test]
fn extraction_directory() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let root = archive.root();
    assert_eq!(Some(dir.path().join("extracted").as_path()), root.parent());
    let name = root.file_name().unwrap().to_string_lossy();
    assert!(name.starts_with("klt-"), "{}", name);
    assert_eq!("klt-".len() + 16, name.len());
    assert!(root.join("stops.txt").is_file());
    assert!(!root.join("klt").exists());
    assert_eq!(GtfsFile::ALL.to_vec(), archive.files());
}

#[test]
fn archive_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        config(&dir).open_from_path(dir.path().join("absent.zip")),
        Err(Error::ArchiveOpen { .. })
    ));

    let not_a_zip = dir.path().join("broken.zip");
    fs::write(&not_a_zip, "stop_id,stop_name\n").unwrap();
    assert!(matches!(
        config(&dir).open_from_path(&not_a_zip),
        Err(Error::Extraction { .. })
    ));
}

#[test]
fn shallowest_entry_is_extracted() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_files(
        &dir,
        &[
            ("stops.txt".to_owned(), b"stop_id,stop_name\nreal,A\n".to_vec()),
            ("old/stops.txt".to_owned(), b"stop_id,stop_name\nstale,A\n".to_vec()),
            ("old/routes.txt".to_owned(), b"route_id,route_type\nstale,3\n".to_vec()),
            ("routes.txt".to_owned(), b"route_id,route_type\nreal,3\n".to_vec()),
            ("a/trips.txt".to_owned(), b"route_id,service_id,trip_id\nreal,s,first\n".to_vec()),
            ("b/trips.txt".to_owned(), b"route_id,service_id,trip_id\nreal,s,second\n".to_vec()),
        ],
    );
    assert_eq!("real", archive.stops().unwrap()[0].id);
    assert_eq!("real", archive.routes().unwrap()[0].id);
    assert_eq!("first", archive.trips().unwrap()[0].id);
    assert!(!archive.root().join("old").exists());
}

#[test]
fn long_distances_keep_their_precision() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_files(
        &dir,
        &[
            (
                "shapes.txt".to_owned(),
                b"shape_id,shape_pt_lat,shape_pt_lon,shape_pt_sequence,shape_dist_traveled\n\
                  1,56.6,16.3,1,123456.78\n1,56.7,16.4,2,1234567.891\n"
                    .to_vec(),
            ),
            (
                "stop_times.txt".to_owned(),
                b"trip_id,arrival_time,departure_time,stop_id,stop_sequence,shape_dist_traveled\n\
                  t,10:00:00,10:00:00,s,1,987654.321\n"
                    .to_vec(),
            ),
        ],
    );
    let shape = archive.shape("1").unwrap();
    assert_eq!(Some(123456.78), shape[0].dist_traveled);
    assert_eq!(Some(1234567.891), shape[1].dist_traveled);
    let stop_times = archive.stop_times().unwrap();
    assert_eq!(Some(987654.321), stop_times[0].shape_dist_traveled);
}

#[test]
fn cleanup_failure_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let root = archive.root().to_owned();
    let blocking = root.join("sub");
    fs::create_dir(&blocking).unwrap();

    match archive.cleanup() {
        Err(Error::Cleanup { path, .. }) => assert_eq!(blocking, path),
        other => panic!("unexpected {:?}", other),
    }
    assert!(root.exists());

    fs::remove_dir(&blocking).unwrap();
    archive.cleanup().unwrap();
    assert!(!root.exists());
}

#[test]
fn index_is_cached_by_field() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let by_id = archive.index_by("stop_id", |s: &Stop| s.id.as_str()).unwrap();
    let again = archive.index_by("stop_id", |s: &Stop| s.name.as_str()).unwrap();
    assert!(std::sync::Arc::ptr_eq(&by_id, &again));
    assert!(again.contains_key("9021008004033000"));

    let by_name = archive.index_by("stop_name", |s: &Stop| s.name.as_str()).unwrap();
    assert!(by_name.contains_key("Ottenby gård nedre"));
    assert_eq!(2, archive.materialize_count());
}

#[cfg(feature = "read-url")]
#[test]
fn fetched_archive_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    let url = "http://gtfs.invalid/klt.zip";
    let digest = crate::archive::url_digest(url);
    let temp_root = dir.path().join("extracted");
    fs::create_dir_all(&temp_root).unwrap();
    let zip_path = temp_root.join(format!("{}.zip", digest));

    // already fetched: no request is made to the unresolvable host
    write_zip(&zip_path, "", &fixture_files());
    let archive = config(&dir).open(url).unwrap();
    assert_eq!(temp_root.join(&digest), archive.root());
    assert!(!zip_path.exists());
    assert_eq!(5, archive.stops().unwrap().len());

    write_zip(&zip_path, "", &fixture_files());
    config(&dir)
        .keep_downloaded_archive(true)
        .open_from_url(url)
        .unwrap();
    assert!(zip_path.exists());
}

#[cfg(feature = "read-url")]
#[test]
fn unreachable_host() {
    let dir = tempfile::tempdir().unwrap();
    let result = config(&dir).open_from_url("http://gtfs.invalid/klt.zip");
    assert!(matches!(result, Err(Error::Retrieval(_))), "{:?}", result);
}

#[cfg(feature = "read-url")]
#[test]
fn http_error_status() {
    use std::io::Read;
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/klt.zip", listener.local_addr().unwrap());
    let server = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = [0; 1024];
        let _ = stream.read(&mut request).unwrap();
        stream
            .write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
            .unwrap();
    });

    let dir = tempfile::tempdir().unwrap();
    match config(&dir).open_from_url(&url) {
        Err(Error::RetrievalStatus { url: failed, status }) => {
            assert_eq!(url, failed);
            assert_eq!(404, status);
        }
        other => panic!("unexpected {:?}", other),
    }
    server.join().unwrap();

    let digest = crate::archive::url_digest(&url);
    let temp_root = dir.path().join("extracted");
    assert!(!temp_root.join(format!("{}.zip", digest)).exists());
    assert!(!temp_root.join(format!("{}.zip.part", digest)).exists());
    assert_eq!(0, fs::read_dir(&temp_root).unwrap().count());
}

#[cfg(feature = "read-url")]
#[test]
fn unreadable_download_is_fetched_again() {
    let dir = tempfile::tempdir().unwrap();
    let url = "http://gtfs.invalid/klt.zip";
    let temp_root = dir.path().join("extracted");
    fs::create_dir_all(&temp_root).unwrap();
    let zip_path = temp_root.join(format!("{}.zip", crate::archive::url_digest(url)));

    // an error page saved in place of the archive
    fs::write(&zip_path, "<html>Service unavailable</html>").unwrap();
    let result = config(&dir).keep_downloaded_archive(true).open_from_url(url);
    assert!(matches!(result, Err(Error::Extraction { .. })), "{:?}", result);
    assert!(!zip_path.exists());

    let result = config(&dir).open_from_url(url);
    assert!(matches!(result, Err(Error::Retrieval(_))), "{:?}", result);
}

#[test]
fn serialization_deserialization() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);

    let routes = archive.routes().unwrap();
    let string = serde_json::to_string(&*routes).unwrap();
    let parsed: Vec<Route> = serde_json::from_str(&string).unwrap();
    assert_eq!(*routes, parsed);

    let stops = archive.stop_times().unwrap();
    let string = serde_json::to_string(&*stops).unwrap();
    let parsed: Vec<StopTime> = serde_json::from_str(&string).unwrap();
    assert_eq!(*stops, parsed);

    let calendar = archive.calendar_entries().unwrap();
    let string = serde_json::to_string(&*calendar).unwrap();
    let parsed: Vec<CalendarEntry> = serde_json::from_str(&string).unwrap();
    assert_eq!(*calendar, parsed);
    assert!(parsed[0].archive().is_none());

    let stop = archive.stop("9021008004033000").unwrap().unwrap();
    let parsed: Stop = serde_json::from_str(&serde_json::to_string(&stop).unwrap()).unwrap();
    assert_eq!(stop, parsed);
}

#[test]
fn display() {
    let dir = tempfile::tempdir().unwrap();
    let archive = open_klt(&dir);
    let route = archive.route("9011008090100000").unwrap().unwrap();
    assert_eq!("Öresundståg", format!("{}", route));
    let stop = archive.stop("9021008004033000").unwrap().unwrap();
    assert_eq!("Ottenby gård nedre", format!("{}", stop));
}
