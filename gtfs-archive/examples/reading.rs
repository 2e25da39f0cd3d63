use gtfs_archive::GtfsArchive;

/// prints the longest shape of the GTFS given as a cli argument
fn main() {
    let file_path = std::env::args()
        .nth(1)
        .expect("you should put the path of the file to load");

    println!("reading file {}", &file_path);
    let archive = GtfsArchive::open(&file_path).expect("impossible to open the gtfs");

    // streamed: one point in memory at a time
    let mut lengths = std::collections::HashMap::new();
    for point in archive.shapes_file().expect("no shapes.txt") {
        let point = point.expect("invalid shape point");
        *lengths.entry(point.id).or_insert(0) += 1;
    }

    if let Some((shape_id, count)) = lengths.into_iter().max_by_key(|(_, count)| *count) {
        // computed once, then served from memory
        let shape = archive.shape(&shape_id).expect("impossible to group the shapes");
        println!("shape {} has {} points", shape_id, count);
        println!("it starts at {:?}", shape.first().map(|p| (p.latitude, p.longitude)));
    }

    archive.cleanup().expect("impossible to remove the extracted files");
}
