use review_model::Snapshot;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading review snapshot from {}...\n", data_dir.display());

    let start = Instant::now();
    let snapshot = Snapshot::load_from_dir(data_dir)
        .expect("Failed to load snapshot");
    let elapsed = start.elapsed();

    let (reviews, sources, competitors) = snapshot.counts();
    let unreplied = snapshot.reviews().iter().filter(|r| !r.replied).count();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Reviews: {} ({} awaiting a reply)", reviews, unreplied);
    println!("Sources: {}", sources);
    println!("Competitors: {}", competitors);
    println!("\nPerformance: {:.0} reviews/second",
             reviews as f64 / elapsed.as_secs_f64());
}
