//! Outline command handler

use std::path::Path;
use tech_tree::core::outline::TrackOutline;
use tech_tree::core::parser::parse_tracks_file;
use tech_tree::{error, info};

/// Print the outline of every track in the file. Returns `false` on failure.
pub fn run(input_file: &Path) -> bool {
    let tracks = match parse_tracks_file(input_file) {
        Ok(tracks) => tracks,
        Err(e) => {
            error!("Failed to load tracks {}: {e}", input_file.display());
            eprintln!("✗ Failed to load {}: {e}", input_file.display());
            return false;
        }
    };
    info!("Outlining {} track(s)", tracks.len());

    let outlines = TrackOutline::from_tracks(&tracks);
    if outlines.is_empty() {
        println!("No tracks found in {}", input_file.display());
        return true;
    }

    for outline in &outlines {
        println!("{outline}");
    }
    println!(
        "{} track(s), {} subject(s)",
        outlines.len(),
        tracks.subject_count()
    );
    true
}
