//! Build command handler
//!
//! Loads a tracks file, builds the positioned tech tree and exports it.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use tech_tree::config::Config;
use tech_tree::core::export::ExportFormat;
use tech_tree::core::models::{SkillStatus, TechGraph};
use tech_tree::core::parser::parse_tracks_file;
use tech_tree::core::progress::ProgressMap;
use tech_tree::core::GraphBuilder;
use tech_tree::{error, info, verbose};

/// Arguments of one `build` invocation
pub struct BuildRequest<'a> {
    /// Tracks JSON file
    pub input_file: &'a Path,
    /// Export format name as typed by the user
    pub format: &'a str,
    /// Explicit output path
    pub output_file: Option<&'a Path>,
    /// Optional subject → status map
    pub progress_file: Option<&'a Path>,
}

/// Run the build command. Returns `false` when it failed.
pub fn run(request: &BuildRequest<'_>, config: &Config) -> bool {
    match build_and_export(request, config) {
        Ok(()) => true,
        Err(err) => {
            error!(
                "Build failed for {}: {err}",
                request.input_file.display()
            );
            eprintln!("{err}");
            false
        }
    }
}

fn build_and_export(request: &BuildRequest<'_>, config: &Config) -> Result<(), String> {
    let format = ExportFormat::from_str(request.format)
        .map_err(|e| format!("✗ {e}. Use: json, mermaid, or html"))?;

    let tracks = parse_tracks_file(request.input_file).map_err(|e| {
        error!("Failed to load tracks {}: {e}", request.input_file.display());
        format!("✗ Failed to load {}: {e}", request.input_file.display())
    })?;
    info!(
        "Loaded {} track(s) from {}",
        tracks.len(),
        request.input_file.display()
    );

    let mut builder = GraphBuilder::new().with_layout_config(config.layout_config());
    if let Some(progress_file) = request.progress_file {
        let progress = ProgressMap::from_file(progress_file).map_err(|e| {
            format!(
                "✗ Failed to load progress {}: {e}",
                progress_file.display()
            )
        })?;
        info!(
            "Loaded {} subject status(es) from {}",
            progress.len(),
            progress_file.display()
        );
        builder = builder.with_status_policy(progress);
    }

    let graph = builder.build(&tracks);
    let output_path = resolve_output_path(request, format, config)?;

    format
        .exporter(builder.node_size())
        .export(&graph, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    println!("✓ Tech tree exported to: {}", output_path.display());
    info!("Exported {format} tech tree to: {}", output_path.display());

    print_summary(&graph);
    verbose!("\n{graph}");

    Ok(())
}

/// Explicit `-o` path, or `<out_dir>/<input stem>_tree.<ext>`
fn resolve_output_path(
    request: &BuildRequest<'_>,
    format: ExportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = request.output_file {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create directory {}: {e}", parent.display())
            })?;
        }
        return Ok(output.to_path_buf());
    }

    let out_dir = PathBuf::from(&config.paths.out_dir);
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        format!(
            "✗ Failed to create output directory {}: {e}",
            out_dir.display()
        )
    })?;

    Ok(out_dir.join(default_file_name(request.input_file, format)))
}

fn default_file_name(input_file: &Path, format: ExportFormat) -> String {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("tracks");
    format!("{stem}_tree.{}", format.extension())
}

fn print_summary(graph: &TechGraph) {
    let count = |status: SkillStatus| graph.nodes.iter().filter(|n| n.status == status).count();
    let emphasized = graph.edges.iter().filter(|e| e.emphasized).count();

    println!("\n=== Summary ===");
    println!("Skills: {}", graph.node_count());
    println!(
        "Mastered: {}  Available: {}  Locked: {}",
        count(SkillStatus::Mastered),
        count(SkillStatus::Available),
        count(SkillStatus::Locked)
    );
    println!(
        "Connections: {} ({emphasized} emphasized)",
        graph.edge_count()
    );
}
