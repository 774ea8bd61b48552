use rayon::prelude::*;
use segmenter::config::batch::{self, BatchToolConfig};
use segmenter::image::io::{load_rgba_image, save_rgba_png, write_json_file};
use segmenter::labels::encode_label_map;
use std::env;
use std::path::{Path, PathBuf};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = batch::load_config(Path::new(&config_path))?;

    let pool = {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = config.threads {
            builder = builder.num_threads(threads.max(1));
        }
        builder
            .build()
            .map_err(|e| format!("Failed to start worker pool: {e}"))?
    };

    // Each input is an independent segmentation with its own buffers.
    let outcomes: Vec<(PathBuf, Result<usize, String>)> = pool.install(|| {
        config
            .inputs
            .par_iter()
            .map(|input| (input.clone(), process_one(&config, input)))
            .collect()
    });

    let mut failures = 0usize;
    for (input, outcome) in &outcomes {
        match outcome {
            Ok(size) => println!("{}: {} segments", input.display(), size),
            Err(err) => {
                failures += 1;
                eprintln!("{}: {err}", input.display());
            }
        }
    }
    if failures > 0 {
        return Err(format!("{failures} of {} inputs failed", outcomes.len()));
    }
    Ok(())
}

fn process_one(config: &BatchToolConfig, input: &Path) -> Result<usize, String> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Input {} has no file name", input.display()))?;
    let rgba = load_rgba_image(input)?;
    let (result, report) = config
        .provider
        .segment_with_report(rgba.as_view())
        .map_err(|e| e.to_string())?;
    let encoded = encode_label_map(&result.index_map, result.width, result.height)
        .map_err(|e| e.to_string())?;
    save_rgba_png(&encoded, &config.labels_path(stem))?;
    write_json_file(&config.report_path(stem), &report)?;
    Ok(result.size)
}

fn usage() -> String {
    "Usage: segment_batch <config.json>".to_string()
}
