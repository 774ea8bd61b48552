use segmenter::config::segment;
use segmenter::image::io::{load_rgba_image, save_rgba_png, write_json_file};
use segmenter::labels::encode_label_map;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = segment::load_config(Path::new(&config_path))?;

    let rgba = load_rgba_image(&config.input)?;
    let image = rgba.as_view();
    let (mut result, report) = config
        .provider
        .segment_with_report(image)
        .map_err(|e| format!("Segmentation of {} failed: {e}", config.input.display()))?;

    let encoded = encode_label_map(&result.index_map, result.width, result.height)
        .map_err(|e| e.to_string())?;
    save_rgba_png(&encoded, &config.output.labels_png)?;
    println!(
        "Saved {} segments ({:?}) to {}",
        result.size,
        report.algorithm,
        config.output.labels_png.display()
    );

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("Saved report to {}", path.display());
    }
    if let Some(path) = &config.output.result_json {
        if config.output.include_rgba {
            result = result.with_rgba(&image);
        }
        write_json_file(path, &result)?;
        println!("Saved result to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: segment_image <config.json>".to_string()
}
