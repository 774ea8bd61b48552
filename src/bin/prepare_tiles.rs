use segmenter::config::tiles;
use segmenter::tiles::prepare_tiles;
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
    let config = tiles::load_config(Path::new(&config_path))?;
    println!(
        "Processing\nImage: {}\nLegend: {}",
        config.input.display(),
        config.legend.display()
    );
    let manifest = prepare_tiles(&config)?;
    println!(
        "Saved {} tiles and {} labels; config written to {}",
        manifest.image_urls.len(),
        manifest.labels.len(),
        config.config_out.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: prepare_tiles <config.json>".to_string()
}
