use segmenter::image::ImageRgba;
use segmenter::{GraphOptions, SegmentationProvider, SuperpixelOptions};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> segmenter::Result<()> {
    // Demo: a synthetic image with a red left half and a blue right half.
    let (w, h) = (160usize, 120usize);
    let mut rgba = Vec::with_capacity(w * h * 4);
    for _ in 0..h {
        for x in 0..w {
            let px = if x < w / 2 {
                [220, 30, 30, 255]
            } else {
                [30, 30, 220, 255]
            };
            rgba.extend_from_slice(&px);
        }
    }
    let img = ImageRgba::new(w, h, &rgba)?;

    let providers = [
        SegmentationProvider::GraphBased(GraphOptions::default()),
        SegmentationProvider::Superpixel(SuperpixelOptions::default()),
    ];
    for provider in &providers {
        let (result, report) = provider.segment_with_report(img)?;
        println!(
            "{:?}: segments={} latency_ms={:.3}",
            report.algorithm, result.size, report.timing.total_ms
        );
    }
    Ok(())
}
