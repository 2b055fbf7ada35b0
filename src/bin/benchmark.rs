//! Cost of history snapshots and export across the supported grid sizes

use std::time::Instant;
use pixel_art::{BrushSize, GridModel, GridSize, Rgb};
use pixel_art::export::{self, ExportOptions};
use rand::Rng;

/// Paint `strokes` random cells, returning ms per paint
fn benchmark_paint(model: &mut GridModel, strokes: u32) -> f64 {
    let mut rng = rand::rng();
    let cells = model.cells().len();

    let start = Instant::now();
    for _ in 0..strokes {
        let color = Rgb::new(rng.random(), rng.random(), rng.random());
        model.paint(rng.random_range(0..cells), color);
    }
    start.elapsed().as_secs_f64() * 1000.0 / strokes as f64
}

/// Undo everything then redo everything, returning ms per step
fn benchmark_undo_redo(model: &mut GridModel) -> f64 {
    let steps = model.undo_depth();
    let start = Instant::now();
    while model.undo() {}
    while model.redo() {}
    start.elapsed().as_secs_f64() * 1000.0 / (2 * steps.max(1)) as f64
}

fn benchmark_export(model: &GridModel, iterations: u32) -> f64 {
    let options = ExportOptions::default();
    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(e) = export::encode_png(model, &options) {
            eprintln!("export failed: {}", e);
            return f64::NAN;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Pixel Art Editor Benchmark ===\n");

    let strokes = 1000;

    println!("{:>10} {:>12} {:>12} {:>14} {:>12}",
        "Size", "Paint", "Undo/Redo", "History", "Export");
    println!("{:-<66}", "");

    for size in GridSize::all() {
        let mut model = GridModel::new(size, Rgb::WHITE);
        model.set_brush_size(BrushSize::Three);

        let paint_ms = benchmark_paint(&mut model, strokes);
        let history_mb = model.history().memory_bytes() as f64 / 1_000_000.0;
        let undo_ms = benchmark_undo_redo(&mut model);
        let export_ms = benchmark_export(&model, 5);

        println!(
            "{:>10} {:>10.4}ms {:>10.4}ms {:>11.2} MB {:>10.2}ms",
            size.label(),
            paint_ms,
            undo_ms,
            history_mb,
            export_ms,
        );
    }
}
