use std::path::Path;

use anyhow::Result;
use plotty_sketches::prelude::*;

/// A row of spirographs. Same radii, the pen arm gets longer each time, and
/// every third one rolls outside the fixed circle instead of inside.
fn main() -> Result<()> {
    let canvas = CanvasSize {
        width: 400.0,
        height: 400.0,
        padding: 20.0,
    };
    let fname = Path::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roulette");

    for i in 0..6u32 {
        let sketch = SketchConfig::Roulette(RouletteConfig {
            radius_one: 5.0,
            radius_two: 3.0,
            distance: 1.0 + i as f64,
            point_count: 200,
            segment_multiplier: 30,
            shape_type: if i % 3 == 2 { 1 } else { 0 },
            ..RouletteConfig::default()
        });
        let mut renderer = SvgRenderer::new(&canvas);
        sketch.draw(&canvas, &mut renderer)?;
        renderer.save(format!("images/{}_{:03}.svg", fname, i))?;
    }
    Ok(())
}
