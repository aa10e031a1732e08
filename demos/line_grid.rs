use std::path::Path;

use anyhow::Result;
use plotty_sketches::prelude::*;

/// Joy-division style wobble: two crossed grids of noisy lines on one canvas.
fn main() -> Result<()> {
    let canvas = CanvasSize {
        width: 600.0,
        height: 600.0,
        padding: 30.0,
    };
    let sketch = SketchConfig::LineGrid(LineGridConfig {
        line_count: 40,
        point_count: 80,
        noise_scale: 1.2,
        orientation: Orientation::Both,
        ..LineGridConfig::default()
    });

    let mut renderer = SvgRenderer::new(&canvas);
    sketch.draw(&canvas, &mut renderer)?;

    // Write it out to /images/$THIS_EXAMPLE_FILE.svg
    let fname = Path::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("line_grid");
    renderer.save(format!("images/{}.svg", fname))?;
    Ok(())
}
