use std::path::Path;

use anyhow::Result;
use plotty_sketches::prelude::*;

/// Fractal mountains on an A4 sheet, one canvas per seed. Feed the output
/// folder to `plotsketch poster --rows 3 --columns 2` for a contact sheet.
fn main() -> Result<()> {
    let layout = CanvasLayout {
        padding: 15.0,
        ..CanvasLayout::default()
    };
    let canvas = layout.canvas();
    let fname = Path::new(file!())
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("terrain");
    let base = SketchConfig::Terrain(TerrainConfig {
        terrain_size: 128,
        randomness: 30.0,
        surface_divisor: 4.0,
        angle: 200.0,
        ..TerrainConfig::default()
    });

    for (i, seed) in [1234, 4321, 777, 9001, 31337, 2024].into_iter().enumerate() {
        let mut renderer = SvgRenderer::new(&canvas);
        base.with_seed(seed).draw(&canvas, &mut renderer)?;
        renderer.save(format!("images/{}_{:03}.svg", fname, i))?;
    }
    Ok(())
}
