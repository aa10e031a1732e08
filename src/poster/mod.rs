//! Poster sheets: a LaTeX document laying out a directory of exported SVG
//! sketches as a `rows x columns` grid, ready for `pdflatex --shell-escape`.
//!
//! Two files are written into the output directory, `figures.tex` (the grid)
//! and `main.tex` (page geometry and footers), next to a copy of the input
//! SVGs.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::errors::SketchError;

const FIGURES_TEMPLATE: &str = r"\begin{figure}[p]
\centering
{% for row in files %}{% for file in row %}\begin{minipage}{ {{- text_width_scalar -}} \textwidth}
\centering
\includesvg[width=0.95\linewidth]{ {{- file -}} }
\end{minipage}{% endfor %}
{% if not loop.last %}\vspace{1em}
{% endif %}{% endfor %}\end{figure}
";

const MAIN_TEMPLATE: &str = r"\documentclass[a4paper]{article}
\usepackage[left={{ left }}mm,right={{ right }}mm,top={{ top }}mm,bottom={{ bottom }}mm]{geometry}
\usepackage{svg}
\usepackage{fancyhdr}
\pagestyle{fancy}
\fancyhf{}
\renewcommand{\headrulewidth}{0pt}
\lfoot{ {{- left_footer -}} }
\rfoot{ {{- right_footer -}} }
\begin{document}
\input{figures.tex}
\end{document}
";

/// Page margins in mm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PosterLayout {
    pub rows: u32,
    pub columns: u32,
    /// Left + right, mm.
    pub width_margin: f64,
    /// Top + bottom, mm. A third goes on top, the rest under the grid for the footer.
    pub height_margin: f64,
    /// Raw LaTeX.
    pub left_footer: String,
    /// Raw LaTeX.
    pub right_footer: String,
}

impl Default for PosterLayout {
    fn default() -> Self {
        PosterLayout {
            rows: 3,
            columns: 2,
            width_margin: 20.0,
            height_margin: 30.0,
            left_footer: r"\today".to_string(),
            right_footer: r"\#001".to_string(),
        }
    }
}

/// Sort key for an exported sketch: whatever follows the last `_`, so
/// `terrain_003.svg` sorts as `003.svg`.
fn suffix_key(name: &str) -> &str {
    name.rsplit('_').next().unwrap_or(name)
}

impl PosterLayout {
    pub fn new(rows: u32, columns: u32) -> PosterLayout {
        PosterLayout {
            rows,
            columns,
            ..PosterLayout::default()
        }
    }

    pub fn margins(&self) -> PageMargins {
        PageMargins {
            left: self.width_margin / 2.0,
            right: self.width_margin / 2.0,
            top: self.height_margin / 3.0,
            bottom: 2.0 * self.height_margin / 3.0,
        }
    }

    /// Share of the text width each figure gets.
    pub fn text_width_scalar(&self) -> f64 {
        1.0 / self.columns as f64
    }

    pub fn cells(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Arranges file names row-major into the grid, prefixing each with
    /// `directory/`. Files past the last cell are left out.
    pub fn organize<S: AsRef<str>>(
        &self,
        directory: &str,
        files: &[S],
    ) -> Result<Vec<Vec<String>>, SketchError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(SketchError::ConfigError(format!(
                "Poster grid {}x{} has no cells",
                self.rows, self.columns
            )));
        }
        if files.len() < self.cells() {
            return Err(SketchError::ConfigError(format!(
                "Poster grid {}x{} needs {} files, found {}",
                self.rows,
                self.columns,
                self.cells(),
                files.len()
            )));
        }
        let mut names: Vec<&str> = files.iter().map(|f| f.as_ref()).collect();
        names.sort();
        names.sort_by(|a, b| suffix_key(a).cmp(suffix_key(b)));

        Ok(names
            .chunks(self.columns as usize)
            .take(self.rows as usize)
            .map(|row| {
                row.iter()
                    .map(|name| format!("{}/{}", directory, name))
                    .collect()
            })
            .collect())
    }

    fn templates() -> Result<Tera, SketchError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("figures.tex", FIGURES_TEMPLATE),
            ("main.tex", MAIN_TEMPLATE),
        ])?;
        Ok(tera)
    }

    pub fn render_figures(&self, files: &[Vec<String>]) -> Result<String, SketchError> {
        let mut context = Context::new();
        context.insert("files", files);
        context.insert("text_width_scalar", &self.text_width_scalar());
        Ok(PosterLayout::templates()?.render("figures.tex", &context)?)
    }

    pub fn render_main(&self) -> Result<String, SketchError> {
        let margins = self.margins();
        let mut context = Context::new();
        context.insert("left", &margins.left);
        context.insert("right", &margins.right);
        context.insert("top", &margins.top);
        context.insert("bottom", &margins.bottom);
        context.insert("left_footer", &self.left_footer);
        context.insert("right_footer", &self.right_footer);
        Ok(PosterLayout::templates()?.render("main.tex", &context)?)
    }

    /// Copies the SVGs in `input` to `output/<input dir name>/` and writes
    /// `figures.tex` and `main.tex` next to them. Returns the path of `main.tex`.
    pub fn build<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<PathBuf, SketchError> {
        let input = input.as_ref();
        let output = output.as_ref();
        let directory = input
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                SketchError::ConfigError(format!("{} is not a directory", input.display()))
            })?;
        let target = output.join(&directory);
        std::fs::create_dir_all(&target)?;

        let mut files = Vec::new();
        for entry in std::fs::read_dir(input)? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "svg") {
                if let Some(name) = path.file_name() {
                    std::fs::copy(&path, target.join(name))?;
                    files.push(name.to_string_lossy().to_string());
                }
            }
        }
        debug!(count = files.len(), directory = %target.display(), "copied sketches");

        let grid = self.organize(&directory, &files)?;
        std::fs::write(output.join("figures.tex"), self.render_figures(&grid)?)?;
        let main = output.join("main.tex");
        std::fs::write(&main, self.render_main()?)?;
        info!(
            rows = self.rows,
            columns = self.columns,
            main = %main.display(),
            "wrote poster"
        );
        Ok(main)
    }
}
