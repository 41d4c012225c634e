// File: crates/market-charts/src/harness.rs
// Summary: Output directory handling and save-with-progress helpers shared by every generator.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{Figure, RenderOptions};

/// Directory, relative to the working directory, that receives every artifact.
pub const OUTPUT_DIR: &str = "output";

/// One generator run: owns the output directory and remembers what it wrote.
pub struct Generator {
    out_dir: PathBuf,
    opts: RenderOptions,
    written: Vec<PathBuf>,
}

impl Generator {
    /// Announce the run and create `output/` in the working directory.
    pub fn start(banner: &str) -> Result<Self> {
        Self::in_dir(OUTPUT_DIR, banner)
    }

    pub fn in_dir(dir: impl Into<PathBuf>, banner: &str) -> Result<Self> {
        let out_dir = dir.into();
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
        tracing::debug!(dir = %out_dir.display(), "output directory ready");
        println!("🚀 {banner}");
        Ok(Self { out_dir, opts: RenderOptions::default(), written: Vec::new() })
    }

    pub fn with_options(mut self, opts: RenderOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// 300 DPI trimmed PNG.
    pub fn save_png(&mut self, stem: &str, figure: &Figure, done: &str) -> Result<()> {
        self.png(stem, figure)?;
        println!("✅ {done}");
        Ok(())
    }

    /// PNG plus the vector SVG of the same figure.
    pub fn save_png_svg(&mut self, stem: &str, figure: &Figure, done: &str) -> Result<()> {
        self.png(stem, figure)?;
        let path = self.out_dir.join(format!("{stem}.svg"));
        figure
            .render_to_svg(&self.opts, &path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        self.written.push(path);
        println!("✅ {done}");
        Ok(())
    }

    /// Standalone interactive HTML document.
    pub fn save_html(&mut self, stem: &str, figure: &Figure, done: &str) -> Result<()> {
        let path = self.out_dir.join(format!("{stem}.html"));
        figure
            .render_to_html(&self.opts, &path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        self.written.push(path);
        println!("✅ {done}");
        Ok(())
    }

    fn png(&mut self, stem: &str, figure: &Figure) -> Result<()> {
        let path = self.out_dir.join(format!("{stem}.png"));
        figure
            .render_to_png(&self.opts, &path)
            .with_context(|| format!("failed to save {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }

    /// Print the closing banner and the files this run created.
    pub fn finish(self, message: &str) -> Result<()> {
        let shown = std::fs::canonicalize(&self.out_dir).unwrap_or_else(|_| self.out_dir.clone());
        println!("\n🎉 {message}");
        println!("📁 Files saved to: {}", shown.display());
        println!("\nCreated files:");
        let mut names: Vec<String> = self
            .written
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        for name in names {
            println!("  - {name}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::{Chart, Dataset, Series};

    fn tiny() -> Figure {
        let data = Dataset::new(["a", "b"], &[1.0, 2.0]).unwrap();
        Figure::new(2.0, 2.0).with_panel(Chart::new().with_series(Series::bar("", data)))
    }

    fn fast() -> RenderOptions {
        RenderOptions { dpi: 36.0, draw_labels: false, ..Default::default() }
    }

    #[test]
    fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("output");
        let gen = Generator::in_dir(&dir, "test").unwrap();
        assert!(dir.is_dir());
        assert!(gen.written().is_empty());
        // Idempotent on an existing directory.
        Generator::in_dir(&dir, "again").unwrap();
    }

    #[test]
    fn records_every_written_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut gen = Generator::in_dir(tmp.path(), "test").unwrap().with_options(fast());
        gen.save_png_svg("01_chart", &tiny(), "chart").unwrap();
        gen.save_png("02_chart", &tiny(), "chart").unwrap();
        let names: Vec<String> =
            gen.written().iter().map(|p| p.file_name().unwrap().to_string_lossy().into_owned()).collect();
        assert_eq!(names, ["01_chart.png", "01_chart.svg", "02_chart.png"]);
        assert!(tmp.path().join("01_chart.svg").is_file());
        gen.finish("done").unwrap();
    }
}
