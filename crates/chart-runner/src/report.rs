// File: crates/chart-runner/src/report.rs
// Summary: Colored progress and summary output for a batch run, plus output-file counting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use owo_colors::OwoColorize;

use crate::batch::{BatchSummary, Outcome, RunResult};

/// Stderr shown for a failed generator, in characters.
pub const STDERR_PREVIEW: usize = 500;

const RULE_WIDTH: usize = 80;

/// First `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub png: usize,
    pub svg: usize,
    pub html: usize,
}

impl FileCounts {
    pub fn total(&self) -> usize {
        self.png + self.svg + self.html
    }
}

/// Count chart artifacts directly inside `dir` by extension.
pub fn count_outputs(dir: &Path) -> io::Result<FileCounts> {
    let mut counts = FileCounts::default();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("png") => counts.png += 1,
            Some("svg") => counts.svg += 1,
            Some("html") => counts.html += 1,
            _ => {}
        }
    }
    Ok(counts)
}

/// Writes the human-facing report; stdout in the binary, a buffer in tests.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, text: &str) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "\n{}", rule.magenta().bold())?;
        writeln!(self.out, "{}", format!("{text:^RULE_WIDTH$}").magenta().bold())?;
        writeln!(self.out, "{}\n", rule.magenta().bold())
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("✅ {text}").green())
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("❌ {text}").red())
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("ℹ️  {text}").cyan())
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("⚠️  {text}").yellow())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn step(&mut self, i: usize, n: usize, name: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}", format!("[{i}/{n}] {name}").bold())
    }

    pub fn result(&mut self, r: &RunResult, timeout: Duration) -> io::Result<()> {
        match &r.outcome {
            Outcome::Succeeded => {
                self.success(&format!("{} finished in {:.1}s", r.name, r.elapsed.as_secs_f64()))?;
                for line in r.highlights() {
                    writeln!(self.out, "  {line}")?;
                }
                Ok(())
            }
            Outcome::Failed { code } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                self.error(&format!("{} failed (code: {code})", r.name))?;
                if !r.stderr.is_empty() {
                    writeln!(self.out, "{}", "Stderr:".red())?;
                    writeln!(self.out, "{}", truncate_chars(&r.stderr, STDERR_PREVIEW))?;
                }
                Ok(())
            }
            Outcome::TimedOut => self.error(&format!("{} exceeded the timeout ({} s)", r.name, timeout.as_secs())),
            Outcome::SpawnFailed { reason } => self.error(&format!("Failed to start {}: {reason}", r.name)),
            Outcome::Missing => self.error(&format!("Generator not found: {}", r.name)),
        }
    }

    pub fn summary(&mut self, s: &BatchSummary, counts: &FileCounts, out_dir: &Path) -> io::Result<()> {
        let n = s.total();
        self.header("RUN SUMMARY")?;
        writeln!(self.out, "Total time: {}", format!("{:.1} seconds", s.elapsed.as_secs_f64()).bold())?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", format!("Successful: {}/{n}", s.successful()).green())?;
        if s.failed() > 0 {
            writeln!(self.out, "{}", format!("Failed: {}/{n}", s.failed()).red())?;
            writeln!(self.out, "\nFailed generators:")?;
            for name in s.failed_names() {
                writeln!(self.out, "  {}", format!("❌ {name}").red())?;
            }
        }

        writeln!(self.out, "\n{}", "Created files:".bold())?;
        writeln!(self.out, "  PNG images: {}", counts.png)?;
        writeln!(self.out, "  SVG vectors: {}", counts.svg)?;
        writeln!(self.out, "  HTML interactive: {}", counts.html)?;
        writeln!(self.out, "  {}", format!("Total: {} files", counts.total()).bold())?;
        writeln!(self.out, "\n{}", format!("📁 All files saved to: {}", out_dir.display()).cyan())?;

        if s.all_succeeded() {
            writeln!(self.out, "\n{}", "🎉 ALL VISUALIZATIONS CREATED SUCCESSFULLY!".green().bold())?;
            writeln!(self.out, "\n{}", "To view the interactive charts:".cyan())?;
            writeln!(self.out, "  cd {}", out_dir.display())?;
            writeln!(self.out, "  open interactive_01_job_market_dynamics.html  # macOS")?;
            writeln!(self.out, "  xdg-open interactive_01_job_market_dynamics.html  # Linux")?;
        } else {
            writeln!(self.out)?;
            self.warning("Some generators failed")?;
            writeln!(self.out, "Check the log above for details")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "ошибка".repeat(100);
        let cut = truncate_chars(&text, STDERR_PREVIEW);
        assert_eq!(cut.chars().count(), 500);
        assert_eq!(truncate_chars("short", STDERR_PREVIEW), "short");
    }

    #[test]
    fn counts_only_chart_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for f in ["a.png", "b.png", "c.svg", "d.html", "notes.txt"] {
            std::fs::write(dir.path().join(f), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();
        let counts = count_outputs(dir.path()).unwrap();
        assert_eq!(counts, FileCounts { png: 2, svg: 1, html: 1 });
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn failed_run_prints_code_and_stderr_preview() {
        let mut rep = Reporter::new(Vec::new());
        let long = "e".repeat(800);
        let r = RunResult::new("salary-analysis-graphs", Outcome::Failed { code: Some(2) }, Duration::ZERO)
            .with_output(String::new(), long);
        rep.result(&r, Duration::from_secs(300)).unwrap();
        let text = String::from_utf8(rep.into_inner()).unwrap();
        assert!(text.contains("salary-analysis-graphs failed (code: 2)"));
        assert!(text.contains(&"e".repeat(500)));
        assert!(!text.contains(&"e".repeat(501)));
    }

    #[test]
    fn summary_lists_failures() {
        let summary = BatchSummary {
            results: vec![
                RunResult::new("one", Outcome::Succeeded, Duration::ZERO),
                RunResult::new("two", Outcome::TimedOut, Duration::ZERO),
            ],
            elapsed: Duration::from_secs(3),
        };
        let mut rep = Reporter::new(Vec::new());
        let counts = FileCounts { png: 3, svg: 1, html: 0 };
        rep.summary(&summary, &counts, Path::new("/tmp/output")).unwrap();
        let text = String::from_utf8(rep.into_inner()).unwrap();
        assert!(text.contains("Successful: 1/2"));
        assert!(text.contains("Failed: 1/2"));
        assert!(text.contains("❌ two"));
        assert!(text.contains("Total: 4 files"));
        assert!(!text.contains("🎉"));
    }
}
