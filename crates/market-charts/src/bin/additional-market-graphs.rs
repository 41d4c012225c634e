// File: crates/market-charts/src/bin/additional-market-graphs.rs
// Summary: Supplementary market charts (remote work decline, RTO mandates, language competition, CIS market).

use anyhow::{Context, Result};
use chart_core::{
    Anchor, Annotation, Axis, Chart, Color, Dataset, Figure, Fill, LegendPos, Marker, RefLine, Series, ValueFormat,
};
use chrono::NaiveDate;
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

/// Office mandate announced by a company.
struct RtoMandate {
    company: &'static str,
    date: NaiveDate,
    days: u32,
}

fn mandate(company: &'static str, (y, m, d): (i32, u32, u32), days: u32) -> Result<RtoMandate> {
    let date = NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("invalid mandate date for {company}"))?;
    Ok(RtoMandate { company, date, days })
}

/// Mandates in announcement order.
fn rto_mandates() -> Result<Vec<RtoMandate>> {
    let mut all = vec![
        mandate("Meta", (2023, 6, 1), 3)?,
        mandate("Google", (2024, 1, 1), 3)?,
        mandate("Microsoft", (2024, 2, 1), 3)?,
        mandate("Dell", (2024, 9, 1), 5)?,
        mandate("Amazon", (2025, 1, 2), 5)?,
        mandate("AT&T", (2025, 1, 1), 5)?,
        mandate("Google", (2025, 4, 1), 3)?,
        mandate("Apple", (2023, 1, 1), 3)?,
    ];
    all.sort_by_key(|m| m.date);
    Ok(all)
}

fn remote_work_decline() -> Result<Figure> {
    let periods = ["Q1 2022", "Q3 2022", "Q1 2023", "Q3 2023", "Q1 2024", "Q3 2024", "Q4 2025"];
    let remote = [56.0, 48.0, 38.0, 28.0, 20.0, 15.0, 12.0];
    let full_office = [5.0, 12.0, 22.0, 35.0, 45.0, 52.0, 54.0];

    let decline = Chart::new()
        .with_title("Remote work collapse: 56% → 12%")
        .with_x_axis(Axis::new("Period"))
        .with_y_axis(Axis::new("% of fully remote openings").with_range(0.0, 70.0))
        .with_series(
            Series::line("Fully remote positions", Dataset::new(periods, &remote)?)
                .with_color(DANGER)
                .with_marker(Marker::Circle, 10.0)
                .with_fill(Fill::ToValue(0.0), 0.3),
        )
        .with_annotation(Annotation::callout("Pandemic peak\n56%", (0.0, 56.0), (30.0, 12.0), LIGHT_YELLOW))
        .with_annotation(Annotation::callout("Current level\n12%", (6.0, 12.0), (-90.0, 25.0), LIGHT_YELLOW))
        .with_annotation(Annotation::text("-79% drop", (2.5, 35.0)).with_color(DANGER).with_size(11.0))
        .with_legend(LegendPos::UpperRight);

    let labels = full_office.iter().map(|v| format!("{v}%")).collect();
    let office = Chart::new()
        .with_title("Fortune 500: return to office (5% → 54%)")
        .with_x_axis(Axis::new("Period").without_grid())
        .with_y_axis(Axis::new("% of companies fully in office").with_range(0.0, 65.0))
        .with_series(
            Series::bar("", Dataset::new(periods, &full_office)?)
                .with_color(WARNING)
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(labels)),
        )
        .with_ref_line(RefLine::horizontal(50.0).with_color(DANGER).with_width(2.0).dashed().with_label("Majority (50%)"))
        .with_legend(LegendPos::UpperLeft);

    Ok(Figure::new(14.0, 6.0)
        .with_grid(1, 2)
        .with_suptitle("REMOTE WORK CRISIS: mass return to the office")
        .with_panel(decline)
        .with_panel(office))
}

fn rto_mandates_timeline() -> Result<Figure> {
    let mandates = rto_mandates()?;
    let companies: Vec<&str> = mandates.iter().map(|m| m.company).collect();
    let days: Vec<f64> = mandates.iter().map(|m| f64::from(m.days)).collect();
    let colors: Vec<Color> = mandates.iter().map(|m| if m.days >= 5 { DANGER } else { WARNING }).collect();
    let labels = mandates.iter().map(|m| format!("{} days/week", m.days)).collect();

    let mut chart = Chart::new()
        .with_title("RTO mandates 2023-2025: who went back to the office, and when")
        .with_x_axis(Axis::new("Days in office (per week)").with_range(0.0, 6.0))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(companies, &days)?)
                .with_point_colors(colors)
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(labels)),
        )
        .with_ref_line(RefLine::vertical(3.0).with_color(GRAY).with_width(1.5).with_alpha(0.5).dashed())
        .with_legend_patch("Hybrid (3 days)", WARNING)
        .with_legend_patch("Full RTO (5 days)", DANGER)
        .with_legend(LegendPos::LowerRight);
    for (i, m) in mandates.iter().enumerate() {
        chart = chart.with_annotation(
            Annotation::text(m.date.format("%b %Y").to_string(), (f64::from(m.days) / 2.0, i as f64))
                .with_color(Color::WHITE)
                .with_size(9.0),
        );
    }
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn languages_demand_competition() -> Result<Figure> {
    let languages = [
        "Python\nAI/ML",
        "Go\nDevOps",
        "TypeScript\nBackend",
        "Rust",
        "Java",
        "C#/.NET",
        "Kotlin",
        "TypeScript\nFrontend",
    ];
    let us = [170.0, 157.5, 135.0, 155.0, 131.0, 117.0, 133.0, 113.0];
    let cis = [110.0, 97.5, 70.0, 115.0, 70.0, 70.0, 62.5, 57.5];
    // Applications per opening.
    let competition = [300.0, 175.0, 400.0, 75.0, 400.0, 300.0, 300.0, 1000.0];
    let hire_pct = [80.0, 75.0, 67.5, 55.0, 70.0, 75.0, 70.0, 35.0];

    let k = |v: &[f64]| v.iter().map(|x| format!("${x}K")).collect::<Vec<_>>();
    let salaries = Chart::new()
        .with_title("Senior salaries: USA vs CIS remote")
        .with_x_axis(Axis::new("Programming language").without_grid())
        .with_y_axis(Axis::new("Salary (USD thousands/year)").with_range(0.0, 200.0))
        .with_series(
            Series::bar("USA Remote", Dataset::new(languages, &us)?)
                .with_color(PRIMARY)
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(k(&us[..]))),
        )
        .with_series(
            Series::bar("CIS Remote", Dataset::new(languages, &cis)?)
                .with_color(SUCCESS)
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(k(&cis[..]))),
        )
        .with_legend(LegendPos::UpperRight);

    // Hire chance shares the applications axis: 100% maps to 1200.
    const HIRE_SCALE: f64 = 12.0;
    let hire_scaled: Vec<f64> = hire_pct.iter().map(|p| p * HIRE_SCALE).collect();
    let comp_labels = competition
        .iter()
        .map(|c| if *c >= 1000.0 { format!("{c}+") } else { format!("{c}") })
        .collect();
    let mut contest = Chart::new()
        .with_title("Competition vs hiring chances for CIS")
        .with_x_axis(Axis::new("Programming language").without_grid())
        .with_y_axis(Axis::new("Applications per position (line: CIS hire %, 0-100)").with_range(0.0, 1200.0))
        .with_series(
            Series::bar("Competition (applications)", Dataset::new(languages, &competition)?)
                .with_color(DANGER)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(comp_labels)),
        )
        .with_series(
            Series::line("CIS hire %", Dataset::new(languages, &hire_scaled)?)
                .with_color(SUCCESS)
                .with_marker(Marker::Circle, 10.0),
        )
        .with_legend(LegendPos::UpperLeft);
    for (i, (pct, y)) in hire_pct.iter().zip(&hire_scaled).enumerate() {
        contest = contest.with_annotation(
            Annotation::text(format!("{pct}%"), (i as f64 + 0.15, y + 36.0))
                .with_anchor(Anchor::LEFT)
                .with_color(SUCCESS)
                .with_size(8.0),
        );
    }

    Ok(Figure::new(16.0, 7.0)
        .with_grid(1, 2)
        .with_suptitle("PROGRAMMING LANGUAGES 2025: salaries and competition")
        .with_panel(salaries)
        .with_panel(contest))
}

/// Status mark for remote accessibility: open, limited, blocked.
fn access_mark(score: f64) -> &'static str {
    if score > 70.0 {
        "✓"
    } else if score > 40.0 {
        "⚠"
    } else {
        "✗"
    }
}

fn growth_color(g: f64) -> Color {
    if g > 15.0 {
        SUCCESS
    } else if g > 5.0 {
        WARNING
    } else if g < 0.0 {
        DANGER
    } else {
        NEUTRAL
    }
}

fn cis_market_size() -> Result<Figure> {
    let countries = ["Kazakhstan", "Russia", "Uzbekistan", "Ukraine", "Belarus", "Kyrgyzstan", "Armenia"];
    let vacancies = [50000.0, 59000.0, 18000.0, 35000.0, 12000.0, 5000.0, 8000.0];
    let salaries = [48000.0, 65000.0, 36000.0, 45000.0, 46000.0, 30000.0, 38000.0];
    let growth = [15.0, 63.0, 22.0, -2.0, 4.5, 18.0, 12.0];
    // Subjective 0-100; sanctions keep Russia and Belarus low.
    let remote = [85.0, 20.0, 75.0, 90.0, 35.0, 70.0, 80.0];

    let max_vac = vacancies.iter().copied().fold(0.0, f64::max);
    let openings = Chart::new()
        .with_title("IT market size 2025 (number of openings)")
        .with_x_axis(Axis::new("IT openings").with_format(ValueFormat::Thousands).with_range(0.0, max_vac + 10000.0))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(countries, &vacancies)?)
                .with_point_colors(by_threshold(&vacancies, &[(25000.0, SUCCESS), (10000.0, WARNING)], NEUTRAL))
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Thousands),
        );

    let max_sal = salaries.iter().copied().fold(0.0, f64::max);
    let pay = Chart::new()
        .with_title("Average Senior salaries (local market)")
        .with_x_axis(Axis::new("").without_grid().with_tick_rotation(45.0))
        .with_y_axis(Axis::new("Senior SWE salary (USD/year)").with_format(ValueFormat::DollarsK).with_range(0.0, max_sal + 10000.0))
        .with_series(
            Series::bar("", Dataset::new(countries, &salaries)?)
                .with_point_colors(by_threshold(&salaries, &[(50000.0, SUCCESS), (35000.0, WARNING)], NEUTRAL))
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::DollarsK),
        );

    let rates = Chart::new()
        .with_title("IT market growth rate (2024→2025)")
        .with_x_axis(Axis::new("Market growth, % YoY"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(countries, &growth)?)
                .with_point_colors(growth.iter().map(|g| growth_color(*g)).collect())
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(growth.iter().map(|g| format!("{g:+}%")).collect())),
        )
        .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(2.0));

    let access_labels = remote.iter().map(|r| format!("{r}%\n{}", access_mark(*r))).collect();
    let access = Chart::new()
        .with_title("Access to US/EU remote work")
        .with_x_axis(Axis::new("").without_grid().with_tick_rotation(45.0))
        .with_y_axis(Axis::new("Remote accessibility (0-100)").with_range(0.0, 110.0))
        .with_series(
            Series::bar("", Dataset::new(countries, &remote)?)
                .with_point_colors(by_threshold(&remote, &[(70.0, SUCCESS), (40.0, WARNING)], DANGER))
                .with_alpha(1.0)
                .with_value_labels(ValueFormat::Custom(access_labels)),
        )
        .with_annotation(Annotation::text("Sanctions", (1.0, 10.0)).with_color(DANGER).with_size(8.0))
        .with_annotation(Annotation::text("Sanctions", (4.0, 25.0)).with_color(DANGER).with_size(8.0));

    Ok(Figure::new(16.0, 12.0)
        .with_grid(2, 2)
        .with_suptitle("CIS IT MARKET: openings, salaries, growth and remote access")
        .with_panel(openings)
        .with_panel(pay)
        .with_panel(rates)
        .with_panel(access))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating additional market charts 39-42...")?;

    gen.save_png("39_remote_work_decline", &remote_work_decline()?, "Chart 39: remote work decline")?;
    gen.save_png("40_rto_mandates_timeline", &rto_mandates_timeline()?, "Chart 40: RTO mandates timeline")?;
    gen.save_png(
        "41_languages_demand_competition",
        &languages_demand_competition()?,
        "Chart 41: language demand vs competition",
    )?;
    gen.save_png("42_cis_market_size", &cis_market_size()?, "Chart 42: CIS market size")?;

    gen.finish("All additional market charts created successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandates_are_chronological() {
        let m = rto_mandates().unwrap();
        assert_eq!(m.len(), 8);
        assert_eq!(m[0].company, "Apple");
        // January 1st sorts before Amazon's January 2nd.
        let order: Vec<_> = m.iter().map(|m| m.company).collect();
        assert_eq!(order[5..], ["AT&T", "Amazon", "Google"]);
        assert!(m.windows(2).all(|w| w[0].date <= w[1].date));
    }

    #[test]
    fn growth_colors_follow_bands() {
        let got: Vec<_> = [63.0, 15.0, 4.5, 0.0, -2.0].into_iter().map(growth_color).collect();
        assert_eq!(got, [SUCCESS, WARNING, NEUTRAL, NEUTRAL, DANGER]);
    }

    #[test]
    fn access_marks() {
        assert_eq!([85.0, 70.0, 35.0].map(access_mark), ["✓", "⚠", "✗"]);
    }
}
