// File: crates/market-charts/src/bin/salary-comparison-graphs.rs
// Summary: Three-year salary comparison charts (2023-2025) for the USA, Europe and CIS remote work.

use anyhow::Result;
use chart_core::{
    Anchor, Annotation, Axis, Band, Chart, Color, Dataset, Figure, HAlign, LegendPos, LineStyle, Marker, RefLine, Series,
    VAlign, ValueFormat,
};
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

const YEARS: [&str; 3] = ["2023", "2024", "2025"];

/// "$140K" for a value already in thousands.
fn k(v: f64) -> String {
    format!("${v:.0}K")
}

/// Thousands label with the year-over-year change underneath.
fn k_with_change(values: &[f64], changes: &[f64]) -> Vec<String> {
    values.iter().zip(changes).map(|(v, c)| format!("{}\n({c:+.1}%)", k(*v))).collect()
}

/// Percent change from `before` to `after`, element-wise.
fn changes(before: &[f64], after: &[f64]) -> Vec<f64> {
    before.iter().zip(after).map(|(b, a)| (a - b) / b * 100.0).collect()
}

/// Three grouped bar series, one per year.
fn three_years(chart: Chart, labels: &[&str], values: [&[f64]; 3], colors: [Color; 3]) -> Result<Chart> {
    let mut chart = chart;
    for ((year, v), color) in YEARS.iter().zip(values).zip(colors) {
        chart = chart.with_series(Series::bar(*year, Dataset::new(labels.iter().copied(), v)?).with_color(color).with_alpha(0.8));
    }
    Ok(chart)
}

fn salary_by_experience() -> Result<Figure> {
    let levels = ["Junior\n(0-2 yrs)", "Mid-level\n(2-5 yrs)", "Senior\n(5-10 yrs)", "Staff/Lead\n(10+ yrs)", "Principal\n(15+ yrs)"];
    let s2023 = [77500.0, 104000.0, 157500.0, 205000.0, 247500.0];
    let s2024 = [80000.0, 110000.0, 162500.0, 212500.0, 260000.0];
    let s2025 = [77968.0, 104840.0, 164482.0, 215295.0, 269546.0];
    let changes_24 = [3.2, 5.8, 3.2, 3.7, 5.0];
    let changes_25 = [-2.5, -4.7, 1.2, 1.3, 3.7];
    let senior_median = s2025[2];

    let in_k = |v: &[f64]| v.iter().map(|x| x / 1000.0).collect::<Vec<_>>();
    let chart = Chart::new()
        .with_title("US Software Engineer salaries by experience level (2023-2025)")
        .with_x_axis(Axis::new("Experience Level").without_grid())
        .with_y_axis(Axis::new("Average Salary (USD)").with_format(ValueFormat::DollarsK).with_range(0.0, 300000.0))
        .with_series(
            Series::bar("2023", Dataset::new(levels, &s2023)?)
                .with_color(DANGER)
                .with_alpha(0.8)
                .with_value_labels(ValueFormat::DollarsK),
        )
        .with_series(
            Series::bar("2024", Dataset::new(levels, &s2024)?)
                .with_color(WARNING)
                .with_alpha(0.8)
                .with_value_labels(ValueFormat::Custom(k_with_change(&in_k(&s2024[..]), &changes_24))),
        )
        .with_series(
            Series::bar("2025", Dataset::new(levels, &s2025)?)
                .with_color(SUCCESS)
                .with_alpha(0.8)
                .with_value_labels(ValueFormat::Custom(k_with_change(&in_k(&s2025[..]), &changes_25))),
        )
        .with_ref_line(RefLine::horizontal(senior_median).with_color(PRIMARY).with_width(2.0).with_alpha(0.5).dashed())
        .with_annotation(
            Annotation::text("Senior median 2025: $164K", (levels.len() as f64 - 0.55, senior_median + 10000.0))
                .with_anchor(Anchor::new(HAlign::Right, VAlign::Bottom))
                .with_color(PRIMARY),
        )
        .with_legend(LegendPos::UpperLeft);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn salary_by_language() -> Result<Figure> {
    let languages = ["Rust", "Go", "Scala", "TypeScript", "Python", "Kotlin", "Java", "C#"];
    let s2023 = [140.0, 135.0, 133.0, 130.0, 125.0, 127.0, 115.0, 113.0];
    let s2024 = [145.0, 140.0, 137.0, 133.0, 128.0, 130.0, 117.0, 115.0];
    let s2025 = [140.0, 137.5, 140.0, 136.0, 125.7, 133.0, 131.0, 117.0];

    let chart = Chart::new()
        .with_title("Salaries by programming language, USA - Senior Level (2023-2025)")
        .with_x_axis(Axis::new("Programming Language").without_grid().with_tick_rotation(45.0))
        .with_y_axis(Axis::new("Average Senior Salary (USD, thousands)").with_range(0.0, 160.0))
        .with_band(Band::horizontal(140.0, 160.0).with_color(PURPLE).with_alpha(0.1))
        .with_annotation(Annotation::text("AI/ML\npremium", (0.5, 150.0)).with_color(PURPLE));
    let chart = three_years(chart, &languages, [&s2023, &s2024, &s2025], [PRIMARY, WARNING, SUCCESS])?;
    let chart = label_last(chart, s2025.iter().map(|v| k(*v)).collect()).with_legend(LegendPos::UpperRight);
    Ok(Figure::new(14.0, 9.0).with_panel(chart))
}

/// Put custom value labels on the most recent series only.
fn label_last(mut chart: Chart, labels: Vec<String>) -> Chart {
    if let Some(last) = chart.series.pop() {
        chart.add_series(last.with_value_labels(ValueFormat::Custom(labels)));
    }
    chart
}

fn salary_by_role() -> Result<Figure> {
    let roles = ["ML/AI", "DevOps/SRE", "Security", "Backend", "Full-Stack", "Mobile", "Frontend"];

    let us2023 = [192.5, 150.0, 145.0, 140.0, 135.0, 130.0, 125.0];
    let us2024 = [220.0, 165.0, 153.5, 147.5, 140.0, 135.0, 130.0];
    let us2025 = [241.4, 170.0, 151.5, 158.9, 139.9, 116.4, 127.5];
    let us = Chart::new()
        .with_title("USA - Senior Roles (2023-2025)")
        .with_x_axis(Axis::new("Role").without_grid().with_tick_rotation(45.0))
        .with_y_axis(Axis::new("Average Salary (USD, thousands)").with_range(0.0, 270.0));
    let us = three_years(us, &roles, [&us2023, &us2024, &us2025], [DANGER, WARNING, SUCCESS])?;
    let us = label_last(us, k_with_change(&us2025, &changes(&us2024, &us2025))).with_legend(LegendPos::UpperRight);

    let eu2023 = [105.0, 85.0, 82.0, 79.0, 76.5, 73.5, 70.0];
    let eu2024 = [115.0, 90.0, 86.5, 83.5, 80.5, 77.0, 73.5];
    let eu2025 = [122.5, 93.5, 89.0, 85.5, 82.5, 79.0, 75.5];
    let eu_labels = eu2025
        .iter()
        .zip(changes(&eu2024, &eu2025))
        .map(|(v, c)| format!("€{v:.0}K\n({c:+.1}%)"))
        .collect();
    let eu = Chart::new()
        .with_title("Europe - Senior Roles (2023-2025)")
        .with_x_axis(Axis::new("Role").without_grid().with_tick_rotation(45.0))
        .with_y_axis(Axis::new("Average Salary (EUR, thousands)").with_range(0.0, 140.0));
    let eu = three_years(eu, &roles, [&eu2023, &eu2024, &eu2025], [DANGER, WARNING, SUCCESS])?;
    let eu = label_last(eu, eu_labels).with_legend(LegendPos::UpperRight);

    Ok(Figure::new(16.0, 8.0).with_grid(1, 2).with_panel(us).with_panel(eu))
}

fn salary_by_city() -> Result<Figure> {
    let cities = ["SF Bay\nArea", "Seattle", "NYC", "Austin", "Remote\nUS"];
    let s2023 = [249.0, 225.0, 185.0, 165.0, 157.5];
    let s2024 = [265.0, 242.0, 190.0, 175.0, 172.5];
    let s2025 = [257.0, 202.0, 155.0, 142.5, 155.4];
    let yoy = [-3.0, -16.5, -18.4, -18.6, -9.9];

    let chart = Chart::new()
        .with_title("US salaries by city - Senior Software Engineer (2023-2025)\n2025 correction: RTO policies + oversupply")
        .with_x_axis(Axis::new("City/Type").without_grid())
        .with_y_axis(Axis::new("Average Senior SWE Salary (USD, thousands)").with_range(0.0, 300.0))
        .with_annotation(
            Annotation::callout("Remote premium\nfell from\n+10% to -10%", (4.0, s2025[4]), (-150.0, 100.0), YELLOW)
                .with_box(YELLOW, 0.3)
                .with_color(DANGER),
        );
    let chart = three_years(chart, &cities, [&s2023, &s2024, &s2025], [PRIMARY, WARNING, SUCCESS])?;
    let chart = label_last(chart, k_with_change(&s2025, &yoy)).with_legend(LegendPos::UpperRight);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn salary_by_country() -> Result<Figure> {
    let countries = [
        "Switzerland\n(Zurich)",
        "UK\n(London)",
        "Netherlands\n(Amsterdam)",
        "Germany\n(Berlin)",
        "Poland\n(Warsaw)",
    ];
    let s2023 = [108.0, 115.0, 70.0, 62.0, 45.0];
    let s2024 = [114.0, 117.0, 75.0, 65.0, 50.0];
    let s2025 = [143.0, 100.0, 115.0, 74.8, 56.5];
    let yoy = [25.4, -14.5, 53.3, 15.1, 13.0];

    let chart = Chart::new()
        .with_title("Salaries by European country - Senior Software Engineer (2023-2025)\nHigh variance in 2025 data")
        .with_x_axis(Axis::new("Country (city)").without_grid())
        .with_y_axis(Axis::new("Average Senior SWE Salary (USD, thousands)").with_range(0.0, 160.0))
        .with_annotation(
            Annotation::callout("Amsterdam:\ntrimodal\ndistribution\n(big tech boom)", (2.0, s2025[2]), (-170.0, 70.0), LIGHT_GREEN)
                .with_box(LIGHT_GREEN, 0.5),
        );
    let chart = three_years(chart, &countries, [&s2023, &s2024, &s2025], [SECONDARY, WARNING, SUCCESS])?;
    let chart = label_last(chart, k_with_change(&s2025, &yoy)).with_legend(LegendPos::UpperLeft);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn cis_remote_salaries() -> Result<Figure> {
    let levels = [("Junior", Marker::Circle, LineStyle::Solid), ("Mid", Marker::Square, LineStyle::Dashed), ("Senior", Marker::Triangle, LineStyle::Dotted)];
    let ukraine = [[20.0, 21.5, 20.0], [30.0, 32.5, 32.5], [41.5, 46.0, 45.0]];
    let belarus = [[18.0, 20.0, 20.0], [28.0, 31.0, 33.0], [39.0, 44.0, 46.0]];
    let russia = [38.5, 34.0, 30.0];

    let mut chart = Chart::new()
        .with_title("CIS remote developer salaries (2023-2025)\nWorking for Western companies")
        .with_x_axis(Axis::new("Year"))
        .with_y_axis(Axis::new("Remote salary for Western companies (USD, thousands)").with_range(15.0, 55.0))
        .with_band(Band::horizontal(32.0, 46.0).with_color(ORANGE).with_alpha(0.1))
        .with_annotation(
            Annotation::text("Stagnation zone\n2024-2025", (1.0, 40.0)).with_box(YELLOW, 0.3),
        );
    for (country, rows, color) in [("Ukraine", &ukraine, PRIMARY), ("Belarus", &belarus, SUCCESS)] {
        for ((level, marker, style), values) in levels.iter().zip(rows.iter()) {
            chart = chart.with_series(
                Series::line(format!("{country} {level}"), Dataset::new(YEARS, values)?)
                    .with_color(color)
                    .with_marker(*marker, 8.0)
                    .with_line_width(2.5)
                    .with_line_style(*style),
            );
        }
        let senior = &rows[2];
        for (i, v) in senior.iter().enumerate() {
            chart = chart.with_annotation(
                Annotation::text(k(*v), (i as f64, v + 1.0)).with_anchor(Anchor::BOTTOM).with_color(color).with_size(9.0),
            );
        }
    }
    chart = chart
        .with_series(
            Series::line("Russia Avg (estimate)", Dataset::new(YEARS, &russia)?)
                .with_color(DANGER)
                .with_marker(Marker::Diamond, 8.0)
                .with_line_width(2.5)
                .with_line_style(LineStyle::DashDot),
        )
        .with_annotation(
            Annotation::text("$30K\n(sanctions)", (2.0, russia[2] - 2.0)).with_anchor(Anchor::TOP).with_color(DANGER).with_size(9.0),
        )
        .with_legend(LegendPos::UpperLeft);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn yoy_changes_heatmap() -> Result<Figure> {
    let categories = [
        "Junior USA", "Mid USA", "Senior USA", "Staff USA", "Principal USA",
        "Junior EU", "Mid EU", "Senior EU", "Staff EU",
        "Rust USA", "Go USA", "Python USA", "TypeScript USA", "Java USA",
        "ML/AI USA", "DevOps USA", "Backend USA", "Frontend USA", "Mobile USA",
        "SF Bay", "Seattle", "NYC", "Austin", "Remote US",
        "Ukraine Mid", "Belarus Mid", "Russia",
    ];
    let changes = [
        -2.5, -4.7, 1.2, 1.3, 3.7, -3.3, -5.0, -2.8, -3.9, -3.4, -2.9, -1.8, 2.2, 6.5, 9.7, 3.0, 7.9, -1.7, -13.8,
        -3.0, -16.5, -18.4, -18.6, -9.9, 0.0, 6.5, -21.1,
    ];
    // Growth, stagnation, decline, sharp decline.
    let colors = by_threshold(&changes, &[(3.0, SUCCESS), (0.0, GOLD), (-5.0, WARNING)], DANGER);

    let chart = Chart::new()
        .with_title("Year-over-Year salary changes 2024→2025 across all categories")
        .with_x_axis(Axis::new("YoY change 2024→2025 (%)").with_range(-25.0, 15.0))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(categories, &changes)?)
                .with_point_colors(colors)
                .with_alpha(0.8)
                .with_value_labels(ValueFormat::SignedPercent(1)),
        )
        .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(2.0))
        .with_legend_patch("< -5% (Sharp decline)", DANGER)
        .with_legend_patch("-5% to 0% (Decline)", WARNING)
        .with_legend_patch("0% to +3% (Stagnation)", GOLD)
        .with_legend_patch("> +3% (Growth)", SUCCESS)
        .with_legend(LegendPos::LowerRight);
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn ai_ml_premium_trend() -> Result<Figure> {
    let ml = [192.5, 220.0, 241.4];
    let average = [136.3, 144.4, 143.2];
    let roles: [(&str, [f64; 3], Color, LineStyle, Marker); 4] = [
        ("DevOps/SRE", [150.0, 165.0, 170.0], PRIMARY, LineStyle::Dashed, Marker::Square),
        ("Backend Engineer", [140.0, 147.5, 158.9], SUCCESS, LineStyle::Dotted, Marker::Triangle),
        ("Frontend Engineer", [125.0, 130.0, 127.5], WARNING, LineStyle::DashDot, Marker::Diamond),
        ("Mobile Developer", [130.0, 135.0, 116.4], DANGER, LineStyle::DashDot, Marker::TriangleDown),
    ];

    let mut chart = Chart::new()
        .with_title("AI/ML Engineer premium vs other roles (2023-2025)\nMachine learning is the gold mine of the IT industry")
        .with_x_axis(Axis::new("Year"))
        .with_y_axis(Axis::new("Average Senior Salary (USD, thousands)").with_range(100.0, 260.0))
        .with_band(Band::vertical(0.5, 2.5).with_color(PURPLE).with_alpha(0.1))
        .with_annotation(Annotation::text("AI Boom\n2024-2025", (1.5, 220.0)).with_box(LAVENDER, 0.5))
        .with_series(
            Series::line("ML/AI Engineer", Dataset::new(YEARS, &ml)?)
                .with_color(SECONDARY)
                .with_marker(Marker::Circle, 10.0),
        );
    for (name, values, color, style, marker) in roles {
        chart = chart.with_series(
            Series::line(name, Dataset::new(YEARS, &values)?)
                .with_color(color)
                .with_marker(marker, 8.0)
                .with_line_width(2.5)
                .with_line_style(style),
        );
    }
    chart = chart.with_series(
        Series::line("Average (excl. ML/AI)", Dataset::new(YEARS, &average)?)
            .with_color(GRAY)
            .with_marker(Marker::Cross, 8.0)
            .with_line_width(2.0)
            .with_alpha(0.7)
            .dashed(),
    );
    for (i, (m, avg)) in ml.iter().zip(average).enumerate() {
        let premium = (m / avg - 1.0) * 100.0;
        chart = chart.with_annotation(
            Annotation::text(format!("{}\n(+{premium:.0}%)", k(*m)), (i as f64, m + 5.0))
                .with_anchor(Anchor::BOTTOM)
                .with_box(PINK, 0.5)
                .with_color(SECONDARY)
                .with_size(9.0),
        );
    }
    Ok(Figure::new(14.0, 8.0).with_panel(chart.with_legend(LegendPos::UpperLeft)))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating salary comparison charts 2023-2025...")?;

    gen.save_png("31_salary_by_experience_usa", &salary_by_experience()?, "Chart 31: salaries by experience, USA")?;
    gen.save_png("32_salary_by_language_usa", &salary_by_language()?, "Chart 32: salaries by language, USA")?;
    gen.save_png("33_salary_by_role_comparison", &salary_by_role()?, "Chart 33: salaries by role, USA vs Europe")?;
    gen.save_png("34_salary_by_city_usa", &salary_by_city()?, "Chart 34: salaries by city, USA")?;
    gen.save_png("35_salary_by_country_europe", &salary_by_country()?, "Chart 35: salaries by country, Europe")?;
    gen.save_png("36_salary_cis_remote", &cis_remote_salaries()?, "Chart 36: CIS remote salaries")?;
    gen.save_png("37_yoy_changes_heatmap", &yoy_changes_heatmap()?, "Chart 37: year-over-year changes")?;
    gen.save_png("38_ai_ml_premium_trend", &ai_ml_premium_trend()?, "Chart 38: AI/ML premium trend")?;

    gen.finish("All 8 comparison charts created successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_are_percent_of_the_earlier_value() {
        let c = changes(&[220.0, 135.0], &[241.4, 116.4]);
        assert!((c[0] - 9.727).abs() < 0.01);
        assert!((c[1] + 13.78).abs() < 0.01);
    }

    #[test]
    fn labels_carry_signed_change() {
        assert_eq!(k_with_change(&[155.4, 45.0], &[-9.9, 3.0]), ["$155K\n(-9.9%)", "$45K\n(+3.0%)"]);
    }

    #[test]
    fn only_the_last_series_is_labeled() {
        let chart = three_years(Chart::new(), &["a"], [&[1.0], &[2.0], &[3.0]], [PRIMARY, WARNING, SUCCESS]).unwrap();
        let chart = label_last(chart, vec!["$3K".into()]);
        assert_eq!(chart.series.len(), 3);
        assert!(chart.series[..2].iter().all(|s| s.value_labels.is_none()));
        assert_eq!(chart.series[2].name, "2025");
        assert!(chart.series[2].value_labels.is_some());
    }
}
