// File: crates/market-charts/src/bin/salary-analysis-graphs.rs
// Summary: Salary charts (experience, tech hubs, roles, certifications, FAANG+, inflation).

use anyhow::Result;
use chart_core::format::dollars;
use chart_core::{Anchor, Annotation, Axis, Chart, Dataset, Figure, Fill, LegendPos, Marker, RefLine, Series, ValueFormat};
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

fn salary_by_experience() -> Result<Figure> {
    let levels = ["Junior\n(0-3 yrs)", "Mid-Level\n(4-9 yrs)", "Senior\n(10-15 yrs)", "Architect/Lead", "Director/VP"];
    let base = [62500.0, 119000.0, 142500.0, 180000.0, 250000.0];
    let total = [70000.0, 145000.0, 185000.0, 250000.0, 400000.0];
    let yoy = [-1.4, 5.8, 3.1, 2.5, 1.8];

    let mut chart = Chart::new()
        .with_title("Salaries by experience level - USA 2025")
        .with_x_axis(Axis::new("Experience Level").without_grid())
        .with_y_axis(Axis::new("Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::bar("Base Salary", Dataset::new(levels, &base)?)
                .with_color(PRIMARY)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::DollarsK),
        )
        .with_series(
            Series::bar("Total Compensation", Dataset::new(levels, &total)?)
                .with_color(SUCCESS)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::DollarsK),
        )
        .with_legend(LegendPos::UpperLeft);
    for (i, (t, change)) in total.iter().zip(yoy).enumerate() {
        chart = chart.with_annotation(
            Annotation::text(format!("{change:+.1}% YoY"), (i as f64, t + 30000.0))
                .with_anchor(Anchor::BOTTOM)
                .with_color(if change > 0.0 { GREEN } else { RED }),
        );
    }
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn regional_tech_hubs() -> Result<Figure> {
    let us_cities = ["SF Bay\nArea", "NYC", "Seattle", "Austin", "US\nAverage"];
    let us_salaries = [168000.0, 160000.0, 155000.0, 153000.0, 135000.0];
    let cost_of_living = [190.0, 175.0, 145.0, 120.0, 100.0];
    let us_labels = us_salaries
        .iter()
        .zip(cost_of_living)
        .map(|(s, col)| format!("{}\nCoL: {col}", dollars(*s)))
        .collect();
    let us = Chart::new()
        .with_title("USA Tech Hubs")
        .with_x_axis(Axis::new("").without_grid())
        .with_y_axis(Axis::new("Average Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::bar("", Dataset::new(us_cities, &us_salaries)?)
                .with_point_colors(by_threshold(&cost_of_living, &[(170.0, DANGER), (140.0, WARNING)], SUCCESS))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(us_labels)),
        );

    let eu_cities = ["Zurich", "London", "Amsterdam", "Munich", "Berlin"];
    let eu_salaries = [145000.0, 96000.0, 76000.0, 71000.0, 70000.0];
    let eu = Chart::new()
        .with_title("Europe Tech Hubs")
        .with_x_axis(Axis::new("").without_grid())
        .with_y_axis(Axis::new("Average Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::bar("", Dataset::new(eu_cities, &eu_salaries)?)
                .with_point_colors(by_threshold(&eu_salaries, &[(100000.0, SUCCESS), (70000.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Dollars),
        );

    Ok(Figure::new(18.0, 8.0)
        .with_grid(1, 2)
        .with_suptitle("Tech hub salaries by region - 2025")
        .with_panel(us)
        .with_panel(eu))
}

fn salary_by_role() -> Result<Figure> {
    let roles = [
        "AI/ML Engineer",
        "Cloud Architect",
        "DevOps Engineer (Senior)",
        "Data Scientist",
        "Cybersecurity (Senior)",
        "Full-Stack Developer",
        "Frontend Developer",
        "Backend Developer",
        "SRE",
        "Engineering Manager",
    ];
    let salaries = [190000.0, 165000.0, 155000.0, 145000.0, 155000.0, 137500.0, 132500.0, 144000.0, 155000.0, 185000.0];
    // Premium over the $120K Java baseline, percent.
    let premiums = [58.0, 38.0, 29.0, 21.0, 29.0, 15.0, 10.0, 20.0, 29.0, 54.0];
    let labels = salaries
        .iter()
        .zip(premiums)
        .map(|(s, p)| format!("{}\n(+{p}% premium)", dollars(*s)))
        .collect();

    let chart = Chart::new()
        .with_title("Salaries by role - USA 2025\n(Premium vs Java baseline $120K)")
        .with_x_axis(Axis::new("Average Total Compensation (USD)").with_format(ValueFormat::DollarsK))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(roles, &salaries)?)
                .with_point_colors(by_threshold(&premiums, &[(40.0, SUCCESS), (20.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(labels)),
        );
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn cloud_certification_roi() -> Result<Figure> {
    let certs = [
        "AWS Solutions\nArchitect Pro",
        "AWS DevOps\nEngineer Pro",
        "AWS Security\nSpecialty",
        "Azure Solutions\nArchitect",
        "Google Cloud\nArchitect",
        "AWS Cloud\nPractitioner",
    ];
    let salaries = [167500.0, 142000.0, 167500.0, 160000.0, 160000.0, 85866.0];
    // Versus the $120K baseline, percent.
    let premiums = [39.6, 18.3, 39.6, 33.3, 33.3, -28.4];
    let labels = salaries
        .iter()
        .zip(premiums)
        .map(|(s, p)| format!("{}\n({p:+.1}%)", dollars(*s)))
        .collect();

    let chart = Chart::new()
        .with_title("Cloud Certifications - Salary Impact 2025\n(73% received a raise, average raise 27%)")
        .with_x_axis(Axis::new("").without_grid())
        .with_y_axis(Axis::new("Average Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::bar("", Dataset::new(certs, &salaries)?)
                .with_point_colors(by_threshold(&premiums, &[(30.0, SUCCESS), (15.0, WARNING), (0.0, INFO)], DANGER))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(labels)),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn faang_total_compensation() -> Result<Figure> {
    let companies = ["OpenAI", "Meta", "LinkedIn", "NVIDIA", "Google", "Amazon", "Microsoft"];
    let median_tc = [875000.0, 453000.0, 355000.0, 290000.0, 265000.0, 265000.0, 240000.0];
    let chart = Chart::new()
        .with_title("FAANG+ Median Total Compensation - 2025")
        .with_x_axis(Axis::new("Median Total Compensation (All Levels, USD)").with_format(ValueFormat::DollarsK))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(companies, &median_tc)?)
                .with_point_colors(by_threshold(&median_tc, &[(400000.0, SUCCESS), (280000.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Dollars),
        );
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn inflation_vs_wages() -> Result<Figure> {
    let quarters = ["Q1\n2024", "Q2\n2024", "Q3\n2024", "Q4\n2024", "Q1\n2025", "Q2\n2025", "Q3\n2025"];
    let wages = [3.8, 3.9, 4.0, 4.1, 4.2, 4.3, 4.2];
    let inflation = [3.2, 3.0, 2.9, 2.8, 2.6, 2.4, 2.7];
    let real = [0.6, 0.9, 1.1, 1.3, 1.6, 1.9, 1.5];

    // Wages outpace inflation in every quarter, so the shaded band spans the whole range.
    let chart = Chart::new()
        .with_title("Inflation vs real wage growth - 2024-2025\n(Real growth = Wage growth - Inflation)")
        .with_x_axis(Axis::new("Quarter"))
        .with_y_axis(Axis::new("Percent (%)"))
        .with_series(
            Series::line("Nominal Wage Growth", Dataset::new(quarters, &wages)?)
                .with_color(SUCCESS)
                .with_marker(Marker::Circle, 8.0)
                .with_fill(Fill::Between(inflation.to_vec()), 0.2)
                .with_fill_label("Positive Real Growth Area"),
        )
        .with_series(
            Series::line("Inflation", Dataset::new(quarters, &inflation)?)
                .with_color(DANGER)
                .with_marker(Marker::Square, 8.0),
        )
        .with_series(
            Series::line("Real Wage Growth", Dataset::new(quarters, &real)?)
                .with_color(PRIMARY)
                .with_marker(Marker::Triangle, 8.0)
                .dashed(),
        )
        .with_ref_line(RefLine::horizontal(0.0).with_color(BLACK).with_width(1.0))
        .with_legend(LegendPos::UpperLeft);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating salary analysis charts...")?;

    gen.save_png("15_salary_by_experience", &salary_by_experience()?, "Chart 15: salaries by experience")?;
    gen.save_png("16_regional_salaries_tech_hubs", &regional_tech_hubs()?, "Chart 16: regional salaries")?;
    gen.save_png("17_salary_by_role", &salary_by_role()?, "Chart 17: salaries by role")?;
    gen.save_png("18_cloud_certification_roi", &cloud_certification_roi()?, "Chart 18: cloud certification ROI")?;
    gen.save_png("19_faang_total_compensation", &faang_total_compensation()?, "Chart 19: FAANG+ compensation")?;
    gen.save_png("20_inflation_vs_wage_growth", &inflation_vs_wages()?, "Chart 20: inflation vs wages")?;

    gen.finish("All salary analysis charts created successfully!")
}
