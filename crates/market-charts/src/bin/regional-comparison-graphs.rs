// File: crates/market-charts/src/bin/regional-comparison-graphs.rs
// Summary: Regional comparison charts (workforce, city salaries, purchasing power, Europe, Central Asia).

use anyhow::Result;
use chart_core::{Axis, Chart, Dataset, Figure, LegendPos, PieChart, RefLine, Series, ValueFormat};
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

fn workforce_distribution() -> Result<Figure> {
    let regions = ["US", "Europe\n(EU)", "India", "China", "Central\nAsia", "Other\nAPAC"];
    let colors = vec![PRIMARY, SECONDARY, SUCCESS, WARNING, INFO, NEUTRAL];
    let mut share = PieChart::new(regions, &[6100000.0, 2000000.0, 3500000.0, 4000000.0, 189500.0, 1500000.0])?
        .with_title("IT Workforce Distribution")
        .with_colors(colors.clone());
    share.explode = vec![0.05, 0.0, 0.0, 0.0, 0.0, 0.0];

    let growth = Chart::new()
        .with_title("Projected Growth Rates")
        .with_x_axis(Axis::new("Annual Growth Rate (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(regions, &[13.0, 5.0, 12.4, 8.0, 9.36, 10.0])?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Percent),
        );

    Ok(Figure::new(18.0, 8.0)
        .with_grid(1, 2)
        .with_suptitle("Global IT workforce distribution - 2025")
        .with_panel(share)
        .with_panel(growth))
}

fn regional_salaries() -> Result<Figure> {
    // Senior SWE, 2025.
    let cities = [
        ("SF Bay Area", 168000.0, "USA"),
        ("NYC", 160000.0, "USA"),
        ("Seattle", 155000.0, "USA"),
        ("Austin", 153000.0, "USA"),
        ("Zurich", 145000.0, "Europe"),
        ("London", 96000.0, "Europe"),
        ("Amsterdam", 76000.0, "Europe"),
        ("Berlin", 70000.0, "Europe"),
        ("Singapore", 136000.0, "APAC"),
        ("Sydney", 90000.0, "APAC"),
        ("Bangalore", 24000.0, "APAC"),
        ("Almaty", 62000.0, "Central Asia"),
        ("Tashkent", 23700.0, "Central Asia"),
    ];
    let region_colors = [("USA", PRIMARY), ("Europe", SECONDARY), ("APAC", SUCCESS), ("Central Asia", INFO)];
    let colors = cities
        .iter()
        .map(|(_, _, r)| region_colors.iter().find(|(name, _)| name == r).map_or(NEUTRAL, |(_, c)| *c))
        .collect();
    let salaries: Vec<f64> = cities.iter().map(|(_, s, _)| *s).collect();

    let mut chart = Chart::new()
        .with_title("Senior Software Engineer salaries by city - 2025")
        .with_x_axis(Axis::new("Average Senior SWE Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(cities.iter().map(|(c, _, _)| *c), &salaries)?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Dollars),
        )
        .with_legend(LegendPos::LowerRight);
    for (name, color) in region_colors {
        chart = chart.with_legend_patch(name, color);
    }
    Ok(Figure::new(16.0, 10.0).with_panel(chart))
}

fn purchasing_power() -> Result<Figure> {
    let cities = ["Austin", "Seattle", "Berlin", "Bangalore", "Singapore", "NYC", "SF Bay Area", "London", "Zurich"];
    let nominal = [143629.0, 136523.0, 65524.0, 15000.0, 70000.0, 145149.0, 148924.0, 73993.0, 145000.0];
    let real = [120000.0, 94000.0, 69000.0, 50000.0, 38000.0, 83000.0, 78000.0, 48000.0, 69000.0];

    let chart = Chart::new()
        .with_title("Nominal vs Real Purchasing Power (CoL-Adjusted) - 2025")
        .with_x_axis(Axis::new("City").without_grid().with_tick_rotation(-45.0))
        .with_y_axis(Axis::new("Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::bar("Nominal Salary", Dataset::new(cities, &nominal)?)
                .with_color(WARNING)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::DollarsK),
        )
        .with_series(
            Series::bar("Real Purchasing Power", Dataset::new(cities, &real)?)
                .with_color(SUCCESS)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::DollarsK),
        );
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn europe_decline() -> Result<Figure> {
    let countries = ["UK", "France", "Germany", "Netherlands", "Poland"];
    let decline = [-41.0, -39.0, -30.0, -12.0, -10.0];
    let colors = decline
        .iter()
        .map(|&d| if d < -30.0 { DANGER } else if d < -20.0 { WARNING } else { INFO })
        .collect();
    let chart = Chart::new()
        .with_title("Europe Tech Job Postings - Decline from Peak (Feb 2020 - Oct 2025)")
        .with_x_axis(Axis::new("Decline from Peak (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(countries, &decline)?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Percent)
                .labels_inside(),
        )
        .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(2.0));
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn central_asia_roles() -> Result<Figure> {
    let roles = ["Big Data\nSpecialists", "Fintech\nEngineers", "AI/ML\nExperts", "Software\nDevelopers", "Data\nAnalysts"];
    let growth = [100.0, 92.0, 83.0, 57.0, 41.0];
    let labels = growth.iter().map(|g| format!("+{g}%")).collect();
    let chart = Chart::new()
        .with_title("Central Asia - Fastest-Growing Roles (Projected Demand)")
        .with_x_axis(Axis::new("").without_grid())
        .with_y_axis(Axis::new("Projected Demand Growth (%)"))
        .with_series(
            Series::bar("", Dataset::new(roles, &growth)?)
                .with_point_colors(by_threshold(&growth, &[(80.0, SUCCESS), (50.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(labels)),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating regional comparison charts...")?;

    gen.save_png("26_global_workforce_distribution", &workforce_distribution()?, "Chart 26: global workforce distribution")?;
    gen.save_png("27_regional_salaries_comparison", &regional_salaries()?, "Chart 27: regional salary comparison")?;
    gen.save_png("28_col_adjusted_purchasing_power", &purchasing_power()?, "Chart 28: CoL-adjusted purchasing power")?;
    gen.save_png("29_europe_job_postings_decline", &europe_decline()?, "Chart 29: Europe job postings decline")?;
    gen.save_png("30_central_asia_growing_roles", &central_asia_roles()?, "Chart 30: Central Asia growing roles")?;

    gen.finish("All regional comparison charts created successfully!")
}
