// File: crates/market-charts/src/bin/interactive-dashboard.rs
// Summary: Standalone interactive HTML charts with hover tooltips and data tables.

use anyhow::{Context, Result};
use chart_core::format::days_from_date;
use chart_core::{Axis, Chart, Color, Dataset, Figure, LegendPos, Marker, Series, Sunburst, ValueFormat};
use chrono::NaiveDate;
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

fn job_market_dynamics() -> Result<Figure> {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov"];
    let new_jobs = [228000.0, 195000.0, 185000.0, 175000.0, 180000.0, 190000.0, 200000.0, 205000.0, 210000.0, 217238.0, 220000.0];
    let layoffs = [2403.0, 16234.0, 8834.0, 24500.0, 10397.0, 1606.0, 16142.0, 6002.0, 2205.0, 33281.0, 4545.0];

    let jobs = Chart::new()
        .with_title("New IT job openings by month")
        .with_y_axis(Axis::new("").with_format(ValueFormat::Thousands))
        .with_series(
            Series::line("New openings", Dataset::new(months, &new_jobs)?)
                .with_color(SUCCESS)
                .with_marker(Marker::Circle, 10.0)
                .with_hover("{x}<br>Openings: {y:,}"),
        );
    let cuts = Chart::new()
        .with_title("Layoffs by month")
        .with_y_axis(Axis::new("").with_format(ValueFormat::Thousands))
        .with_x_axis(Axis::new("").without_grid())
        .with_series(
            Series::bar("Layoffs", Dataset::new(months, &layoffs)?)
                .with_color(DANGER)
                .without_edge()
                .with_hover("{x}<br>Layoffs: {y:,}"),
        );
    Ok(Figure::new(12.0, 8.0)
        .with_grid(2, 1)
        .with_suptitle("IT market dynamics - 2025 (interactive)")
        .with_panel(jobs)
        .with_panel(cuts))
}

fn programming_languages() -> Result<Figure> {
    let languages = ["Python", "TypeScript", "Rust", "Go", "Java", "JavaScript", "C#", "C++"];
    let tiobe = [23.37, 1.42, 0.0, 1.87, 8.54, 3.42, 7.65, 8.95];
    // TIOBE YoY for most languages, GitHub growth for TypeScript and Rust.
    let yoy = [2.10, 66.63, 35.0, -0.2, -0.45, -0.50, 1.20, -0.30];
    let salaries = [130000.0, 160000.0, 160000.0, 150000.0, 120000.0, 110000.0, 125000.0, 135000.0];

    let panel = |title: &str, series: Series, format: ValueFormat| {
        Chart::new()
            .with_title(title)
            .with_x_axis(Axis::new("").without_grid().with_tick_rotation(-45.0))
            .with_y_axis(Axis::new("").with_format(format))
            .with_series(series.without_edge())
            .with_legend(LegendPos::Hidden)
    };
    Ok(Figure::new(15.0, 5.5)
        .with_grid(1, 3)
        .with_suptitle("Programming languages - Multi-View 2025")
        .with_panel(panel(
            "Popularity (TIOBE)",
            Series::bar("TIOBE Score", Dataset::new(languages, &tiobe)?)
                .with_color(PRIMARY)
                .with_hover("{x}<br>Score: {y}%"),
            ValueFormat::Plain,
        ))
        .with_panel(panel(
            "YoY Growth",
            Series::bar("YoY Change", Dataset::new(languages, &yoy)?)
                .with_point_colors(by_threshold(&yoy, &[(10.0, SUCCESS), (0.0, WARNING)], DANGER))
                .with_value_labels(ValueFormat::SignedPercent(2))
                .with_hover("{x}<br>Change: {y}"),
            ValueFormat::Plain,
        ))
        .with_panel(panel(
            "Average Salary",
            Series::bar("Salary", Dataset::new(languages, &salaries)?)
                .with_color(SUCCESS)
                .with_hover("{x}<br>Salary: {y:$}"),
            ValueFormat::DollarsK,
        )))
}

fn regional_salaries() -> Result<Figure> {
    // Senior SWE salary (USD) and cost-of-living index per city.
    let cities = [
        ("SF Bay Area", 168000.0, 190.0, "USA"),
        ("NYC", 160000.0, 175.0, "USA"),
        ("Seattle", 155000.0, 145.0, "USA"),
        ("Austin", 153000.0, 120.0, "USA"),
        ("Zurich", 145000.0, 210.0, "Europe"),
        ("London", 96000.0, 155.0, "Europe"),
        ("Amsterdam", 76000.0, 155.0, "Europe"),
        ("Berlin", 70000.0, 95.0, "Europe"),
        ("Singapore", 136000.0, 185.0, "APAC"),
        ("Sydney", 90000.0, 140.0, "APAC"),
        ("Bangalore", 24000.0, 30.0, "APAC"),
        ("Almaty", 62000.0, 110.0, "Central Asia"),
    ];
    let region_colors = [("USA", PRIMARY), ("Europe", SECONDARY), ("APAC", SUCCESS), ("Central Asia", WARNING)];
    let color_of = |region: &str| region_colors.iter().find(|(r, _)| *r == region).map_or(NEUTRAL, |(_, c)| *c);

    let points = cities.iter().map(|(_, salary, col, _)| (*col, *salary)).collect();
    let mut chart = Chart::new()
        .with_title("Salaries vs Cost of Living by region - 2025")
        .with_x_axis(Axis::new("Cost of Living Index (baseline = 100)"))
        .with_y_axis(Axis::new("Average Senior SWE Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_series(
            Series::scatter("", points)
                .with_sizes(cities.iter().map(|(_, s, _, _)| *s).collect())
                .with_point_labels(cities.iter().map(|(c, _, _, _)| *c))
                .with_point_colors(cities.iter().map(|(_, _, _, r)| color_of(r)).collect())
                .with_alpha(0.7)
                .with_hover("<b>{name}</b><br>CoL Index: {x}<br>Salary: {y:$}"),
        )
        .with_legend(LegendPos::LowerRight);
    for (region, color) in region_colors {
        chart = chart.with_legend_patch(region, color);
    }
    Ok(Figure::new(12.0, 7.0).with_panel(chart))
}

fn faang_compensation() -> Result<Figure> {
    let companies = ["OpenAI", "Meta", "LinkedIn", "NVIDIA", "Google", "Amazon", "Microsoft"];
    let levels: [(&str, &str, Color, [f64; 7]); 3] = [
        ("Entry Level (L3/IC1)", "Entry", INFO, [242000.0, 183000.0, 151000.0, 165000.0, 187000.0, 184000.0, 167000.0]),
        ("Median (All Levels)", "Median", WARNING, [875000.0, 453000.0, 355000.0, 290000.0, 265000.0, 265000.0, 240000.0]),
        ("Senior (L5/IC3)", "Senior", SUCCESS, [900000.0, 600000.0, 500000.0, 400000.0, 500000.0, 550000.0, 450000.0]),
    ];
    let mut chart = Chart::new()
        .with_title("FAANG+ Total Compensation by level - 2025")
        .with_x_axis(Axis::new("Company").without_grid())
        .with_y_axis(Axis::new("Total Compensation (USD)").with_format(ValueFormat::DollarsK))
        .with_legend(LegendPos::UpperRight);
    for (name, short, color, values) in levels {
        chart = chart.with_series(
            Series::bar(name, Dataset::new(companies, &values)?)
                .with_color(color)
                .without_edge()
                .with_hover(format!("{{x}}<br>{short}: {{y:$}}")),
        );
    }
    Ok(Figure::new(12.0, 7.0).with_panel(chart))
}

fn tech_ecosystem() -> Figure {
    let nodes: [(&str, &str, f64); 21] = [
        ("IT Market", "", 100.0),
        ("USA", "IT Market", 35.0),
        ("Europe", "IT Market", 15.0),
        ("APAC", "IT Market", 40.0),
        ("Central Asia", "IT Market", 1.0),
        ("SF Bay", "USA", 12.0),
        ("NYC", "USA", 8.0),
        ("London", "Europe", 6.0),
        ("Berlin", "Europe", 4.0),
        ("Singapore", "APAC", 15.0),
        ("Bangalore", "APAC", 12.0),
        ("Almaty", "Central Asia", 0.5),
        ("Python", "IT Market", 8.0),
        ("TypeScript", "IT Market", 7.0),
        ("Rust", "IT Market", 2.0),
        ("Go", "IT Market", 3.0),
        ("Java", "IT Market", 9.0),
        ("AI/ML", "IT Market", 15.0),
        ("Web Dev", "IT Market", 20.0),
        ("Mobile", "IT Market", 10.0),
        ("DevOps", "IT Market", 8.0),
    ];
    let sunburst = nodes
        .iter()
        .fold(Sunburst::new(), |sb, (label, parent, value)| sb.with_node(*label, *parent, *value));
    Figure::new(10.0, 10.0).with_suptitle("IT Market Ecosystem - Hierarchical View 2025").with_panel(sunburst)
}

fn layoffs_timeline() -> Result<Figure> {
    let events = [
        ("Intel", "2025-04-01", 23000.0),
        ("Microsoft", "2025-05-01", 15000.0),
        ("Amazon", "2025-10-28", 14000.0),
        ("Salesforce", "2025-03-01", 8000.0),
        ("Meta", "2025-01-15", 4200.0),
        ("Oracle", "2025-08-13", 3000.0),
        ("Google", "2025-04-15", 500.0),
    ];
    let mut dated = events
        .iter()
        .map(|(company, date, count)| {
            let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").with_context(|| format!("bad date {date}"))?;
            Ok((*company, day, *count))
        })
        .collect::<Result<Vec<_>>>()?;
    dated.sort_by_key(|(_, day, _)| *day);

    let colors: Vec<Color> = (0..dated.len()).map(|i| chart_core::Palette::report().cycle(i)).collect();
    let mut chart = Chart::new()
        .with_title("Timeline of the largest layoffs - 2025")
        .with_x_axis(Axis::new("Date").with_format(ValueFormat::Date))
        .with_y_axis(Axis::new("Number of Layoffs").with_format(ValueFormat::Thousands))
        .with_series(
            Series::scatter("", dated.iter().map(|(_, day, n)| (days_from_date(*day), *n)).collect())
                .with_sizes(dated.iter().map(|(_, _, n)| *n).collect())
                .with_point_labels(dated.iter().map(|(c, _, _)| *c))
                .with_point_colors(colors.clone())
                .with_alpha(0.7)
                .with_hover("<b>{name}</b><br>Date: {x}<br>Layoffs: {y:,}"),
        )
        .with_legend(LegendPos::UpperRight);
    for ((company, _, _), color) in dated.iter().zip(colors) {
        chart = chart.with_legend_patch(*company, color);
    }
    Ok(Figure::new(12.0, 7.0).with_panel(chart))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Creating interactive charts...")?;

    gen.save_html("interactive_01_job_market_dynamics", &job_market_dynamics()?, "Interactive chart 1: market dynamics")?;
    gen.save_html("interactive_02_programming_languages", &programming_languages()?, "Interactive chart 2: programming languages")?;
    gen.save_html("interactive_03_regional_salaries", &regional_salaries()?, "Interactive chart 3: regional salaries")?;
    gen.save_html("interactive_04_faang_compensation", &faang_compensation()?, "Interactive chart 4: FAANG compensation")?;
    gen.save_html("interactive_05_tech_ecosystem_sunburst", &tech_ecosystem(), "Interactive chart 5: tech ecosystem sunburst")?;
    gen.save_html("interactive_06_layoffs_timeline", &layoffs_timeline()?, "Interactive chart 6: layoffs timeline")?;

    gen.finish("All interactive charts created successfully! Open the HTML files in a browser.")
}
