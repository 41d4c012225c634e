// File: crates/market-charts/src/bin/job-market-graphs.rs
// Summary: Job market charts (monthly dynamics, Indeed index, work arrangements, hiring, outlook).

use anyhow::Result;
use chart_core::{
    Annotation, Axis, Chart, Dataset, Figure, Fill, LegendPos, Marker, PieChart, RefLine, Series, ValueFormat,
};
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

fn monthly_job_dynamics() -> Result<Figure> {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov"];
    let new_jobs = Dataset::new(
        months,
        &[228000.0, 195000.0, 185000.0, 175000.0, 180000.0, 190000.0, 200000.0, 205000.0, 210000.0, 217238.0, 220000.0],
    )?;
    // Verified against Layoffs.fyi, TechCrunch and CNBC (Nov 2025); November is partial.
    let layoffs = Dataset::new(
        months,
        &[2403.0, 16234.0, 8834.0, 24500.0, 10397.0, 1606.0, 16142.0, 6002.0, 2205.0, 33281.0, 4545.0],
    )?;

    let mut jobs = Chart::new()
        .with_title("New IT job openings by month")
        .with_y_axis(Axis::new("Openings").with_format(ValueFormat::Thousands))
        .with_series(
            Series::line("New openings", new_jobs.clone())
                .with_color(SUCCESS)
                .with_marker(Marker::Circle, 8.0)
                .with_fill(Fill::ToValue(0.0), 0.3),
        )
        .with_legend(LegendPos::UpperRight);
    if let Some((i, peak)) = new_jobs.peak() {
        jobs = jobs.with_annotation(Annotation::callout(
            format!("Peak: {}", chart_core::format::thousands(peak as i64)),
            (i as f64, peak),
            (20.0, 20.0),
            YELLOW,
        ));
    }

    let apr = months.iter().position(|m| *m == "Apr").unwrap_or(3);
    let oct = months.iter().position(|m| *m == "Oct").unwrap_or(9);
    let cuts = Chart::new()
        .with_title("Tech industry layoffs by month")
        .with_x_axis(Axis::new("Month 2025").without_grid())
        .with_y_axis(Axis::new("Layoffs").with_format(ValueFormat::Thousands))
        .with_series(Series::bar("Layoffs", layoffs.clone()).with_color(DANGER).with_alpha(0.7).without_edge())
        .with_annotation(
            Annotation::callout("Intel: 21-25K\n(one of the largest)", (apr as f64, layoffs.values()[apr]), (20.0, 30.0), ORANGE)
                .with_box(ORANGE, 0.5),
        )
        .with_annotation(
            Annotation::callout("Peak: 33,281\n(Amazon 14K + others)", (oct as f64, layoffs.values()[oct]), (20.0, 30.0), RED)
                .with_box(RED, 0.5),
        );

    Ok(Figure::new(16.0, 10.0)
        .with_grid(2, 1)
        .with_suptitle("IT job market dynamics - 2025")
        .with_panel(jobs)
        .with_panel(cuts))
}

fn indeed_job_index() -> Result<Figure> {
    let dates = ["Jan 1", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct 31"];
    let index = Dataset::new(dates, &[111.7, 109.5, 107.3, 106.0, 105.2, 104.5, 103.8, 103.0, 102.3, 101.7])?;
    let first = index.values()[0];
    let last_i = index.len() - 1;
    let last = index.values()[last_i];

    let chart = Chart::new()
        .with_title("Indeed Job Postings Index - 2025 trend\n(Baseline: pre-pandemic 2020 = 100)")
        .with_x_axis(Axis::new("2025"))
        .with_y_axis(Axis::new("Index Value"))
        .with_series(
            Series::line("Indeed Job Postings Index", index)
                .with_color(PRIMARY)
                .with_marker(Marker::Circle, 10.0)
                .with_fill(Fill::ToValue(100.0), 0.2),
        )
        .with_ref_line(RefLine::horizontal(100.0).with_color(RED).with_width(2.0).dashed().with_label("Pre-pandemic level (100)"))
        .with_annotation(Annotation::callout(
            format!("Start of year: {first}\n(+10.7% above baseline)"),
            (0.0, first),
            (30.0, 20.0),
            LIGHT_GREEN,
        ))
        .with_annotation(Annotation::callout(
            format!("End of October: {last}\n(+1.7% above baseline)\nDecline: -10 points"),
            (last_i as f64, last),
            (30.0, -40.0),
            LIGHT_YELLOW,
        ))
        .with_legend(LegendPos::UpperRight);
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn work_arrangements() -> Result<Figure> {
    let colors = vec![DANGER, WARNING, SUCCESS];
    let pie = |title: &str, labels: [&str; 3], values: &[f64]| -> Result<PieChart> {
        Ok(PieChart::new(labels, values)?.with_title(title).with_colors(colors.clone()).exploded(0.05))
    };
    Ok(Figure::new(18.0, 6.0)
        .with_grid(1, 3)
        .with_suptitle("Work arrangement distribution - 2025")
        .with_panel(pie("IT sector (US)", ["On-Site\n56%", "Hybrid\n29%", "Remote\n15%"], &[56.0, 29.0, 15.0])?)
        .with_panel(pie("US overall (all sectors)", ["On-Site\n61%", "Hybrid\n26%", "Remote\n13%"], &[61.0, 26.0, 13.0])?)
        .with_panel(pie("Poland IT (H1 2025)", ["On-Site\n7%", "Hybrid\n47.1%", "Remote\n45.9%"], &[7.0, 47.1, 45.9])?))
}

fn time_to_hire() -> Result<Figure> {
    let positions = [
        "Junior\nDeveloper",
        "Mid-Level\nDeveloper",
        "Senior\nEngineer",
        "Data\nScientist",
        "DevOps\nEngineer",
        "Cybersecurity\nAnalyst",
        "Engineering\nManager",
        "C-Suite\n(CTO/CIO)",
    ];
    let days = [65.0, 45.0, 50.0, 55.0, 60.0, 70.0, 80.0, 120.0];
    let colors = days
        .iter()
        .map(|&d| if d > 60.0 { WARNING } else if d < 50.0 { SUCCESS } else { INFO })
        .collect();

    let chart = Chart::new()
        .with_title("Average time to hire by position - 2025")
        .with_x_axis(Axis::new("Days"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(positions, &days)?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Suffix("days".into())),
        )
        .with_ref_line(RefLine::vertical(44.0).with_color(RED).with_width(2.0).dashed().with_label("Global avg (44 days)"));
    Ok(Figure::new(12.0, 8.0).with_panel(chart))
}

fn competition_metrics() -> Result<Figure> {
    let categories = [
        "Jobs transformed by\nGenAI (high)",
        "Jobs transformed by\nGenAI (moderate)",
        "Tech leaders struggling\nto find talent",
        "Skills gap\nreported",
        "Roles filled\nwithin 60 days",
    ];
    let chart = Chart::new()
        .with_title("Key competition and hiring metrics - 2025")
        .with_x_axis(Axis::new("").without_grid().with_tick_rotation(-15.0))
        .with_y_axis(Axis::new("Percent (%)").with_range(0.0, 100.0))
        .with_series(
            Series::bar("", Dataset::new(categories, &[26.0, 54.0, 87.0, 76.0, 75.0])?)
                .with_point_colors(vec![DANGER, WARNING, PRIMARY, SECONDARY, SUCCESS])
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Percent),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn global_job_distribution() -> Result<Figure> {
    let regions = ["US", "Europe\n(EU)", "India", "China", "Central\nAsia", "Other"];
    // Approximate annual openings.
    let openings = [356700.0, 800000.0, 500000.0, 400000.0, 50000.0, 893300.0];
    let chart = Chart::new()
        .with_title("Global distribution of IT job openings by region - 2025")
        .with_x_axis(Axis::new("").without_grid())
        .with_y_axis(Axis::new("Annual openings").with_format(ValueFormat::Kilo))
        .with_series(
            Series::bar("", Dataset::new(regions, &openings)?)
                .with_point_colors(vec![PRIMARY, SECONDARY, SUCCESS, WARNING, INFO, NEUTRAL])
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Thousands),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn employment_outlook() -> Result<Figure> {
    let regions = ["APAC\n(overall)", "India", "Singapore", "Australia", "Europe\n(EU)", "US", "Central\nAsia"];
    // Net Employment Outlook, percent.
    let outlook = [30.0, 42.5, 25.5, 13.0, 15.0, 18.0, 25.0];
    let labels = outlook.iter().map(|v| format!("+{}%", chart_core::format::plain(*v))).collect();
    let chart = Chart::new()
        .with_title("Net Employment Outlook by region - 2025")
        .with_x_axis(Axis::new("Net Employment Outlook (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(regions, &outlook)?)
                .with_point_colors(by_threshold(&outlook, &[(25.0, SUCCESS), (15.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(labels)),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating job market charts...")?;

    gen.save_png_svg("01_monthly_job_dynamics", &monthly_job_dynamics()?, "Chart 1: monthly job dynamics")?;
    gen.save_png_svg("02_indeed_job_index", &indeed_job_index()?, "Chart 2: Indeed Job Postings Index")?;
    gen.save_png_svg("03_work_arrangements", &work_arrangements()?, "Chart 3: work arrangements")?;
    gen.save_png_svg("04_time_to_hire", &time_to_hire()?, "Chart 4: time to hire")?;
    gen.save_png_svg("05_competition_metrics", &competition_metrics()?, "Chart 5: competition metrics")?;
    gen.save_png_svg("06_global_job_distribution", &global_job_distribution()?, "Chart 6: global job distribution")?;
    gen.save_png_svg("07_employment_outlook", &employment_outlook()?, "Chart 7: employment outlook")?;

    gen.finish("All job market charts created successfully!")
}
