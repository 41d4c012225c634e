// File: crates/market-charts/src/bin/programming-languages-graphs.rs
// Summary: Programming language charts (popularity indices, YoY change, domains, frameworks, salaries).

use anyhow::Result;
use chart_core::format::{dollars, plain};
use chart_core::{
    Anchor, Annotation, Axis, Chart, Color, Dataset, Figure, PieChart, RefLine, Series, ValueFormat,
};
use market_charts::palette::*;
use market_charts::{init_tracing, Generator};

/// Highlight a few languages by name; everything else gets `PRIMARY`.
fn highlight(languages: &[&str], picks: &[(&str, Color)]) -> Vec<Color> {
    languages
        .iter()
        .map(|l| picks.iter().find(|(name, _)| name == l).map_or(PRIMARY, |(_, c)| *c))
        .collect()
}

fn index_panel(title: &str, x_label: &str, languages: &[&str], scores: &[f64], colors: Vec<Color>, format: ValueFormat) -> Result<Chart> {
    Ok(Chart::new()
        .with_title(title)
        .with_x_axis(Axis::new(x_label))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(languages.iter().copied(), scores)?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(format),
        ))
}

fn popularity_indices() -> Result<Figure> {
    let tiobe = ["Python", "C", "C++", "Java", "C#", "JavaScript", "Visual Basic", "Go", "SQL", "TypeScript"];
    let pypl = ["Python", "Java", "JavaScript", "C#", "C++", "C", "R", "PHP", "TypeScript", "Rust"];
    let so = ["Python", "TypeScript", "Rust", "Go", "Kotlin", "C#", "Swift", "Java", "JavaScript", "PHP"];
    let github = ["TypeScript", "Python", "Rust", "Go", "Java", "JavaScript", "C#", "PHP", "Swift", "Kotlin"];
    let growth = [66.63, 48.78, 35.0, 20.0, 5.0, 3.0, 10.0, -5.0, 8.0, 15.0];
    let trio = [("Python", SUCCESS), ("TypeScript", WARNING), ("Rust", DANGER)];

    let github_panel = index_panel(
        "GitHub Contributors Growth (2025)",
        "YoY Growth (%)",
        &github,
        &growth,
        by_threshold(&growth, &[(30.0, SUCCESS), (10.0, WARNING), (0.0, INFO)], DANGER),
        ValueFormat::SignedPercent(1),
    )?
    .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(1.0));

    Ok(Figure::new(18.0, 12.0)
        .with_grid(2, 2)
        .with_suptitle("Programming language popularity by index - 2025")
        .with_panel(index_panel(
            "TIOBE Index (November 2025)",
            "Score (%)",
            &tiobe,
            &[23.37, 9.68, 8.95, 8.54, 7.65, 3.42, 2.15, 1.87, 1.67, 1.42],
            highlight(&tiobe, &trio[..2]),
            ValueFormat::Percent,
        )?)
        .with_panel(index_panel(
            "PYPL PopularitY (2025)",
            "Share (%)",
            &pypl,
            &[28.97, 15.92, 8.38, 6.77, 6.48, 4.73, 4.45, 4.28, 3.50, 2.59],
            highlight(&pypl, &trio),
            ValueFormat::Percent,
        )?)
        .with_panel(index_panel(
            "Stack Overflow Survey 2025",
            "Adoption (%)",
            &so,
            &[57.9, 38.2, 9.1, 11.2, 8.5, 27.3, 6.2, 30.5, 63.2, 20.1],
            highlight(&so, &trio),
            ValueFormat::Percent,
        )?)
        .with_panel(github_panel))
}

fn yoy_changes() -> Result<Figure> {
    let languages = ["TypeScript", "Rust", "Python", "Go", "C#", "Kotlin", "Swift", "Java", "JavaScript", "C++", "C", "PHP"];
    // TIOBE Nov 2024 to Nov 2025; TypeScript and Rust use GitHub growth as they sit outside the TIOBE top 20.
    let changes = [66.63, 35.0, 2.10, -0.2, 1.20, 1.0, 0.8, -0.45, -0.50, -0.30, -0.15, -2.5];
    let chart = Chart::new()
        .with_title("Change in programming language popularity - YoY 2024-2025")
        .with_x_axis(Axis::new("Year-over-Year Change (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(languages, &changes)?)
                .with_point_colors(by_threshold(&changes, &[(5.0, SUCCESS), (1.0, WARNING), (0.0, INFO)], DANGER))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::SignedPercent(2)),
        )
        .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(2.0))
        .with_annotation(
            Annotation::callout("TypeScript: Historic Rise\n#1 on GitHub for the first time", (66.63, 0.0), (-40.0, -60.0), YELLOW)
                .with_anchor(Anchor::new(chart_core::HAlign::Right, chart_core::VAlign::Top)),
        )
        .with_annotation(Annotation::callout(
            "Python: +2.1% TIOBE YoY\n(+7.0pp Stack Overflow)",
            (2.10, 2.0),
            (60.0, -50.0),
            LIGHT_GREEN,
        ));
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn domain_leaders() -> Result<Figure> {
    let domains = [
        "Web\nFrontend",
        "Web\nBackend",
        "Mobile\niOS",
        "Mobile\nAndroid",
        "Cross-Platform\nMobile",
        "Data Science\n/ AI",
        "DevOps /\nCloud",
        "Systems\nProgramming",
        "Game\nDev",
        "Enterprise",
    ];
    let leaders = [
        "TypeScript\n+ React",
        "Python\n(FastAPI)",
        "Swift",
        "Kotlin",
        "Kotlin\nMultiplatform",
        "Python\n(PyTorch)",
        "Go",
        "Rust",
        "C++ /\nC#",
        "Java",
    ];
    // Share of the domain held by the leading stack.
    let adoption = [87.0, 73.0, 95.0, 80.0, 23.0, 85.0, 49.0, 35.0, 65.0, 97.0];
    let colors = vec![WARNING, SUCCESS, PRIMARY, SUCCESS, WARNING, SUCCESS, INFO, DANGER, PRIMARY, SECONDARY];

    let mut chart = Chart::new()
        .with_title("Leading languages by development domain - 2025")
        .with_x_axis(Axis::new("Domain").without_grid())
        .with_y_axis(Axis::new("Adoption / Dominance (%)").with_range(0.0, 110.0))
        .with_series(
            Series::bar("", Dataset::new(domains, &adoption)?)
                .with_point_colors(colors)
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Percent)
                .labels_inside(),
        );
    for (i, (leader, rate)) in leaders.iter().zip(adoption).enumerate() {
        chart = chart.with_annotation(
            Annotation::text(*leader, (i as f64, rate))
                .with_anchor(Anchor::BOTTOM)
                .with_offset(0.0, 6.0)
                .with_box(Color::WHITE, 0.8),
        );
    }
    Ok(Figure::new(16.0, 10.0).with_panel(chart))
}

fn frontend_frameworks() -> Result<Figure> {
    let frameworks = ["React", "Angular", "Vue.js", "Svelte", "Other"];
    let mut share = PieChart::new(frameworks, &[40.0, 22.0, 15.4, 12.0, 10.6])?
        .with_title("Market Share")
        .with_colors(vec![PRIMARY, DANGER, SUCCESS, WARNING, NEUTRAL]);
    share.explode = vec![0.1, 0.0, 0.0, 0.05, 0.0];

    let growth = [-6.3, -15.0, 45.0, 180.0, 5.0];
    let yoy = Chart::new()
        .with_title("Year-over-Year Change")
        .with_x_axis(Axis::new("YoY Growth (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(frameworks, &growth)?)
                .with_point_colors(by_sign(&growth))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::SignedPercent(1)),
        )
        .with_ref_line(RefLine::vertical(0.0).with_color(BLACK).with_width(2.0));

    Ok(Figure::new(16.0, 7.0)
        .with_grid(1, 2)
        .with_suptitle("Frontend frameworks - Market Share 2025")
        .with_panel(share)
        .with_panel(yoy))
}

fn ai_ml_frameworks() -> Result<Figure> {
    let frameworks = ["PyTorch", "TensorFlow", "Hugging Face\nTransformers", "LangChain", "scikit-learn", "Keras", "JAX"];
    // Approximate share of production use.
    let share = [55.0, 30.0, 20.0, 8.0, 45.0, 15.0, 5.0];
    let chart = Chart::new()
        .with_title("AI/ML frameworks - Production Adoption 2025")
        .with_x_axis(Axis::new("Production Adoption (%)"))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(frameworks, &share)?)
                .with_point_colors(by_threshold(&share, &[(40.0, SUCCESS), (15.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Percent),
        )
        .with_annotation(Annotation::callout(
            "PyTorch dominates:\n85%+ research papers\n55% production",
            (55.0, 0.0),
            (30.0, -60.0),
            LIGHT_GREEN,
        ))
        .with_annotation(Annotation::callout(
            "LangChain: 30% agent\nframework market share",
            (8.0, 3.0),
            (60.0, -50.0),
            YELLOW,
        ));
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn salaries_by_language() -> Result<Figure> {
    let languages = ["Rust", "TypeScript", "Go", "Swift", "Python", "Java", "C#", "JavaScript", "PHP", "Ruby"];
    let salaries = [160000.0, 160000.0, 150000.0, 145000.0, 130000.0, 120000.0, 125000.0, 110000.0, 95000.0, 134000.0];
    // YoY growth in job postings, percent.
    let job_growth = [35.0, 15.0, 20.0, 8.0, 25.0, 0.0, 8.0, -2.0, -5.0, 3.0];
    let labels = salaries
        .iter()
        .zip(job_growth)
        .map(|(s, g)| format!("{}\n({}{}% jobs)", dollars(*s), if g >= 0.0 { "+" } else { "" }, plain(g)))
        .collect();

    let chart = Chart::new()
        .with_title("Salaries by programming language - USA 2025\n(with YoY job growth)")
        .with_x_axis(Axis::new("Average Annual Salary (USD)").with_format(ValueFormat::DollarsK))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(languages, &salaries)?)
                .with_point_colors(by_threshold(&job_growth, &[(20.0, SUCCESS), (10.0, WARNING), (0.0, INFO)], DANGER))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Custom(labels)),
        );
    Ok(Figure::new(14.0, 10.0).with_panel(chart))
}

fn top_tech_stacks() -> Result<Figure> {
    let stacks = [
        "Python + PyTorch\n+ CUDA (AI/ML)",
        "TypeScript + React\n+ Node.js",
        "Python + AWS\n+ Kubernetes",
        "Go + Docker\n+ Kubernetes",
        "Rust + Systems\nProgramming",
        "Java + Spring Boot\n+ AWS",
        "C# + .NET\n+ Azure",
    ];
    let comp = [190000.0, 140000.0, 160000.0, 145000.0, 175000.0, 135000.0, 132000.0];
    let chart = Chart::new()
        .with_title("Top tech stacks - Average Total Compensation 2025")
        .with_x_axis(Axis::new("Average Total Compensation (USD)").with_format(ValueFormat::DollarsK))
        .with_y_axis(Axis::new("").without_grid())
        .with_series(
            Series::hbar("", Dataset::new(stacks, &comp)?)
                .with_point_colors(by_threshold(&comp, &[(160000.0, SUCCESS), (140000.0, WARNING)], INFO))
                .with_alpha(0.7)
                .with_value_labels(ValueFormat::Dollars),
        );
    Ok(Figure::new(14.0, 8.0).with_panel(chart))
}

fn main() -> Result<()> {
    init_tracing();
    let mut gen = Generator::start("Generating programming language charts...")?;

    gen.save_png_svg("08_languages_popularity_indices", &popularity_indices()?, "Chart 8: language popularity indices")?;
    gen.save_png_svg("09_languages_yoy_changes", &yoy_changes()?, "Chart 9: YoY language changes")?;
    gen.save_png_svg("10_domain_specific_leaders", &domain_leaders()?, "Chart 10: domain-specific leaders")?;
    gen.save_png_svg("11_frontend_frameworks", &frontend_frameworks()?, "Chart 11: frontend frameworks")?;
    gen.save_png_svg("12_ai_ml_frameworks", &ai_ml_frameworks()?, "Chart 12: AI/ML frameworks")?;
    gen.save_png_svg("13_salaries_by_language", &salaries_by_language()?, "Chart 13: salaries by language")?;
    gen.save_png_svg("14_top_tech_stacks", &top_tech_stacks()?, "Chart 14: top tech stacks")?;

    gen.finish("All programming language charts created successfully!")
}
