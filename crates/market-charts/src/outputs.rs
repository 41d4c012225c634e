// File: crates/market-charts/src/outputs.rs
// Summary: File names each generator writes into `output/`.

pub const JOB_MARKET: &[&str] = &[
    "01_monthly_job_dynamics",
    "02_indeed_job_index",
    "03_work_arrangements",
    "04_time_to_hire",
    "05_competition_metrics",
    "06_global_job_distribution",
    "07_employment_outlook",
];

pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "08_languages_popularity_indices",
    "09_languages_yoy_changes",
    "10_domain_specific_leaders",
    "11_frontend_frameworks",
    "12_ai_ml_frameworks",
    "13_salaries_by_language",
    "14_top_tech_stacks",
];

pub const SALARY_ANALYSIS: &[&str] = &[
    "15_salary_by_experience",
    "16_regional_salaries_tech_hubs",
    "17_salary_by_role",
    "18_cloud_certification_roi",
    "19_faang_total_compensation",
    "20_inflation_vs_wage_growth",
];

pub const LAYOFFS_ANALYSIS: &[&str] = &[
    "21_layoffs_timeline",
    "22_top_companies_layoffs",
    "23_layoffs_year_comparison",
    "24_layoff_reasons",
    "25_affected_roles",
];

pub const REGIONAL_COMPARISON: &[&str] = &[
    "26_global_workforce_distribution",
    "27_regional_salaries_comparison",
    "28_col_adjusted_purchasing_power",
    "29_europe_job_postings_decline",
    "30_central_asia_growing_roles",
];

pub const SALARY_COMPARISON: &[&str] = &[
    "31_salary_by_experience_usa",
    "32_salary_by_language_usa",
    "33_salary_by_role_comparison",
    "34_salary_by_city_usa",
    "35_salary_by_country_europe",
    "36_salary_cis_remote",
    "37_yoy_changes_heatmap",
    "38_ai_ml_premium_trend",
];

pub const ADDITIONAL_MARKET: &[&str] = &[
    "39_remote_work_decline",
    "40_rto_mandates_timeline",
    "41_languages_demand_competition",
    "42_cis_market_size",
];

pub const INTERACTIVE_DASHBOARD: &[&str] = &[
    "interactive_01_job_market_dynamics",
    "interactive_02_programming_languages",
    "interactive_03_regional_salaries",
    "interactive_04_faang_compensation",
    "interactive_05_tech_ecosystem_sunburst",
    "interactive_06_layoffs_timeline",
];

fn files(stems: &[&str], exts: &[&str]) -> Vec<String> {
    stems.iter().flat_map(|s| exts.iter().map(move |e| format!("{s}.{e}"))).collect()
}

pub fn job_market() -> Vec<String> { files(JOB_MARKET, &["png", "svg"]) }
pub fn programming_languages() -> Vec<String> { files(PROGRAMMING_LANGUAGES, &["png", "svg"]) }
pub fn salary_analysis() -> Vec<String> { files(SALARY_ANALYSIS, &["png"]) }
pub fn layoffs_analysis() -> Vec<String> { files(LAYOFFS_ANALYSIS, &["png"]) }
pub fn regional_comparison() -> Vec<String> { files(REGIONAL_COMPARISON, &["png"]) }
pub fn salary_comparison() -> Vec<String> { files(SALARY_COMPARISON, &["png"]) }
pub fn additional_market() -> Vec<String> { files(ADDITIONAL_MARKET, &["png"]) }
pub fn interactive_dashboard() -> Vec<String> { files(INTERACTIVE_DASHBOARD, &["html"]) }

/// Advertised files for a generator binary, by name.
pub fn for_generator(name: &str) -> Option<Vec<String>> {
    match name {
        "job-market-graphs" => Some(job_market()),
        "programming-languages-graphs" => Some(programming_languages()),
        "salary-analysis-graphs" => Some(salary_analysis()),
        "layoffs-analysis-graphs" => Some(layoffs_analysis()),
        "regional-comparison-graphs" => Some(regional_comparison()),
        "salary-comparison-graphs" => Some(salary_comparison()),
        "additional-market-graphs" => Some(additional_market()),
        "interactive-dashboard" => Some(interactive_dashboard()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_generators_pair_png_with_svg() {
        let f = job_market();
        assert_eq!(f.len(), 14);
        assert_eq!(&f[..2], ["01_monthly_job_dynamics.png", "01_monthly_job_dynamics.svg"]);
    }

    #[test]
    fn unknown_generator_has_no_outputs() {
        assert!(for_generator("nope").is_none());
        assert_eq!(for_generator("interactive-dashboard").map(|f| f.len()), Some(6));
    }

    #[test]
    fn comparison_charts_continue_the_numbering() {
        let numbers: Vec<u32> = SALARY_COMPARISON
            .iter()
            .chain(ADDITIONAL_MARKET)
            .map(|s| s[..2].parse().unwrap())
            .collect();
        assert_eq!(numbers, (31..=42).collect::<Vec<_>>());
        assert_eq!(for_generator("additional-market-graphs").unwrap()[0], "39_remote_work_decline.png");
    }
}
