use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use skillgap::analysis::{fit_score, predict_hiring};
use skillgap::models::{Report, ReportBody, SkillSkew, Source};
use skillgap::{
    AnalyzerConfig, Config, ExtractorConfig, LinearModel, MarketData, SkillExtractor,
    SkillGapAnalyzer,
};

#[derive(Parser, Debug)]
#[command(name = "skillgap")]
#[command(version = "0.1.0")]
#[command(about = "Compare resume skills with what job ads ask for and what gets people hired")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Number of top skills to rank and compare against
    #[arg(long, global = true)]
    top_n: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most frequent skills in job descriptions and hired profiles
    Top {
        /// Also rank the skills claimed in resumes
        #[arg(long)]
        resumes: bool,
    },
    /// Compare your skills with the market
    Check {
        /// Your skills, comma-separated
        #[arg(short, long)]
        skills: String,
    },
    /// Resume inflation index and hiring edge per skill
    Skew,
    /// Percentage of a role's required skills you already have
    Fit {
        /// Your skills, comma-separated
        #[arg(short, long)]
        skills: String,

        /// Skills the role requires, comma-separated
        #[arg(short, long)]
        target: String,
    },
    /// Hiring likelihood from the pre-trained model
    Predict {
        /// Your skills, comma-separated
        #[arg(short, long)]
        skills: String,
    },
    /// First rows of every dataset
    Preview {
        #[arg(long, default_value = "5")]
        rows: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("skillgap=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(top_n) = args.top_n {
        config.top_n = top_n;
    }

    let body = build_report(&args.command, &config)?;

    output_report(&Report::new(body), &args)?;

    Ok(())
}

fn build_report(command: &Command, config: &Config) -> anyhow::Result<ReportBody> {
    // fit and predict only look at the user's own input
    match command {
        Command::Fit { skills, target } => {
            let extractor = SkillExtractor::new(ExtractorConfig::from(config));
            let user_skills = extractor.extract(Some(skills.as_str())).to_set();
            let target = extractor.extract(Some(target.as_str())).to_set();
            return Ok(ReportBody::RoleFit {
                score: fit_score(&user_skills, &target),
                user_skills,
                target,
            });
        }
        Command::Predict { skills } => {
            let Some(ref model_path) = config.model_path else {
                anyhow::bail!("SKILLGAP_MODEL_PATH is not set; no hiring model to predict with");
            };
            let model = LinearModel::load(model_path)?;
            let extractor = SkillExtractor::new(ExtractorConfig::from(config));
            let bag = extractor.extract(Some(skills.as_str()));
            return Ok(ReportBody::Prediction {
                prediction: predict_hiring(&model, &bag)?,
                user_skills: bag.to_set(),
            });
        }
        _ => {}
    }

    let data = load_market_data(config)?;
    let analyzer = SkillGapAnalyzer::new(&data, AnalyzerConfig::from(config));

    let body = match command {
        Command::Top { resumes } => {
            let mut sources = vec![Source::Jobs, Source::Hired];
            if *resumes {
                sources.push(Source::Resumes);
            }
            ReportBody::TopSkills {
                tables: sources.into_iter().map(|s| analyzer.top_skills(s)).collect(),
            }
        }
        Command::Check { skills } => ReportBody::RealityCheck(analyzer.reality_check(skills)),
        Command::Skew => ReportBody::MarketSkew {
            skills: analyzer.market_skew(config.top_n),
        },
        Command::Preview { rows } => ReportBody::Preview {
            datasets: Source::ALL
                .iter()
                .map(|s| data.dataset(*s).preview(*rows))
                .collect(),
        },
        Command::Fit { .. } | Command::Predict { .. } => unreachable!("handled above"),
    };

    Ok(body)
}

fn load_market_data(config: &Config) -> anyhow::Result<MarketData> {
    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.magenta/yellow}] {pos}/{len} datasets")?
            .progress_chars("#>-"),
    );

    let data = MarketData::load_with(config, |_| pb.inc(1))?;
    pb.finish_and_clear();

    Ok(data)
}

fn output_report(report: &Report, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        "markdown" => format_markdown(report),
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn or_none(joined: String, fallback: &str) -> String {
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}

fn ratio_cell(ratio: Option<f64>) -> String {
    ratio.map(|r| format!("{:.2}", r)).unwrap_or_else(|| "n/a".to_string())
}

fn format_text(report: &Report) -> String {
    let mut output = String::new();

    match &report.body {
        ReportBody::TopSkills { tables } => {
            for table in tables {
                output.push_str(&format!(
                    "\n=== Top {} Skills: {} ({} records) ===\n",
                    table.skills.len(),
                    table.source,
                    table.records
                ));
                for (rank, ranked) in table.skills.iter().enumerate() {
                    output.push_str(&format!("  {:>2}. {} ({})\n", rank + 1, ranked.skill, ranked.count));
                }
            }
        }
        ReportBody::RealityCheck(check) => {
            output.push_str("\n=== Reality Check ===\n\n");
            output.push_str(&format!("Your skills: {}\n", or_none(check.user_skills.join(), "None")));
            output.push_str(&format!(
                "Matching job description skills: {}\n",
                or_none(check.matched_jobs.join(), "None")
            ));
            output.push_str(&format!(
                "Matching hired profile skills: {}\n",
                or_none(check.matched_hired.join(), "None")
            ));
            output.push_str(&format!(
                "Skills to learn: {}\n",
                or_none(check.comparison.missing.join(), "None, you're covered")
            ));
            output.push_str(&format!(
                "Not in demand: {}\n",
                or_none(check.comparison.extra.join(), "None")
            ));
            output.push_str(&format!(
                "Relevance: {:.0}%\n",
                check.comparison.relevance_score * 100.0
            ));
        }
        ReportBody::MarketSkew { skills } => {
            output.push_str("\n=== Market Skew ===\n\n");
            output.push_str(&format!(
                "  {:<24} {:>7} {:>7} {:>7} {:>10} {:>8}\n",
                "skill", "resumes", "jobs", "hired", "inflation", "edge"
            ));
            for skew in skills {
                output.push_str(&format_skew_row(skew));
            }
        }
        ReportBody::RoleFit { user_skills, target, score } => {
            output.push_str("\n=== Role Fit ===\n\n");
            output.push_str(&format!("Your skills: {}\n", or_none(user_skills.join(), "None")));
            output.push_str(&format!("Role requires: {}\n", or_none(target.join(), "None")));
            output.push_str(&format!("Fit: {}/100\n", score));
        }
        ReportBody::Prediction { user_skills, prediction } => {
            output.push_str("\n=== Hiring Prediction ===\n\n");
            output.push_str(&format!("Your skills: {}\n", or_none(user_skills.join(), "None")));
            output.push_str(&format!(
                "Likely hired: {} ({:.0}%)\n",
                if prediction.hired { "yes" } else { "no" },
                prediction.probability * 100.0
            ));
            if !prediction.unrecognized.is_empty() {
                output.push_str(&format!(
                    "Not known to the model: {}\n",
                    prediction
                        .unrecognized
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
        }
        ReportBody::Preview { datasets } => {
            for dataset in datasets {
                output.push_str(&format!(
                    "\n=== {} ({} rows) ===\n",
                    dataset.name, dataset.total_rows
                ));
                output.push_str(&format!("{}\n", dataset.headers.join(" | ")));
                for row in &dataset.rows {
                    output.push_str(&format!("{}\n", row.join(" | ")));
                }
            }
        }
    }

    output.push_str(&format!(
        "\nGenerated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

fn format_skew_row(skew: &SkillSkew) -> String {
    format!(
        "  {:<24} {:>7} {:>7} {:>7} {:>10} {:>8}\n",
        skew.skill.as_str(),
        skew.resume_count,
        skew.job_count,
        skew.hired_count,
        ratio_cell(skew.resume_inflation_index),
        ratio_cell(skew.hiring_edge)
    )
}

fn format_markdown(report: &Report) -> String {
    let mut output = String::new();

    match &report.body {
        ReportBody::TopSkills { tables } => {
            output.push_str("# Top Skills\n");
            for table in tables {
                output.push_str(&format!("\n## {} ({} records)\n\n", table.source, table.records));
                output.push_str("| Rank | Skill | Count |\n|------|-------|-------|\n");
                for (rank, ranked) in table.skills.iter().enumerate() {
                    output.push_str(&format!("| {} | {} | {} |\n", rank + 1, ranked.skill, ranked.count));
                }
            }
        }
        ReportBody::RealityCheck(check) => {
            output.push_str("# Reality Check\n\n");
            output.push_str("| | Skills |\n|---|---|\n");
            output.push_str(&format!("| Yours | {} |\n", or_none(check.user_skills.join(), "None")));
            output.push_str(&format!(
                "| Matching job descriptions | {} |\n",
                or_none(check.matched_jobs.join(), "None")
            ));
            output.push_str(&format!(
                "| Matching hired profiles | {} |\n",
                or_none(check.matched_hired.join(), "None")
            ));
            output.push_str(&format!(
                "| To learn | {} |\n",
                or_none(check.comparison.missing.join(), "None")
            ));
            output.push_str(&format!(
                "| Not in demand | {} |\n",
                or_none(check.comparison.extra.join(), "None")
            ));
            output.push_str(&format!(
                "\n**Relevance:** {:.0}%\n",
                check.comparison.relevance_score * 100.0
            ));
        }
        ReportBody::MarketSkew { skills } => {
            output.push_str("# Market Skew\n\n");
            output.push_str("| Skill | Resumes | Jobs | Hired | Inflation Index | Hiring Edge |\n");
            output.push_str("|-------|---------|------|-------|-----------------|-------------|\n");
            for skew in skills {
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} |\n",
                    skew.skill,
                    skew.resume_count,
                    skew.job_count,
                    skew.hired_count,
                    ratio_cell(skew.resume_inflation_index),
                    ratio_cell(skew.hiring_edge)
                ));
            }
        }
        ReportBody::RoleFit { user_skills, target, score } => {
            output.push_str("# Role Fit\n\n");
            output.push_str(&format!("**Your skills:** {}\n\n", or_none(user_skills.join(), "None")));
            output.push_str(&format!("**Role requires:** {}\n\n", or_none(target.join(), "None")));
            output.push_str(&format!("**Fit:** {}/100\n", score));
        }
        ReportBody::Prediction { user_skills, prediction } => {
            output.push_str("# Hiring Prediction\n\n");
            output.push_str(&format!("**Your skills:** {}\n\n", or_none(user_skills.join(), "None")));
            output.push_str(&format!(
                "**Likely hired:** {} ({:.0}%)\n",
                if prediction.hired { "yes" } else { "no" },
                prediction.probability * 100.0
            ));
            if !prediction.unrecognized.is_empty() {
                output.push_str("\n> Not known to the model: ");
                output.push_str(
                    &prediction
                        .unrecognized
                        .iter()
                        .map(|t| t.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                );
                output.push('\n');
            }
        }
        ReportBody::Preview { datasets } => {
            output.push_str("# Raw Data Preview\n");
            for dataset in datasets {
                output.push_str(&format!("\n## {} ({} rows)\n\n", dataset.name, dataset.total_rows));
                output.push_str(&format!("| {} |\n", dataset.headers.join(" | ")));
                output.push_str(&format!("|{}\n", "---|".repeat(dataset.headers.len())));
                for row in &dataset.rows {
                    output.push_str(&format!("| {} |\n", row.join(" | ")));
                }
            }
        }
    }

    output.push_str(&format!(
        "\n---\n*Generated on {}*\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "classes": ["Python", "SQL"],
        "coefficients": [2.0, 1.0],
        "intercept": -1.0
    }"#;

    fn config_without_datasets(model_path: Option<&str>) -> Config {
        let model_path = model_path.map(String::from);
        Config::from_lookup(|key| match key {
            "SKILLGAP_RESUMES_PATH" => Some("/nonexistent/skillgap/resumes.csv".to_string()),
            "SKILLGAP_HIRED_PATH" => Some("/nonexistent/skillgap/hired.csv".to_string()),
            "SKILLGAP_JOBS_PATH" => Some("/nonexistent/skillgap/jobs.csv".to_string()),
            "SKILLGAP_MODEL_PATH" => model_path.clone(),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_fit_runs_without_datasets() {
        let config = config_without_datasets(None);
        let command = Command::Fit {
            skills: "Excel, Python, SQL".to_string(),
            target: "Excel, Python".to_string(),
        };

        match build_report(&command, &config).unwrap() {
            ReportBody::RoleFit { score, target, .. } => {
                assert_eq!(score, 100);
                assert_eq!(target.len(), 2);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_predict_runs_without_datasets() {
        let path = std::env::temp_dir().join(format!("skillgap-model-{}.json", std::process::id()));
        std::fs::write(&path, MODEL).unwrap();
        let config = config_without_datasets(path.to_str());
        let command = Command::Predict {
            skills: "python, sql, canva".to_string(),
        };

        let body = build_report(&command, &config);
        std::fs::remove_file(&path).ok();

        match body.unwrap() {
            ReportBody::Prediction { prediction, .. } => {
                assert!(prediction.hired);
                assert_eq!(prediction.recognized, 2);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_market_commands_need_datasets() {
        let config = config_without_datasets(None);
        assert!(build_report(&Command::Skew, &config).is_err());
    }
}
