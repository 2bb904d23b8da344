use anyhow::Result;
use problem_tracker_core::AppConfig;
use problem_tracker_service::ProblemService;

pub(crate) fn run_export(config: &AppConfig) -> Result<()> {
    let service = ProblemService::from_config(config)?;
    let summary = service.export_report()?;
    println!("{}", summary.path.display());
    Ok(())
}

pub(crate) fn run_list(config: &AppConfig) -> Result<()> {
    let service = ProblemService::from_config(config)?;
    let problems = service.list()?;
    println!("{}", serde_json::to_string_pretty(&problems)?);
    Ok(())
}

pub(crate) fn run_stats(config: &AppConfig) -> Result<()> {
    let service = ProblemService::from_config(config)?;
    let count = service.count()?;
    println!("{}", serde_json::json!({ "problem_count": count }));
    Ok(())
}
