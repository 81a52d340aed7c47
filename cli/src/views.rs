//! Terminal renderings of the application views.

use std::io::{self, Write};

use colored::Colorize;
use decay_client::api::{analysis, curves, tasks};
use decay_client::types::{AnalysisResult, Task, UploadCurveSetPayload};
use decay_client::ApiClient;
use tabwriter::TabWriter;

use crate::chart;

/// Landing view: a short summary over the task history.
pub async fn overview(api: &ApiClient) -> anyhow::Result<()> {
    let tasks = tasks::list(api).await.into_result()?;
    let analyzed = tasks
        .iter()
        .filter(|t| t.analysis_results_id.is_some() || t.analysis_results.is_some())
        .count();

    println!("{}", "Decay analysis".bold());
    println!("{} tasks, {} analyzed", tasks.len(), analyzed);
    println!("Run 'decay tasks' for the full history.");
    Ok(())
}

/// Task history table.
pub async fn tasks_history(api: &ApiClient) -> anyhow::Result<()> {
    let tasks = tasks::list(api).await.into_result()?;
    if tasks.is_empty() {
        println!("No tasks");
        return Ok(());
    }

    let mut tw = TabWriter::new(io::stdout());
    writeln!(tw, "ID\tTITLE\tCREATED\tCURVES\tANALYSIS\tTIME")?;
    for task in &tasks {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}\t{}",
            task.id,
            task.title,
            task.created_at.format("%Y-%m-%d %H:%M:%S"),
            task.curve_set.as_ref().map_or(0, |set| set.curves.len()),
            analysis_cell(task),
            processing_cell(task),
        )?;
    }
    tw.flush()?;
    Ok(())
}

/// Task detail: metadata, per-curve series summaries, analysis when present.
pub async fn task_detail(api: &ApiClient, id: u64) -> anyhow::Result<()> {
    let task = tasks::get(api, id).await.into_result()?;

    let header = format!("Task #{}", task.id);
    println!("{}  {}", header.bold(), task.title);
    println!("Created {}", task.created_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(secs) = task.processing_time {
        println!("Processed in {secs:.2}s");
    }

    match &task.curve_set {
        Some(set) => {
            let description = if set.description.is_empty() {
                "no description"
            } else {
                set.description.as_str()
            };
            println!();
            println!("{} #{}  {}", "Curve set".bold(), set.id, description);

            let mut tw = TabWriter::new(io::stdout());
            writeln!(tw, "CURVE\tSERIES\tSUMMARY")?;
            for curve in &set.curves {
                for (label, points) in chart::series_summaries(curve) {
                    writeln!(tw, "{}\t{}\t{}", curve.id, label, chart::describe(&points))?;
                }
            }
            tw.flush()?;
        }
        None => {
            println!();
            println!("No curve set uploaded yet");
        }
    }

    println!();
    match &task.analysis_results {
        Some(result) => render_analysis(result)?,
        None => match task.analysis_results_id {
            Some(result_id) => {
                println!("Analysis #{result_id} available; fetch it with 'decay analysis {result_id}'")
            }
            None => println!("No analysis yet"),
        },
    }
    Ok(())
}

/// Create-task view.
pub async fn create_task(api: &ApiClient, title: Option<&str>) -> anyhow::Result<()> {
    let task = tasks::create(api, title).await.into_result()?;
    println!("Created task #{}  {}", task.id, task.title);
    Ok(())
}

/// Submit an upload payload and report the created curve set.
pub async fn upload(api: &ApiClient, payload: &UploadCurveSetPayload) -> anyhow::Result<()> {
    let set = curves::upload(api, payload).await.into_result()?;
    println!(
        "Uploaded curve set #{} ({} curves) for task #{}",
        set.id,
        set.curves.len(),
        set.task_id
    );
    Ok(())
}

/// Start an analysis and render the returned result.
pub async fn start_analysis(api: &ApiClient, task_id: u64) -> anyhow::Result<()> {
    let result = analysis::start(api, task_id).await.into_result()?;
    println!("Started analysis for task #{task_id}");
    render_analysis(&result)
}

/// Fetch and render one analysis.
pub async fn show_analysis(api: &ApiClient, id: u64) -> anyhow::Result<()> {
    let result = analysis::get(api, id).await.into_result()?;
    render_analysis(&result)
}

fn render_analysis(result: &AnalysisResult) -> anyhow::Result<()> {
    let header = format!("Analysis #{}", result.id);
    println!("{}", header.bold());

    let mut tw = TabWriter::new(io::stdout());
    writeln!(tw, "curve set\t#{}", result.curve_set_id)?;
    writeln!(tw, "tau1\t{:.6}", result.tau1)?;
    writeln!(tw, "tau2\t{:.6}", result.tau2)?;
    writeln!(tw, "omega\t{:.6}", result.omega)?;
    writeln!(tw, "coeff u\t{:.6}", result.coeff_u)?;
    writeln!(tw, "coeff v\t{:.6}", result.coeff_v)?;
    writeln!(
        tw,
        "dw terms\t{} real / {} imag",
        result.dw_real.len(),
        result.dw_imag.len()
    )?;
    writeln!(
        tw,
        "a coeffs\t{} (a1) / {} (a2)",
        result.a1_coeffs.len(),
        result.a2_coeffs.len()
    )?;
    tw.flush()?;
    Ok(())
}

fn analysis_cell(task: &Task) -> String {
    match task.analysis_results_id {
        Some(id) => {
            let cell = format!("#{id}");
            cell.as_str().green().to_string()
        }
        None => "-".to_string(),
    }
}

fn processing_cell(task: &Task) -> String {
    match task.processing_time {
        Some(secs) => format!("{secs:.2}s"),
        None => "-".to_string(),
    }
}
