use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use ranking_pipeline::selector::Selector;
use std::fs;
use std::path::PathBuf;
use team_mixer::evaluate::EvaluationHarness;
use team_mixer::selectors::TopKScoreSelector;
use team_mixer::{datagen, params, report, store, strategies};

#[derive(Parser, Debug)]
#[command(about = "Task assignment recommendation and ranking evaluation")]
struct Args {
    /// Directory holding tasks.csv, employees.csv and assignments.csv.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate seeded synthetic tasks, employees and assignments.
    Generate {
        #[arg(long, default_value_t = params::DEFAULT_SEED)]
        seed: u64,
        #[arg(long, default_value_t = params::DEFAULT_TASK_COUNT)]
        tasks: usize,
        #[arg(long, default_value_t = params::DEFAULT_EMPLOYEE_COUNT)]
        employees: usize,
        #[arg(long, default_value_t = params::DEFAULT_ASSIGNMENTS_PER_TASK)]
        per_task: usize,
    },
    /// Print each strategy's top-k candidates per task with reasons.
    Rank {
        /// Restrict to one task id.
        #[arg(long)]
        task_id: Option<String>,
        #[arg(long, default_value_t = params::TOP_K_CANDIDATES_TO_SELECT)]
        k: usize,
        /// Emit structured JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Score every strategy with precision@k / recall@k against the
    /// recorded successful assignments.
    Evaluate {
        #[arg(long, default_value_t = params::TOP_K_CANDIDATES_TO_SELECT)]
        k: usize,
        /// Also write the results table as CSV.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Generate {
            seed,
            tasks,
            employees,
            per_task,
        } => generate(&args.data_dir, seed, tasks, employees, per_task),
        Command::Rank { task_id, k, json } => rank(&args.data_dir, task_id.as_deref(), k, json),
        Command::Evaluate { k, out } => evaluate(&args.data_dir, k, out.as_deref()),
    }
}

fn generate(
    data_dir: &std::path::Path,
    seed: u64,
    n_tasks: usize,
    n_employees: usize,
    per_task: usize,
) -> anyhow::Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    let (tasks, employees) = datagen::generate_tasks_and_employees(seed, n_tasks, n_employees);
    let assignments = datagen::generate_assignments(seed, &tasks, &employees, per_task);

    store::save_tasks(&data_dir.join("tasks.csv"), &tasks)?;
    store::save_employees(&data_dir.join("employees.csv"), &employees)?;
    store::save_assignments(&data_dir.join("assignments.csv"), &assignments)?;
    info!("wrote synthetic data under {}", data_dir.display());
    Ok(())
}

fn rank(
    data_dir: &std::path::Path,
    task_id: Option<&str>,
    k: usize,
    json: bool,
) -> anyhow::Result<()> {
    let tasks = store::load_tasks(&data_dir.join("tasks.csv"))?;
    let employees = store::load_employees(&data_dir.join("employees.csv"))?;
    let selector = TopKScoreSelector::new(k);
    let strategies = strategies::all_strategies();

    for task in tasks
        .iter()
        .filter(|t| task_id.map_or(true, |id| t.task_id == id))
    {
        println!("task_id={} required_skills={:?}", task.task_id, task.required_skills);
        for strategy in &strategies {
            let selected = selector.select(task, strategy.rank(task, &employees));
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "task_id": task.task_id,
                        "strategy": strategy.name(),
                        "candidates": selected,
                    })
                );
                continue;
            }
            println!("  strategy={}", strategy.name());
            for scored in &selected {
                println!(
                    "    {} score={:.3}",
                    scored.candidate.employee_id, scored.score
                );
                for reason in &scored.reasons {
                    println!("      {reason}");
                }
                if let Some(breakdown) = &scored.breakdown {
                    for (component, contribution) in breakdown {
                        println!("      {component}={contribution:.3}");
                    }
                }
            }
        }
    }
    Ok(())
}

fn evaluate(data_dir: &std::path::Path, k: usize, out: Option<&std::path::Path>) -> anyhow::Result<()> {
    let tasks = store::load_tasks(&data_dir.join("tasks.csv"))?;
    let employees = store::load_employees(&data_dir.join("employees.csv"))?;
    let assignments = store::load_assignments(&data_dir.join("assignments.csv"))?;

    let harness = EvaluationHarness::new(k);
    let results = harness.evaluate_all(&strategies::all_strategies(), &tasks, &employees, &assignments);

    print!("{}", report::render_table(&results, k));
    if let Some(path) = out {
        store::save_results(path, &results)?;
        info!("wrote results table to {}", path.display());
    }
    Ok(())
}
