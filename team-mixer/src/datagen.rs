//! Seeded synthetic data for exercising the strategies and the
//! evaluation harness. This is the only place randomness is allowed;
//! scoring and evaluation stay deterministic.

use crate::matching::skill_match_ratio;
use crate::model::{Assignment, Employee, Task};
use crate::params;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::BTreeSet;

fn sample_skills(rng: &mut StdRng, count: usize) -> BTreeSet<String> {
    params::SKILL_POOL
        .choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

/// Generate `n_tasks` tasks and `n_employees` employees from the shared
/// skill pool. Reproducible for a fixed seed.
pub fn generate_tasks_and_employees(
    seed: u64,
    n_tasks: usize,
    n_employees: usize,
) -> (Vec<Task>, Vec<Employee>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let tasks = (0..n_tasks)
        .map(|i| Task {
            task_id: format!("T{}", i + 1),
            required_skills: sample_skills(&mut rng, params::SKILLS_PER_TASK),
            priority: rng.gen_range(1..=5),
        })
        .collect();

    let employees = (0..n_employees)
        .map(|i| Employee {
            employee_id: format!("E{}", i + 1),
            skills: sample_skills(&mut rng, params::SKILLS_PER_EMPLOYEE),
            rating: (rng.gen_range(3.0..=5.0) * 10.0_f64).round() / 10.0,
            workload: rng.gen_range(5..=40),
            available: rng.gen_bool(0.5),
        })
        .collect();

    info!("generated {n_tasks} tasks and {n_employees} employees (seed={seed})");
    (tasks, employees)
}

/// Fabricate historical assignments with a plausible success signal: for
/// each task, the `per_task` employees with the strongest true-success
/// tendency (skills, then rating, then workload headroom, then
/// availability) get an assignment whose success flag is sampled with a
/// probability that rises with fit and drops sharply when unavailable.
pub fn generate_assignments(
    seed: u64,
    tasks: &[Task],
    employees: &[Employee],
    per_task: usize,
) -> Vec<Assignment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut assignments = Vec::new();

    for task in tasks {
        let mut scored: Vec<(&Employee, f64)> = employees
            .iter()
            .map(|emp| (emp, skill_match_ratio(&task.required_skills, &emp.skills)))
            .collect();
        scored.sort_by(|(a, ratio_a), (b, ratio_b)| {
            let key_a = (*ratio_a, a.rating, -f64::from(a.workload), u8::from(a.available));
            let key_b = (*ratio_b, b.rating, -f64::from(b.workload), u8::from(b.available));
            key_b.partial_cmp(&key_a).unwrap_or(Ordering::Equal)
        });

        for (emp, ratio) in scored.into_iter().take(per_task) {
            let mut prob = 0.20
                + 0.50 * ratio
                + 0.15 * (emp.rating / params::MAX_RATING)
                + 0.10 * (1.0 - f64::from(emp.workload) / params::WORKLOAD_CAPACITY);
            if !emp.available {
                prob *= 0.4;
            }
            let prob = prob.clamp(0.0, 0.95);

            assignments.push(Assignment {
                task_id: task.task_id.clone(),
                employee_id: emp.employee_id.clone(),
                success: rng.gen::<f64>() < prob,
            });
        }
    }

    info!(
        "generated {} assignments across {} tasks (seed={seed})",
        assignments.len(),
        tasks.len()
    );
    assignments
}
