//! CSV load/save for tasks, employees, assignments and evaluation
//! results. Skill sets are stored as `|`-separated tag lists. Malformed
//! records fail loading immediately; nothing is coerced to a default.

use crate::model::{Assignment, Employee, EvaluationResult, Task};
use crate::params;
use crate::util::round3;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

pub const SKILL_SEPARATOR: char = '|';

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: record {record}: {source}")]
    Csv {
        path: String,
        record: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: record {record}: {reason}")]
    MalformedRecord {
        path: String,
        record: usize,
        reason: String,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct TaskRow {
    task_id: String,
    required_skills: String,
    priority: u8,
}

#[derive(Debug, Serialize, Deserialize)]
struct EmployeeRow {
    employee_id: String,
    skills: String,
    rating: f64,
    workload: u32,
    available: bool,
}

#[derive(Debug, Serialize)]
struct ResultRow {
    strategy: String,
    precision_at_k: f64,
    recall_at_k: f64,
}

/// Parse a `|`-separated tag list. An empty field is an explicitly empty
/// set; an empty tag inside a non-empty list is malformed.
fn parse_skill_tags(raw: &str) -> Result<BTreeSet<String>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(BTreeSet::new());
    }
    let mut tags = BTreeSet::new();
    for tag in raw.split(SKILL_SEPARATOR) {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(format!("empty skill tag in `{raw}`"));
        }
        tags.insert(tag.to_string());
    }
    Ok(tags)
}

fn join_skill_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join("|")
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

fn read_rows<R>(path: &Path) -> Result<Vec<R>, StoreError>
where
    R: for<'de> Deserialize<'de>,
{
    let mut reader = csv::Reader::from_path(path).map_err(|source| StoreError::Open {
        path: path_str(path),
        source,
    })?;
    let mut rows = Vec::new();
    for (index, row) in reader.deserialize::<R>().enumerate() {
        // Record numbers are 1-based and skip the header line.
        let row = row.map_err(|source| StoreError::Csv {
            path: path_str(path),
            record: index + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    read_rows::<TaskRow>(path)?
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let required_skills =
                parse_skill_tags(&row.required_skills).map_err(|reason| {
                    StoreError::MalformedRecord {
                        path: path_str(path),
                        record: index + 1,
                        reason,
                    }
                })?;
            Ok(Task {
                task_id: row.task_id,
                required_skills,
                priority: row.priority,
            })
        })
        .collect()
}

pub fn load_employees(path: &Path) -> Result<Vec<Employee>, StoreError> {
    read_rows::<EmployeeRow>(path)?
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let malformed = |reason: String| StoreError::MalformedRecord {
                path: path_str(path),
                record: index + 1,
                reason,
            };
            let skills = parse_skill_tags(&row.skills).map_err(malformed)?;
            if !(0.0..=params::MAX_RATING).contains(&row.rating) {
                return Err(StoreError::MalformedRecord {
                    path: path_str(path),
                    record: index + 1,
                    reason: format!("rating {} outside 0..=5", row.rating),
                });
            }
            Ok(Employee {
                employee_id: row.employee_id,
                skills,
                rating: row.rating,
                workload: row.workload,
                available: row.available,
            })
        })
        .collect()
}

pub fn load_assignments(path: &Path) -> Result<Vec<Assignment>, StoreError> {
    read_rows::<Assignment>(path)
}

fn write_rows<R: Serialize>(path: &Path, rows: impl IntoIterator<Item = R>) -> Result<(), StoreError> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| StoreError::Write {
        path: path_str(path),
        source,
    })?;
    for row in rows {
        writer.serialize(row).map_err(|source| StoreError::Write {
            path: path_str(path),
            source,
        })?;
    }
    writer.flush().map_err(|source| StoreError::Write {
        path: path_str(path),
        source: csv::Error::from(source),
    })
}

pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    write_rows(
        path,
        tasks.iter().map(|t| TaskRow {
            task_id: t.task_id.clone(),
            required_skills: join_skill_tags(&t.required_skills),
            priority: t.priority,
        }),
    )
}

pub fn save_employees(path: &Path, employees: &[Employee]) -> Result<(), StoreError> {
    write_rows(
        path,
        employees.iter().map(|e| EmployeeRow {
            employee_id: e.employee_id.clone(),
            skills: join_skill_tags(&e.skills),
            rating: e.rating,
            workload: e.workload,
            available: e.available,
        }),
    )
}

pub fn save_assignments(path: &Path, assignments: &[Assignment]) -> Result<(), StoreError> {
    write_rows(path, assignments.iter().cloned())
}

/// Write the evaluation table consumed by downstream reporting. Metrics
/// are rounded to the reporting precision.
pub fn save_results(path: &Path, results: &[EvaluationResult]) -> Result<(), StoreError> {
    write_rows(
        path,
        results.iter().map(|r| ResultRow {
            strategy: r.strategy.clone(),
            precision_at_k: round3(r.precision_at_k),
            recall_at_k: round3(r.recall_at_k),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assignment, employee, task};
    use std::fs;

    #[test]
    fn parses_and_joins_skill_tags() {
        let tags = parse_skill_tags("python|sql").unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(join_skill_tags(&tags), "python|sql");
    }

    #[test]
    fn empty_field_is_empty_set() {
        assert!(parse_skill_tags("").unwrap().is_empty());
        assert!(parse_skill_tags("  ").unwrap().is_empty());
    }

    #[test]
    fn empty_tag_is_malformed() {
        assert!(parse_skill_tags("python||sql").is_err());
        assert!(parse_skill_tags("|python").is_err());
    }

    #[test]
    fn task_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.csv");
        let tasks = vec![task("T1", &["python", "sql"]), task("T2", &[])];

        save_tasks(&path, &tasks).unwrap();
        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].task_id, "T1");
        assert_eq!(loaded[0].required_skills, tasks[0].required_skills);
        assert!(loaded[1].required_skills.is_empty());
    }

    #[test]
    fn employee_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let employees = vec![
            employee("E1", &["ml", "python"], 4.3, 22, true),
            employee("E2", &["sql"], 3.0, 0, false),
        ];

        save_employees(&path, &employees).unwrap();
        let loaded = load_employees(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].skills, employees[0].skills);
        assert_eq!(loaded[0].rating, 4.3);
        assert!(!loaded[1].available);
    }

    #[test]
    fn assignment_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assignments.csv");
        let assignments = vec![assignment("T1", "E1", true), assignment("T1", "E2", false)];

        save_assignments(&path, &assignments).unwrap();
        let loaded = load_assignments(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert!(loaded[0].success);
        assert!(!loaded[1].success);
    }

    #[test]
    fn out_of_range_rating_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "employee_id,skills,rating,workload,available\nE1,python,7.5,10,true\n",
        )
        .unwrap();

        let err = load_employees(&path).unwrap_err();
        assert!(matches!(err, StoreError::MalformedRecord { record: 1, .. }));
    }

    #[test]
    fn missing_field_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "employee_id,skills\nE1,python\n").unwrap();

        assert!(load_employees(&path).is_err());
    }

    #[test]
    fn results_are_rounded_for_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        let results = vec![EvaluationResult {
            strategy: "SkillOnlyStrategy".to_string(),
            precision_at_k: 1.0 / 3.0,
            recall_at_k: 0.5,
        }];

        save_results(&path, &results).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("SkillOnlyStrategy,0.333,0.5"));
    }
}
