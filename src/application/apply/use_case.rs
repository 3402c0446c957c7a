//! Apply Use Case
//!
//! Executes a validated plan in three phases: creates, moves, deletes.
//! Each operation gets exactly one result; a failing operation never stops
//! the others.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::{ApplyReport, ApplyResult, Operation, OperationPlan};
use crate::domain::ports::{ApplyEvent, ApplyEventSink, FileSystem, NoopEventSink};
use crate::domain::value_objects::PathKey;

use super::moves::{order_moves, MoveStep};
use super::options::ApplyOptions;

/// Apply use case - performs the filesystem changes of a plan
///
/// The plan must already have passed validation; nothing is re-validated here.
pub struct ApplyUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    options: ApplyOptions,
    events: Arc<dyn ApplyEventSink>,
}

impl<FS> ApplyUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self {
            fs,
            options: ApplyOptions::default(),
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_options(mut self, options: ApplyOptions) -> Self {
        self.options = options;
        self
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn ApplyEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Apply every operation of the plan and report the outcome of each
    pub fn apply(&self, plan: &OperationPlan) -> ApplyReport {
        self.events.on_event(ApplyEvent::Started {
            root: plan.root.clone(),
            operation_count: plan.operations.len(),
        });
        debug!(root = %plan.root.display(), operations = plan.operations.len(), "applying plan");

        let mut report = ApplyReport::new();
        let indexed: Vec<(usize, &Operation)> = plan.operations.iter().enumerate().collect();

        for (index, op) in indexed.iter().filter(|(_, op)| op.kind().is_create()) {
            let result = self.apply_create(op);
            self.record(&mut report, *index, result);
        }

        let moves: Vec<(usize, &Operation)> = indexed
            .iter()
            .filter(|(_, op)| matches!(op, Operation::Move { .. }))
            .copied()
            .collect();
        for (index, result) in self.apply_moves(&moves) {
            self.record(&mut report, index, result);
        }

        for (index, op) in self.ordered_deletes(&indexed) {
            let result = self.apply_delete(op);
            self.record(&mut report, index, result);
        }

        self.events.on_event(ApplyEvent::Completed {
            ok_count: report.ok_count(),
            skipped_count: report.skipped_count(),
            error_count: report.error_count(),
        });
        debug!(
            ok = report.ok_count(),
            skipped = report.skipped_count(),
            errors = report.error_count(),
            "plan applied"
        );
        report
    }

    fn record(&self, report: &mut ApplyReport, index: usize, result: ApplyResult) {
        if let Some(message) = result.message.as_deref().filter(|_| result.is_error()) {
            warn!(index, kind = %result.operation.kind(), error = message, "operation failed");
        }
        self.events.on_event(ApplyEvent::OperationFinished {
            index,
            result: result.clone(),
        });
        report.push(result);
    }

    fn apply_create(&self, op: &Operation) -> ApplyResult {
        match op {
            Operation::CreateDir { target } => {
                if self.fs.exists(target) {
                    return if self.fs.is_dir(target) {
                        ApplyResult::skipped(op.clone(), "Directory already exists.")
                    } else {
                        ApplyResult::error(op.clone(), "Target exists and is not a directory.")
                    };
                }
                match self.fs.create_dir_all(target) {
                    Ok(()) => ApplyResult::ok(op.clone()),
                    Err(e) => ApplyResult::error(op.clone(), e.to_string()),
                }
            }
            Operation::CreateFile { target } => {
                if self.fs.exists(target) {
                    return if self.fs.is_dir(target) {
                        ApplyResult::error(op.clone(), "Target is an existing directory.")
                    } else {
                        ApplyResult::skipped(op.clone(), "File already exists.")
                    };
                }
                let created = match target.parent() {
                    Some(parent) if !self.fs.is_dir(parent) => self.fs.create_dir_all(parent),
                    _ => Ok(()),
                }
                .and_then(|()| self.fs.create_file(target));
                match created {
                    Ok(()) => ApplyResult::ok(op.clone()),
                    Err(e) => ApplyResult::error(op.clone(), e.to_string()),
                }
            }
            Operation::Move { .. } | Operation::Delete { .. } => {
                ApplyResult::error(op.clone(), "Unsupported create operation.")
            }
        }
    }

    /// Run the scheduled rename steps; results come back in plan order
    fn apply_moves(&self, moves: &[(usize, &Operation)]) -> Vec<(usize, ApplyResult)> {
        let schedule = order_moves(&self.fs, moves, &self.options.temp_suffix);
        let mut failed: HashMap<usize, String> = HashMap::new();
        // Where the entries of failed moves still sit
        let mut stranded: Vec<PathBuf> = Vec::new();

        for step in &schedule.steps {
            if failed.contains_key(&step.origin) {
                continue;
            }
            let outcome = match self.stranded_at(&stranded, &step.target) {
                Some(blocker) => Err(format!(
                    "Blocked by failed move of {}.",
                    blocker.display()
                )),
                None => self.run_step(step),
            };
            match outcome {
                Ok(()) if step.parks => {
                    debug!(source = %step.source.display(), temp = %step.target.display(), "parked entry to break move cycle");
                    self.events.on_event(ApplyEvent::TempRename {
                        source: step.source.clone(),
                        temp: step.target.clone(),
                    });
                }
                Ok(()) => {}
                Err(message) => {
                    self.restore_parked(step);
                    stranded.push(step.source.clone());
                    stranded.extend(step.parked_from.clone());
                    failed.insert(step.origin, message);
                }
            }
        }

        moves
            .iter()
            .map(|(index, op)| {
                let op = (*op).clone();
                let result = if schedule.unchanged.contains(index) {
                    ApplyResult::skipped(op, "Source and target are the same.")
                } else if let Some(message) = failed.remove(index) {
                    ApplyResult::error(op, message)
                } else {
                    ApplyResult::ok(op)
                };
                (*index, result)
            })
            .collect()
    }

    /// The stranded entry a rename onto `target` would replace
    fn stranded_at<'a>(&self, stranded: &'a [PathBuf], target: &Path) -> Option<&'a PathBuf> {
        let key = PathKey::new(target);
        stranded
            .iter()
            .find(|path| PathKey::new(path) == key && self.fs.exists(path))
    }

    fn run_step(&self, step: &MoveStep) -> Result<(), String> {
        let target = &step.target;
        if let Some(parent) = target.parent() {
            if !self.fs.is_dir(parent) {
                return Err("Target parent does not exist.".to_string());
            }
        }
        let same_entry = PathKey::new(&step.source) == PathKey::new(target);
        if self.fs.exists(target) && !same_entry {
            if step.is_dir {
                return Err("Target directory already exists.".to_string());
            }
            if self.fs.is_dir(target) {
                return Err("Target is an existing directory.".to_string());
            }
        }
        self.fs
            .rename(&step.source, target)
            .map_err(|e| e.to_string())
    }

    /// Put a parked entry back under its listing name when its final rename fails
    fn restore_parked(&self, step: &MoveStep) {
        let Some(original) = step.parked_from.as_deref() else {
            return;
        };
        if self.fs.exists(original) {
            warn!(temp = %step.source.display(), "entry left under temporary name");
            return;
        }
        if let Err(e) = self.fs.rename(&step.source, original) {
            warn!(temp = %step.source.display(), error = %e, "could not restore parked entry");
        }
    }

    /// Deletes in execution order: files, then directories deepest first
    fn ordered_deletes<'a>(&self, indexed: &[(usize, &'a Operation)]) -> Vec<(usize, &'a Operation)> {
        let (mut dirs, files): (Vec<_>, Vec<_>) = indexed
            .iter()
            .filter(|(_, op)| matches!(op, Operation::Delete { .. }))
            .copied()
            .partition(|(_, op)| op.is_dir());
        dirs.sort_by_key(|(_, op)| std::cmp::Reverse(depth(op.source())));
        files.into_iter().chain(dirs).collect()
    }

    fn apply_delete(&self, op: &Operation) -> ApplyResult {
        let Operation::Delete { source, is_dir } = op else {
            return ApplyResult::error(op.clone(), "Unsupported delete operation.");
        };
        let removed = if *is_dir {
            self.fs.remove_dir_all(source)
        } else {
            self.fs.remove_file(source)
        };
        match removed {
            Ok(()) => ApplyResult::ok(op.clone()),
            Err(e) => ApplyResult::error(op.clone(), e.to_string()),
        }
    }
}

fn depth(path: Option<&Path>) -> usize {
    path.map(|p| p.components().count()).unwrap_or(0)
}

/// Apply a plan with default options and no event reporting
pub fn apply_plan<FS: FileSystem>(fs: FS, plan: &OperationPlan) -> ApplyReport {
    ApplyUseCase::new(fs).apply(plan)
}
