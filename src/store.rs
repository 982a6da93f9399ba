use crate::errors::TrackerError;
use crate::models::{DailyRecord, DayPatch, Goal, Snapshot, Workout, WorkoutKind, WorkoutPatch};
use serde::Serialize;

/// Daily records, the goal and the active date.
///
/// `days` is kept sorted by date with one record per date. The store does no
/// I/O; callers persist the slots they changed (see `storage`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    days: Vec<DailyRecord>,
    goal: Goal,
    active_date: String,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    goal: &'a Goal,
    days: &'a [DailyRecord],
}

impl RecordStore {
    pub fn new(today: &str) -> Self {
        Self::restore(None, None, None, today)
    }

    /// Rebuilds a store from persisted slots; a missing slot takes its default.
    pub fn restore(
        days: Option<Vec<DailyRecord>>,
        goal: Option<Goal>,
        active_date: Option<String>,
        today: &str,
    ) -> Self {
        let days = match days {
            Some(days) => normalize(days),
            None => vec![DailyRecord::blank(today)],
        };
        Self {
            days,
            goal: goal.unwrap_or_default(),
            active_date: active_date.unwrap_or_else(|| today.to_string()),
        }
    }

    pub fn days(&self) -> &[DailyRecord] {
        &self.days
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn active_date(&self) -> &str {
        &self.active_date
    }

    pub fn record(&self, date: &str) -> Option<&DailyRecord> {
        self.position(date).ok().map(|idx| &self.days[idx])
    }

    /// The record for `date`, or a blank one stamped with `date`.
    pub fn get(&self, date: &str) -> DailyRecord {
        self.record(date)
            .cloned()
            .unwrap_or_else(|| DailyRecord::blank(date))
    }

    pub fn upsert(&mut self, date: &str, patch: DayPatch) -> &DailyRecord {
        let idx = self.ensure_record(date);
        let record = &mut self.days[idx];
        merge_record(record, patch);
        record
    }

    /// Makes `date` the active date. Returns true when a blank record had to
    /// be created for it.
    pub fn select_date(&mut self, date: &str) -> bool {
        self.active_date = date.to_string();
        self.ensure_active_record()
    }

    pub fn ensure_active_record(&mut self) -> bool {
        let before = self.days.len();
        let active = self.active_date.clone();
        self.ensure_record(&active);
        self.days.len() != before
    }

    pub fn set_goal(&mut self, goal: Goal) {
        self.goal = goal;
    }

    /// Drops every record and leaves a single blank one for `today`.
    ///
    /// The active date is kept as is. Unlike `import_snapshot`, no record is
    /// synthesized for it when it differs from `today`: `get` still answers
    /// with a blank record, and the next `select_date` or `upsert` creates it.
    pub fn reset_all(&mut self, today: &str) {
        self.days = vec![DailyRecord::blank(today)];
    }

    pub fn export_snapshot(&self) -> Result<String, TrackerError> {
        let snapshot = SnapshotRef {
            goal: &self.goal,
            days: &self.days,
        };
        serde_json::to_string_pretty(&snapshot).map_err(TrackerError::Serialize)
    }

    /// Replaces goal and days with the payload's. On error nothing changes.
    pub fn import_snapshot(&mut self, payload: &str) -> Result<(), TrackerError> {
        let snapshot: Snapshot = serde_json::from_str(payload).map_err(TrackerError::Import)?;
        self.goal = snapshot.goal;
        self.days = normalize(snapshot.days);
        self.ensure_active_record();
        Ok(())
    }

    fn position(&self, date: &str) -> Result<usize, usize> {
        self.days
            .binary_search_by(|record| record.date.as_str().cmp(date))
    }

    fn ensure_record(&mut self, date: &str) -> usize {
        match self.position(date) {
            Ok(idx) => idx,
            Err(idx) => {
                self.days.insert(idx, DailyRecord::blank(date));
                idx
            }
        }
    }
}

fn merge_record(record: &mut DailyRecord, patch: DayPatch) {
    let DayPatch {
        weight,
        waist,
        calories,
        protein,
        carbs,
        fat,
        steps,
        workout,
        notes,
    } = patch;

    replace(&mut record.weight, weight);
    replace(&mut record.waist, waist);
    replace(&mut record.calories, calories);
    replace(&mut record.protein, protein);
    replace(&mut record.carbs, carbs);
    replace(&mut record.fat, fat);
    replace(&mut record.steps, steps);
    replace(&mut record.notes, notes);
    if let Some(flags) = workout {
        merge_workout(&mut record.workout, flags);
    }
}

fn replace(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn merge_workout(workout: &mut Workout, patch: WorkoutPatch) {
    for kind in WorkoutKind::ALL {
        if let Some(done) = patch.get(kind) {
            workout.set(kind, done);
        }
    }
}

/// Sorts by date; for duplicate dates the later entry wins.
fn normalize(mut days: Vec<DailyRecord>) -> Vec<DailyRecord> {
    days.sort_by(|a, b| a.date.cmp(&b.date));
    let mut unique: Vec<DailyRecord> = Vec::with_capacity(days.len());
    for record in days {
        match unique.last_mut() {
            Some(last) if last.date == record.date => *last = record,
            _ => unique.push(record),
        }
    }
    unique
}
