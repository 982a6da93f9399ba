use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Push,
    Pull,
    Legs,
    Full,
    Hiit,
    Liss,
}

impl WorkoutKind {
    pub const ALL: [Self; 6] = [
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::Full,
        Self::Hiit,
        Self::Liss,
    ];
}

/// Completed workout categories for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Workout {
    pub push: bool,
    pub pull: bool,
    pub legs: bool,
    pub full: bool,
    pub hiit: bool,
    pub liss: bool,
}

impl Workout {
    pub fn get(&self, kind: WorkoutKind) -> bool {
        match kind {
            WorkoutKind::Push => self.push,
            WorkoutKind::Pull => self.pull,
            WorkoutKind::Legs => self.legs,
            WorkoutKind::Full => self.full,
            WorkoutKind::Hiit => self.hiit,
            WorkoutKind::Liss => self.liss,
        }
    }

    pub fn set(&mut self, kind: WorkoutKind, done: bool) {
        let flag = match kind {
            WorkoutKind::Push => &mut self.push,
            WorkoutKind::Pull => &mut self.pull,
            WorkoutKind::Legs => &mut self.legs,
            WorkoutKind::Full => &mut self.full,
            WorkoutKind::Hiit => &mut self.hiit,
            WorkoutKind::Liss => &mut self.liss,
        };
        *flag = done;
    }
}

/// Everything logged for one calendar day.
///
/// Measurements are kept as the text the user typed and only parsed when
/// aggregated, so a half-typed value never loses input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub weight: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub waist: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub calories: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub protein: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub carbs: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub fat: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub steps: String,
    #[serde(default)]
    pub workout: Workout,
    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: String,
}

impl DailyRecord {
    pub fn blank(date: &str) -> Self {
        Self {
            date: date.to_string(),
            weight: String::new(),
            waist: String::new(),
            calories: String::new(),
            protein: String::new(),
            carbs: String::new(),
            fat: String::new(),
            steps: String::new(),
            workout: Workout::default(),
            notes: String::new(),
        }
    }

    pub fn raw(&self, metric: Metric) -> &str {
        match metric {
            Metric::Weight => &self.weight,
            Metric::Waist => &self.waist,
            Metric::Calories => &self.calories,
            Metric::Protein => &self.protein,
            Metric::Carbs => &self.carbs,
            Metric::Fat => &self.fat,
            Metric::Steps => &self.steps,
        }
    }

    pub fn measurement(&self, metric: Metric) -> Option<f64> {
        parse_measurement(self.raw(metric))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Weight,
    Waist,
    Calories,
    Protein,
    Carbs,
    Fat,
    Steps,
}

/// Reads the leading decimal number of `raw`, ignoring anything after it.
///
/// `"74.6kg"` yields `74.6`; blank or non-numeric text yields `None`.
pub fn parse_measurement(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Accepts a string, a number or null for a free-text field.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Str(text)) => text,
        Some(Text::Num(number)) => number.to_string(),
        None => String::new(),
    })
}

fn lenient_patch<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_text(deserializer).map(Some)
}

/// A partial update for one day. Absent fields leave the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayPatch {
    #[serde(default, deserialize_with = "lenient_patch")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub waist: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub calories: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub protein: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub carbs: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub fat: Option<String>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub steps: Option<String>,
    #[serde(default)]
    pub workout: Option<WorkoutPatch>,
    #[serde(default, deserialize_with = "lenient_patch")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct WorkoutPatch {
    pub push: Option<bool>,
    pub pull: Option<bool>,
    pub legs: Option<bool>,
    pub full: Option<bool>,
    pub hiit: Option<bool>,
    pub liss: Option<bool>,
}

impl WorkoutPatch {
    pub fn only(kind: WorkoutKind, done: bool) -> Self {
        let mut patch = Self::default();
        *patch.slot(kind) = Some(done);
        patch
    }

    pub fn get(&self, kind: WorkoutKind) -> Option<bool> {
        match kind {
            WorkoutKind::Push => self.push,
            WorkoutKind::Pull => self.pull,
            WorkoutKind::Legs => self.legs,
            WorkoutKind::Full => self.full,
            WorkoutKind::Hiit => self.hiit,
            WorkoutKind::Liss => self.liss,
        }
    }

    fn slot(&mut self, kind: WorkoutKind) -> &mut Option<bool> {
        match kind {
            WorkoutKind::Push => &mut self.push,
            WorkoutKind::Pull => &mut self.pull,
            WorkoutKind::Legs => &mut self.legs,
            WorkoutKind::Full => &mut self.full,
            WorkoutKind::Hiit => &mut self.hiit,
            WorkoutKind::Liss => &mut self.liss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Goal {
    pub start_weight: f64,
    pub target_weight: f64,
    pub start_body_fat: f64,
    pub target_body_fat: f64,
    pub height: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            start_weight: 75.1,
            target_weight: 70.0,
            start_body_fat: 23.1,
            target_body_fat: 18.0,
            height: 183.0,
        }
    }
}

/// The export/import document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub goal: Goal,
    pub days: Vec<DailyRecord>,
}

/// Result of reducing a set of samples. `NoData` means zero valid samples and
/// is kept apart from a measured zero; it serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stat {
    NoData,
    Value(f64),
}

impl Stat {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::NoData => None,
            Self::Value(value) => Some(value),
        }
    }

    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::NoData => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_f64(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct WorkoutTally {
    pub push: u32,
    pub pull: u32,
    pub legs: u32,
    pub full: u32,
    pub hiit: u32,
    pub liss: u32,
}

impl WorkoutTally {
    pub fn record(&mut self, workout: &Workout) {
        for kind in WorkoutKind::ALL {
            if workout.get(kind) {
                *self.slot(kind) += 1;
            }
        }
    }

    pub fn get(&self, kind: WorkoutKind) -> u32 {
        match kind {
            WorkoutKind::Push => self.push,
            WorkoutKind::Pull => self.pull,
            WorkoutKind::Legs => self.legs,
            WorkoutKind::Full => self.full,
            WorkoutKind::Hiit => self.hiit,
            WorkoutKind::Liss => self.liss,
        }
    }

    fn slot(&mut self, kind: WorkoutKind) -> &mut u32 {
        match kind {
            WorkoutKind::Push => &mut self.push,
            WorkoutKind::Pull => &mut self.pull,
            WorkoutKind::Legs => &mut self.legs,
            WorkoutKind::Full => &mut self.full,
            WorkoutKind::Hiit => &mut self.hiit,
            WorkoutKind::Liss => &mut self.liss,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub days_logged: usize,
    pub avg_weight: Stat,
    pub avg_waist: Stat,
    pub avg_calories: Stat,
    pub avg_protein: Stat,
    pub avg_carbs: Stat,
    pub avg_fat: Stat,
    pub total_calories: Stat,
    pub total_steps: Stat,
    pub workouts: WorkoutTally,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub label: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub points: Vec<TrendPoint>,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Debug, Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub active_date: String,
    pub record: DailyRecord,
    pub goal: Goal,
    pub plan: &'static str,
}
