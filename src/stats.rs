use crate::errors::TrackerError;
use crate::models::{
    DailyRecord, Goal, Metric, Stat, TrendChart, TrendPoint, WeeklySummary, WorkoutTally,
};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive Monday-to-Sunday range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate) -> Self {
        let start = week_start(date);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    pub fn label(&self) -> String {
        let iso = self.start.iso_week();
        format!("{}-W{:02}", iso.year(), iso.week())
    }

    /// Records whose date key falls inside the window. Keys are zero-padded
    /// ISO dates, so string order is calendar order.
    pub fn select(self, days: &[DailyRecord]) -> impl Iterator<Item = &DailyRecord> {
        let start = date_key(self.start);
        let end = date_key(self.end);
        days.iter().filter(move |record| {
            let key = record.date.as_str();
            key >= start.as_str() && key <= end.as_str()
        })
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Parses a canonical `YYYY-MM-DD` key; unpadded forms are rejected so every
/// stored key sorts correctly.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date_key(*date) == raw)
        .ok_or_else(|| TrackerError::InvalidDate(raw.to_string()))
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let back = match date.weekday().num_days_from_sunday() {
        0 => 6,
        weekday => weekday - 1,
    };
    date - Duration::days(i64::from(back))
}

fn samples<'a>(records: impl IntoIterator<Item = &'a DailyRecord>, metric: Metric) -> Vec<f64> {
    records
        .into_iter()
        .filter_map(|record| record.measurement(metric))
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Mean of the parseable values, to one decimal.
pub fn average<'a>(records: impl IntoIterator<Item = &'a DailyRecord>, metric: Metric) -> Stat {
    let values = samples(records, metric);
    if values.is_empty() {
        return Stat::NoData;
    }
    let count = values.len() as f64;
    let mut mean = values.iter().sum::<f64>() / count;
    if !mean.is_finite() {
        // Large samples overflow the plain sum; scale each one first.
        mean = values.iter().map(|value| value / count).sum();
    }
    Stat::Value(round_to(mean.clamp(f64::MIN, f64::MAX), 1))
}

/// Sum of the parseable values, to a whole number. Saturates at `f64::MAX`.
pub fn sum<'a>(records: impl IntoIterator<Item = &'a DailyRecord>, metric: Metric) -> Stat {
    let values = samples(records, metric);
    if values.is_empty() {
        return Stat::NoData;
    }
    let total: f64 = values.iter().sum();
    Stat::Value(round_to(total.clamp(f64::MIN, f64::MAX), 0))
}

pub fn workout_tally<'a>(records: impl IntoIterator<Item = &'a DailyRecord>) -> WorkoutTally {
    let mut tally = WorkoutTally::default();
    for record in records {
        tally.record(&record.workout);
    }
    tally
}

pub fn summarize_week(days: &[DailyRecord], reference: NaiveDate) -> WeeklySummary {
    let window = WeekWindow::containing(reference);
    let records: Vec<&DailyRecord> = window.select(days).collect();
    let week = || records.iter().copied();

    WeeklySummary {
        week: window.label(),
        start_date: date_key(window.start),
        end_date: date_key(window.end),
        days_logged: records.len(),
        avg_weight: average(week(), Metric::Weight),
        avg_waist: average(week(), Metric::Waist),
        avg_calories: average(week(), Metric::Calories),
        avg_protein: average(week(), Metric::Protein),
        avg_carbs: average(week(), Metric::Carbs),
        avg_fat: average(week(), Metric::Fat),
        total_calories: sum(week(), Metric::Calories),
        total_steps: sum(week(), Metric::Steps),
        workouts: workout_tally(week()),
    }
}

/// Weighed-in days across the whole store, oldest first. Each call walks the
/// records again.
pub fn weight_trend(days: &[DailyRecord]) -> impl Iterator<Item = TrendPoint> + '_ {
    let mut weighed: Vec<&DailyRecord> = days
        .iter()
        .filter(|record| !record.weight.is_empty())
        .collect();
    weighed.sort_by(|a, b| a.date.cmp(&b.date));

    weighed.into_iter().filter_map(|record| {
        let weight = record.measurement(Metric::Weight)?;
        Some(TrendPoint {
            label: record.date.get(5..).unwrap_or(&record.date).to_string(),
            date: record.date.clone(),
            weight,
        })
    })
}

/// Trend points plus a y-axis range that always shows the start and target
/// weights with a kilo of headroom.
pub fn trend_chart(days: &[DailyRecord], goal: &Goal) -> TrendChart {
    let points: Vec<TrendPoint> = weight_trend(days).collect();
    let y_min = points
        .iter()
        .map(|point| point.weight)
        .fold(goal.target_weight - 1.0, f64::min);
    let y_max = points
        .iter()
        .map(|point| point.weight)
        .fold(goal.start_weight + 1.0, f64::max);

    TrendChart {
        points,
        y_min,
        y_max,
    }
}

pub fn workout_plan(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Upper push + HIIT 20 min",
        Weekday::Tue => "Lower body + LISS 40 min",
        Weekday::Wed | Weekday::Sat => "LISS 40 min",
        Weekday::Thu => "Upper pull + HIIT 20 min",
        Weekday::Fri => "Full body + LISS 40 min",
        Weekday::Sun => "Rest / walk",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Workout, WorkoutKind};

    fn day(date: &str) -> DailyRecord {
        DailyRecord::blank(date)
    }

    fn weighed(date: &str, weight: &str) -> DailyRecord {
        DailyRecord {
            weight: weight.to_string(),
            ..day(date)
        }
    }

    fn ymd(raw: &str) -> NaiveDate {
        parse_date(raw).unwrap()
    }

    #[test]
    fn window_spans_monday_to_sunday() {
        let window = WeekWindow::containing(ymd("2024-06-12"));
        assert_eq!(date_key(window.start), "2024-06-10");
        assert_eq!(date_key(window.end), "2024-06-16");
    }

    #[test]
    fn sunday_belongs_to_preceding_monday() {
        let window = WeekWindow::containing(ymd("2024-06-16"));
        assert_eq!(date_key(window.start), "2024-06-10");

        let window = WeekWindow::containing(ymd("2024-06-10"));
        assert_eq!(date_key(window.start), "2024-06-10");
    }

    #[test]
    fn window_always_starts_monday_and_contains_reference() {
        let mut date = ymd("2023-12-20");
        for _ in 0..60 {
            let window = WeekWindow::containing(date);
            assert_eq!(window.start.weekday(), Weekday::Mon);
            assert_eq!(window.end - window.start, Duration::days(6));
            assert!(window.start <= date && date <= window.end);
            date += Duration::days(1);
        }
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window = WeekWindow::containing(ymd("2025-01-01"));
        assert_eq!(date_key(window.start), "2024-12-30");
        assert_eq!(date_key(window.end), "2025-01-05");
        assert_eq!(window.label(), "2025-W01");
    }

    #[test]
    fn parse_date_requires_canonical_form() {
        assert!(parse_date("2024-06-12").is_ok());
        assert!(parse_date("2024-6-12").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn weekly_average_of_weight() {
        let days = vec![weighed("2024-06-10", "80"), weighed("2024-06-12", "78")];
        let summary = summarize_week(&days, ymd("2024-06-12"));

        assert_eq!(summary.start_date, "2024-06-10");
        assert_eq!(summary.end_date, "2024-06-16");
        assert_eq!(summary.avg_weight, Stat::Value(79.0));
        assert_eq!(summary.days_logged, 2);
    }

    #[test]
    fn records_outside_window_are_ignored() {
        let days = vec![
            weighed("2024-06-09", "90"),
            weighed("2024-06-10", "80"),
            weighed("2024-06-17", "70"),
        ];
        let summary = summarize_week(&days, ymd("2024-06-14"));
        assert_eq!(summary.avg_weight, Stat::Value(80.0));
    }

    #[test]
    fn non_numeric_values_are_excluded_from_count() {
        let days = vec![
            DailyRecord {
                calories: "abc".to_string(),
                ..day("2024-06-10")
            },
            DailyRecord {
                calories: "2000".to_string(),
                ..day("2024-06-11")
            },
            DailyRecord {
                calories: "2101".to_string(),
                ..day("2024-06-12")
            },
        ];
        let window = WeekWindow::containing(ymd("2024-06-12"));

        assert_eq!(sum(window.select(&days), Metric::Calories), Stat::Value(4101.0));
        assert_eq!(
            average(window.select(&days), Metric::Calories),
            Stat::Value(2050.5)
        );
    }

    #[test]
    fn averages_round_to_one_decimal_and_sums_to_whole() {
        let days = vec![
            weighed("2024-06-10", "80.04"),
            weighed("2024-06-11", "80.0"),
            weighed("2024-06-12", "80.0"),
            DailyRecord {
                steps: "8000.6".to_string(),
                ..day("2024-06-13")
            },
        ];
        let summary = summarize_week(&days, ymd("2024-06-12"));
        assert_eq!(summary.avg_weight, Stat::Value(80.0));
        assert_eq!(summary.total_steps, Stat::Value(8001.0));
    }

    #[test]
    fn huge_values_stay_finite() {
        let days = vec![
            weighed("2024-06-10", "1e308"),
            DailyRecord {
                steps: "1e308".to_string(),
                ..weighed("2024-06-11", "1e308")
            },
            DailyRecord {
                steps: "1e308".to_string(),
                ..day("2024-06-12")
            },
        ];
        let summary = summarize_week(&days, ymd("2024-06-12"));
        assert_eq!(summary.avg_weight, Stat::Value(1e308));
        assert_eq!(summary.total_steps, Stat::Value(f64::MAX));

        let single = average(&days[..1], Metric::Weight);
        assert_eq!(single, Stat::Value(1e308));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["avg_weight"].is_number());
        assert!(json["total_steps"].is_number());
    }

    #[test]
    fn empty_week_has_no_data_and_zero_tallies() {
        let days = vec![weighed("2024-01-01", "80")];
        let summary = summarize_week(&days, ymd("2024-06-12"));

        assert_eq!(summary.days_logged, 0);
        assert!(summary.avg_weight.is_no_data());
        assert!(summary.avg_calories.is_no_data());
        assert!(summary.total_steps.is_no_data());
        assert_eq!(summary.workouts, WorkoutTally::default());
        assert!(average(std::iter::empty::<&DailyRecord>(), Metric::Protein).is_no_data());
    }

    #[test]
    fn workout_tally_counts_each_flag_independently() {
        let days = vec![
            DailyRecord {
                workout: Workout {
                    push: true,
                    hiit: true,
                    ..Workout::default()
                },
                ..day("2024-06-10")
            },
            DailyRecord {
                workout: Workout {
                    hiit: true,
                    liss: true,
                    ..Workout::default()
                },
                ..day("2024-06-11")
            },
        ];
        let tally = workout_tally(&days);

        assert_eq!(tally.get(WorkoutKind::Push), 1);
        assert_eq!(tally.get(WorkoutKind::Hiit), 2);
        assert_eq!(tally.get(WorkoutKind::Liss), 1);
        assert_eq!(tally.get(WorkoutKind::Legs), 0);
    }

    #[test]
    fn trend_skips_blank_and_unparseable_weights() {
        let days = vec![
            weighed("2024-06-12", "78"),
            weighed("2024-06-10", "80"),
            day("2024-06-11"),
            weighed("2024-06-13", "heavy"),
        ];

        let points: Vec<TrendPoint> = weight_trend(&days).collect();
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, ["2024-06-10", "2024-06-12"]);
        assert_eq!(points[0].label, "06-10");
        assert_eq!(points[1].weight, 78.0);

        assert_eq!(weight_trend(&days).count(), 2);
    }

    #[test]
    fn trend_chart_bounds_include_goal_headroom() {
        let goal = Goal::default();
        let chart = trend_chart(&[weighed("2024-06-10", "74")], &goal);
        assert_eq!(chart.y_min, goal.target_weight - 1.0);
        assert_eq!(chart.y_max, goal.start_weight + 1.0);

        let chart = trend_chart(&[weighed("2024-06-10", "80"), weighed("2024-06-11", "60")], &goal);
        assert_eq!(chart.y_min, 60.0);
        assert_eq!(chart.y_max, 80.0);
    }

    #[test]
    fn plan_follows_weekday() {
        assert_eq!(workout_plan(ymd("2024-06-10").weekday()), "Upper push + HIIT 20 min");
        assert_eq!(workout_plan(ymd("2024-06-16").weekday()), "Rest / walk");
    }
}
