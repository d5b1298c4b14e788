//! Weighted grade aggregation.
//!
//! Grades combine at two levels:
//!
//! ```text
//! course_grade(s, c)    = Σ grade_v · coefficient_v / Σ coefficient_v   (validations v of c)
//! curriculum_average(s) = Σ course_grade(s, c) · ects_c / Σ ects_c     (courses c)
//! ```
//!
//! A missing grade contributes 0 while its coefficient still counts, and a
//! course with no recorded grades contributes 0 while its ECTS still count.
//! A zero total weight at either level yields 0. Nothing here rounds; callers
//! apply [`round_grade`] once on the final value.

use std::collections::{BTreeMap, HashMap};

/// Number of decimals reported for grades and averages.
pub const GRADE_DECIMALS: i32 = 2;

/// Decimals of the scientific mantissa kept before rounding (15 significant digits).
const MANTISSA_DECIMALS: i32 = 14;

/// Round a final grade to [`GRADE_DECIMALS`] places, halves away from zero.
///
/// The value is first read as a decimal with 15 significant digits, then
/// rounded in decimal. A grade entered as `1.005` is stored as
/// `1.00499999999999989...` but still reports `1.01`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn round_grade(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // e.g. "1.00500000000000e0"
    let formatted = format!("{:.14e}", value.abs());
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return value;
    };
    let (Ok(digits), Ok(exponent)) = (
        mantissa.replace('.', "").parse::<u128>(),
        exponent.parse::<i32>(),
    ) else {
        return value;
    };

    // value = digits * 10^(exponent - 14); keep GRADE_DECIMALS of it.
    let Ok(shift) = u32::try_from(MANTISSA_DECIMALS - exponent - GRADE_DECIMALS) else {
        // Nothing below the second decimal survives 15 significant digits.
        return value;
    };
    let Some(divisor) = 10u128.checked_pow(shift) else {
        return 0.0;
    };

    let mut units = digits / divisor;
    if (digits % divisor) * 2 >= divisor {
        units += 1;
    }
    if units == 0 {
        return 0.0;
    }

    // units < 10^15, exact in f64
    (units as f64 / 10f64.powi(GRADE_DECIMALS)).copysign(value)
}

/// Running `Σ value·weight / Σ weight` accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeightedMean {
    weighted_sum: f64,
    total_weight: f64,
}

impl WeightedMean {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weighted_sum: 0.0,
            total_weight: 0.0,
        }
    }

    pub fn add(&mut self, value: f64, weight: f64) {
        self.weighted_sum += value * weight;
        self.total_weight += weight;
    }

    #[must_use]
    pub const fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// The weighted mean, or 0 when no weight has been accumulated.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.total_weight > 0.0 {
            self.weighted_sum / self.total_weight
        } else {
            0.0
        }
    }
}

impl FromIterator<(f64, f64)> for WeightedMean {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut mean = Self::new();
        for (value, weight) in iter {
            mean.add(value, weight);
        }
        mean
    }
}

/// A course registered to the curriculum under aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourseWeight {
    pub course: i64,
    pub ects: f64,
}

/// A validation of one of the sheet's courses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationWeight {
    pub validation: i64,
    pub coefficient: f64,
}

/// Everything needed to aggregate one curriculum, held fixed for the
/// duration of a computation.
#[derive(Debug, Clone, Default)]
pub struct GradeSheet {
    courses: Vec<CourseWeight>,
    validations: BTreeMap<i64, Vec<ValidationWeight>>,
    grades: HashMap<(i64, i64), f64>,
}

impl GradeSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a course of the curriculum with its ECTS weight.
    pub fn add_course(&mut self, course: i64, ects: f64) {
        self.courses.push(CourseWeight { course, ects });
    }

    /// Attach a validation to a course.
    pub fn add_validation(&mut self, course: i64, validation: i64, coefficient: f64) {
        self.validations
            .entry(course)
            .or_default()
            .push(ValidationWeight {
                validation,
                coefficient,
            });
    }

    /// Record a student's grade on a validation.
    pub fn record_grade(&mut self, validation: i64, student: i64, grade: f64) {
        self.grades.insert((validation, student), grade);
    }

    #[must_use]
    pub fn courses(&self) -> &[CourseWeight] {
        &self.courses
    }

    /// Number of grades loaded into the sheet.
    #[must_use]
    pub fn grade_count(&self) -> usize {
        self.grades.len()
    }

    /// Unrounded course grade of `student` in `course`.
    #[must_use]
    pub fn course_grade(&self, student: i64, course: i64) -> f64 {
        self.validations
            .get(&course)
            .map_or(0.0, |validations| {
                validations
                    .iter()
                    .map(|v| {
                        let grade = self
                            .grades
                            .get(&(v.validation, student))
                            .copied()
                            .unwrap_or(0.0);
                        (grade, v.coefficient)
                    })
                    .collect::<WeightedMean>()
                    .value()
            })
    }

    /// Unrounded curriculum average of `student` over every registered course.
    #[must_use]
    pub fn curriculum_average(&self, student: i64) -> f64 {
        self.courses
            .iter()
            .map(|c| (self.course_grade(student, c.course), c.ects))
            .collect::<WeightedMean>()
            .value()
    }
}
