//! Summary rendering
//!
//! Turns a computed [`Summary`] into the one-line report printed for each
//! workout. Every numeric field is rendered with exactly three decimals.

use serde::{Deserialize, Serialize};

use crate::types::Summary;

/// Language of the rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Line reported for an unrecognized workout code
    pub fn unknown_workout_message(&self) -> &'static str {
        match self {
            Language::En => "Error! No such workout type exists!",
            Language::Ru => "Ошибка!Такого типа тренировки не существует!",
        }
    }
}

/// Renders summaries as text
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryFormatter {
    language: Language,
}

impl SummaryFormatter {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Render a summary on one line
    pub fn format(&self, summary: &Summary) -> String {
        let Summary {
            training_type,
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        } = summary;

        match self.language {
            Language::En => format!(
                "Training type: {training_type}; \
                 Duration: {duration_hours:.3} h; \
                 Distance: {distance_km:.3} km; \
                 Avg speed: {mean_speed_kmh:.3} km/h; \
                 Calories burned: {calories_kcal:.3}."
            ),
            Language::Ru => format!(
                "Тип тренировки: {training_type}; \
                 Длительность: {duration_hours:.3} ч.; \
                 Дистанция: {distance_km:.3} км; \
                 Ср. скорость: {mean_speed_kmh:.3} км/ч; \
                 Потрачено ккал: {calories_kcal:.3}."
            ),
        }
    }

    /// Render a summary, or the fixed error line when there is none
    pub fn format_outcome(&self, summary: Option<&Summary>) -> String {
        match summary {
            Some(summary) => self.format(summary),
            None => self.language.unknown_workout_message().to_string(),
        }
    }
}
