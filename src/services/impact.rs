// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consumption impact figures for the impact screen.

use crate::models::ConsumptionData;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// kg of CO2 avoided per liter of water saved.
const CO2_KG_PER_LITER: f64 = 0.002;

/// Reduction and accumulated-savings figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImpactSummary {
    /// Whole-percent drop in water use from first to last month
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub water_reduction_pct: Option<i64>,
    /// Whole-percent drop in electricity use from first to last month
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub electricity_reduction_pct: Option<i64>,
    /// Chart scale maxima
    pub max_water: f64,
    pub max_electricity: f64,
    /// Accumulated water saved, kL
    pub water_saved_kl: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub co2_avoided_kg: i64,
}

impl ImpactSummary {
    pub fn compute(history: &[ConsumptionData], water_saved: i64) -> Self {
        let (water_reduction_pct, electricity_reduction_pct) =
            match (history.first(), history.last()) {
                (Some(first), Some(last)) => (
                    reduction_pct(first.water, last.water),
                    reduction_pct(first.electricity, last.electricity),
                ),
                _ => (None, None),
            };

        let max_water = history.iter().map(|d| d.water).fold(0.0, f64::max);
        let max_electricity = history.iter().map(|d| d.electricity).fold(0.0, f64::max);

        Self {
            water_reduction_pct,
            electricity_reduction_pct,
            max_water,
            max_electricity,
            water_saved_kl: water_saved as f64 / 1000.0,
            co2_avoided_kg: (water_saved as f64 * CO2_KG_PER_LITER).round() as i64,
        }
    }
}

/// Percentage drop from `first` to `last`, rounded. None when `first` is zero.
fn reduction_pct(first: f64, last: f64) -> Option<i64> {
    if first == 0.0 {
        return None;
    }
    Some(((first - last) / first * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(label: &str, water: f64, electricity: f64) -> ConsumptionData {
        ConsumptionData {
            month: label.to_string(),
            water,
            electricity,
        }
    }

    #[test]
    fn test_reduction_and_savings() {
        let history = vec![
            month("Sep", 18500.0, 320.0),
            month("Dic", 14200.0, 265.0),
            month("Feb", 11500.0, 230.0),
        ];
        let summary = ImpactSummary::compute(&history, 2340);

        assert_eq!(summary.water_reduction_pct, Some(38));
        assert_eq!(summary.electricity_reduction_pct, Some(28));
        assert_eq!(summary.max_water, 18500.0);
        assert_eq!(summary.max_electricity, 320.0);
        assert!((summary.water_saved_kl - 2.34).abs() < 1e-9);
        assert_eq!(summary.co2_avoided_kg, 5);
    }

    #[test]
    fn test_empty_history() {
        let summary = ImpactSummary::compute(&[], 0);
        assert_eq!(summary.water_reduction_pct, None);
        assert_eq!(summary.electricity_reduction_pct, None);
        assert_eq!(summary.max_water, 0.0);
    }

    #[test]
    fn test_increase_is_negative_reduction() {
        let history = vec![month("a", 100.0, 0.0), month("b", 150.0, 10.0)];
        let summary = ImpactSummary::compute(&history, 0);
        assert_eq!(summary.water_reduction_pct, Some(-50));
        assert_eq!(summary.electricity_reduction_pct, None);
    }
}
