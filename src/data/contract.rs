use std::{collections::BTreeSet, path::Path};

use anyhow::Context as _;

use crate::{
    data::regions::{declared_ids, declared_index},
    foundation::error::{LobbyError, LobbyResult},
};

/// Number of monthly points a trend must carry.
pub const TREND_POINTS: usize = 12;

/// The reel payload.
///
/// Deserialized from camelCase JSON and immutable once validated. A
/// [`crate::Composition`] owns its copy for the whole render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyData {
    /// Company name shown on the brand card.
    pub company_name: String,
    /// One-line tagline under the company name.
    pub tagline: String,
    /// KPI cards, in display order.
    pub kpis: Vec<Kpi>,
    /// Twelve-month trend.
    pub trend: Trend,
    /// Per-region figures; input order does not affect reveal order.
    pub regions: Vec<Region>,
    /// RFC 3339 timestamp of the data snapshot.
    pub last_updated: String,
}

/// One KPI card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Kpi {
    /// Card caption.
    pub label: String,
    /// Target value the card counts up to.
    pub value: f64,
    /// Display format.
    pub format: KpiFormat,
}

/// How a KPI value is rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    /// `$742,819`
    Currency,
    /// `742,819`
    Integer,
    /// `94%`
    Percent,
}

/// Monthly series for the trend chart.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trend {
    /// Chart title.
    pub label: String,
    /// Exactly [`TREND_POINTS`] values, January first.
    pub points: Vec<f64>,
}

impl Trend {
    /// `(last - first) / first`.
    pub fn growth_ratio(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (last - first) / first,
            _ => 0.0,
        }
    }
}

/// Figures for one map region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    /// Declared region id (see [`crate::DECLARED_REGIONS`]).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Units sold; drives the top-region highlight.
    pub units: f64,
    /// Revenue in currency units.
    pub revenue: f64,
}

impl LobbyData {
    /// Parse JSON text without validating.
    pub fn from_json_str(s: &str) -> LobbyResult<Self> {
        serde_json::from_str(s).map_err(|e| LobbyError::schema(format!("invalid payload: {e}")))
    }

    /// Read, parse and validate a payload file.
    pub fn from_path(path: &Path) -> LobbyResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read payload '{}'", path.display()))?;
        let data = Self::from_json_str(&text)?;
        data.validate()?;
        Ok(data)
    }

    /// Check every contract invariant; the first violation is reported as a schema error.
    pub fn validate(&self) -> LobbyResult<()> {
        if self.company_name.trim().is_empty() {
            return Err(LobbyError::schema("companyName must be non-empty"));
        }

        if self.kpis.is_empty() {
            return Err(LobbyError::schema("kpis must contain at least one entry"));
        }
        for (i, kpi) in self.kpis.iter().enumerate() {
            if kpi.label.trim().is_empty() {
                return Err(LobbyError::schema(format!("kpis[{i}].label must be non-empty")));
            }
            if !kpi.value.is_finite() {
                return Err(LobbyError::schema(format!("kpis[{i}].value must be finite")));
            }
        }

        if self.trend.points.len() != TREND_POINTS {
            return Err(LobbyError::schema(format!(
                "trend.points must have exactly {TREND_POINTS} entries (got {})",
                self.trend.points.len()
            )));
        }
        if let Some(i) = self.trend.points.iter().position(|p| !p.is_finite()) {
            return Err(LobbyError::schema(format!("trend.points[{i}] must be finite")));
        }
        if self.trend.points[0] == 0.0 {
            return Err(LobbyError::schema(
                "trend.points[0] must be non-zero (growth is relative to it)",
            ));
        }

        if self.regions.is_empty() {
            return Err(LobbyError::schema("regions must contain at least one entry"));
        }
        let mut seen = BTreeSet::new();
        for (i, region) in self.regions.iter().enumerate() {
            if declared_index(&region.id).is_none() {
                return Err(LobbyError::schema(format!(
                    "regions[{i}].id '{}' is not one of: {}",
                    region.id,
                    declared_ids()
                )));
            }
            if !seen.insert(region.id.as_str()) {
                return Err(LobbyError::schema(format!(
                    "regions[{i}].id '{}' is duplicated",
                    region.id
                )));
            }
            for (field, v) in [("units", region.units), ("revenue", region.revenue)] {
                if !v.is_finite() || v < 0.0 {
                    return Err(LobbyError::schema(format!(
                        "regions[{i}].{field} must be finite and >= 0"
                    )));
                }
            }
        }

        self.last_updated_at()?;
        Ok(())
    }

    /// Parsed `lastUpdated`.
    pub fn last_updated_at(&self) -> LobbyResult<chrono::DateTime<chrono::FixedOffset>> {
        chrono::DateTime::parse_from_rfc3339(self.last_updated.trim()).map_err(|e| {
            LobbyError::schema(format!(
                "lastUpdated '{}' is not an ISO-8601 timestamp: {e}",
                self.last_updated
            ))
        })
    }

    /// Regions ordered by the declared reveal order (not input order).
    pub fn regions_in_declared_order(&self) -> Vec<&Region> {
        let mut out: Vec<&Region> = self.regions.iter().collect();
        out.sort_by_key(|r| declared_index(&r.id).unwrap_or(usize::MAX));
        out
    }

    /// Region with the most units; ties go to the earliest declared region.
    pub fn top_region(&self) -> Option<&Region> {
        let mut best: Option<&Region> = None;
        for region in self.regions_in_declared_order() {
            match best {
                Some(b) if region.units <= b.units => {}
                _ => best = Some(region),
            }
        }
        best
    }

    /// Demo payload used by `lobbyreel sample` and the test fixtures.
    pub fn sample() -> Self {
        Self {
            company_name: "Northwind Robotics".to_string(),
            tagline: "Automation that ships on time".to_string(),
            kpis: vec![
                Kpi {
                    label: "Quarterly revenue".to_string(),
                    value: 742_819.0,
                    format: KpiFormat::Currency,
                },
                Kpi {
                    label: "Units shipped".to_string(),
                    value: 18_204.0,
                    format: KpiFormat::Integer,
                },
                Kpi {
                    label: "On-time delivery".to_string(),
                    value: 94.0,
                    format: KpiFormat::Percent,
                },
            ],
            trend: Trend {
                label: "Monthly orders".to_string(),
                points: vec![
                    100.0, 110.0, 90.0, 125.0, 140.0, 132.0, 150.0, 161.0, 158.0, 170.0, 182.0,
                    196.0,
                ],
            },
            regions: vec![
                Region {
                    id: "northeast".to_string(),
                    label: "Northeast".to_string(),
                    units: 4_120.0,
                    revenue: 1_850_000.0,
                },
                Region {
                    id: "west".to_string(),
                    label: "West".to_string(),
                    units: 5_310.0,
                    revenue: 2_100_000.0,
                },
                Region {
                    id: "midwest".to_string(),
                    label: "Midwest".to_string(),
                    units: 2_980.0,
                    revenue: 990_000.0,
                },
                Region {
                    id: "southeast".to_string(),
                    label: "Southeast".to_string(),
                    units: 3_470.0,
                    revenue: 1_240_000.0,
                },
                Region {
                    id: "southwest".to_string(),
                    label: "Southwest".to_string(),
                    units: 2_324.0,
                    revenue: 310_000.0,
                },
            ],
            last_updated: "2026-10-01T09:30:00Z".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/contract.rs"]
mod tests;
