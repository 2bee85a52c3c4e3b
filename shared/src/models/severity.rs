//! AQI severity classification (US EPA buckets)

use serde::{Deserialize, Serialize};

use crate::types::Aqi;

/// AQI severity level, in ascending order of severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthyForSensitiveGroups,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301+
    Hazardous,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Good => "Good",
            Severity::Moderate => "Moderate",
            Severity::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Severity::Unhealthy => "Unhealthy",
            Severity::VeryUnhealthy => "Very Unhealthy",
            Severity::Hazardous => "Hazardous",
        }
    }

    /// Display color used for markers, metrics and the donut gauge
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Good => "green",
            Severity::Moderate => "yellow",
            Severity::UnhealthyForSensitiveGroups => "orange",
            Severity::Unhealthy => "red",
            Severity::VeryUnhealthy => "purple",
            Severity::Hazardous => "maroon",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the classification table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBucket {
    /// Inclusive upper bound. `None` for the open-ended top bucket.
    pub upper_bound: Option<Aqi>,
    pub severity: Severity,
}

impl SeverityBucket {
    pub fn contains(&self, aqi: Aqi) -> bool {
        self.upper_bound.map_or(true, |bound| aqi <= bound)
    }
}

/// Classification table, ascending by upper bound. The last row is unbounded.
pub const SEVERITY_TABLE: [SeverityBucket; 6] = [
    SeverityBucket {
        upper_bound: Some(50),
        severity: Severity::Good,
    },
    SeverityBucket {
        upper_bound: Some(100),
        severity: Severity::Moderate,
    },
    SeverityBucket {
        upper_bound: Some(150),
        severity: Severity::UnhealthyForSensitiveGroups,
    },
    SeverityBucket {
        upper_bound: Some(200),
        severity: Severity::Unhealthy,
    },
    SeverityBucket {
        upper_bound: Some(300),
        severity: Severity::VeryUnhealthy,
    },
    SeverityBucket {
        upper_bound: None,
        severity: Severity::Hazardous,
    },
];

/// Classify an AQI value: the first bucket whose upper bound is >= `aqi`.
///
/// Total over every integer. Zero and negative values land in `Good`,
/// anything above 300 is `Hazardous`.
pub fn classify(aqi: Aqi) -> Severity {
    SEVERITY_TABLE
        .iter()
        .find(|bucket| bucket.contains(aqi))
        .map(|bucket| bucket.severity)
        .unwrap_or(Severity::Hazardous)
}

/// `(label, color)` pair for an AQI value
pub fn aqi_status(aqi: Aqi) -> (&'static str, &'static str) {
    let severity = classify(aqi);
    (severity.label(), severity.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_ends_unbounded() {
        let bounds: Vec<Aqi> = SEVERITY_TABLE
            .iter()
            .filter_map(|bucket| bucket.upper_bound)
            .collect();
        assert_eq!(bounds, vec![50, 100, 150, 200, 300]);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(SEVERITY_TABLE.last().map(|b| b.upper_bound), Some(None));
    }

    #[test]
    fn test_table_severities_ascend() {
        assert!(SEVERITY_TABLE
            .windows(2)
            .all(|w| w[0].severity < w[1].severity));
    }

    #[test]
    fn test_classify_bucket_edges() {
        assert_eq!(classify(0), Severity::Good);
        assert_eq!(classify(50), Severity::Good);
        assert_eq!(classify(51), Severity::Moderate);
        assert_eq!(classify(300), Severity::VeryUnhealthy);
        assert_eq!(classify(301), Severity::Hazardous);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(classify(Aqi::MIN), Severity::Good);
        assert_eq!(classify(Aqi::MAX), Severity::Hazardous);
    }

    #[test]
    fn test_aqi_status_pairs() {
        assert_eq!(aqi_status(-10), ("Good", "green"));
        assert_eq!(aqi_status(175), ("Unhealthy", "red"));
        assert_eq!(aqi_status(500), ("Hazardous", "maroon"));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            Severity::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }
}
