//! Core types for the recommendation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Area a recommendation is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    DebtPayment,
    Investment,
    Spending,
    Emergency,
    Goal,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::DebtPayment => "debt_payment",
            RecommendationType::Investment => "investment",
            RecommendationType::Spending => "spending",
            RecommendationType::Emergency => "emergency",
            RecommendationType::Goal => "goal",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecommendationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debt_payment" => Ok(RecommendationType::DebtPayment),
            "investment" => Ok(RecommendationType::Investment),
            "spending" => Ok(RecommendationType::Spending),
            "emergency" => Ok(RecommendationType::Emergency),
            "goal" => Ok(RecommendationType::Goal),
            _ => Err(format!("Unknown recommendation type: {}", s)),
        }
    }
}

/// How urgent a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Numeric rank for callers that sort by severity (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Expected effect of following a recommendation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedImpact {
    pub savings: Option<f64>,
}

/// A recommendation produced by a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_required: bool,
    pub estimated_impact: Option<EstimatedImpact>,
}

impl Recommendation {
    /// Create a recommendation that requires action
    pub fn new(
        recommendation_type: RecommendationType,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            recommendation_type,
            priority,
            title: title.into(),
            description: description.into(),
            action_required: true,
            estimated_impact: None,
        }
    }

    /// Mark as informational
    pub fn informational(mut self) -> Self {
        self.action_required = false;
        self
    }

    /// Attach an estimated monetary impact
    pub fn with_savings(mut self, savings: f64) -> Self {
        self.estimated_impact = Some(EstimatedImpact {
            savings: Some(savings),
        });
        self
    }
}
