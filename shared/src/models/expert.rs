//! Expert Model

use serde::{Deserialize, Serialize};

/// Expert profile attached to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expert {
    #[serde(alias = "id")]
    pub expert_id: i64,
    #[serde(default)]
    pub expertise_fields: Vec<String>,
    /// Ratio in `0.0..=1.0`
    #[serde(default)]
    pub expertise_level: f64,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub user_id: i64,
}

/// Vote distribution of one expert assessment.
///
/// The backend stores ratios; forms work in percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub highly_not_recommended: f64,
    pub not_recommended: f64,
    pub recommended: f64,
    pub highly_recommended: f64,
}

impl Vote {
    /// Percentages (0-100) to ratios (0-1)
    pub fn to_ratios(self) -> Self {
        self.scale(0.01)
    }

    /// Ratios (0-1) to percentages (0-100)
    pub fn to_percentages(self) -> Self {
        self.scale(100.0)
    }

    pub fn total(&self) -> f64 {
        self.highly_not_recommended + self.not_recommended + self.recommended + self.highly_recommended
    }

    /// Share of the vote leaning towards recommendation.
    pub fn approval(&self) -> f64 {
        self.recommended + self.highly_recommended
    }

    /// Average of several votes, field by field. Empty input averages to zero.
    pub fn aggregate(votes: &[Vote]) -> Vote {
        if votes.is_empty() {
            return Vote::default();
        }
        let sum = votes.iter().fold(Vote::default(), |acc, v| Vote {
            highly_not_recommended: acc.highly_not_recommended + v.highly_not_recommended,
            not_recommended: acc.not_recommended + v.not_recommended,
            recommended: acc.recommended + v.recommended,
            highly_recommended: acc.highly_recommended + v.highly_recommended,
        });
        sum.scale(1.0 / votes.len() as f64)
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            highly_not_recommended: self.highly_not_recommended * factor,
            not_recommended: self.not_recommended * factor,
            recommended: self.recommended * factor,
            highly_recommended: self.highly_recommended * factor,
        }
    }
}

/// Review left by an expert on a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertReview {
    #[serde(default, alias = "id")]
    pub expert_review_id: i64,
    pub vote: Vote,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub project_id: i64,
}
