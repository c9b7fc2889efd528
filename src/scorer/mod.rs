// src/scorer/mod.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::breach::{BreachChecker, BreachResult};
use crate::generators::charset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    Empty,
    Weak,
    Moderate,
    Strong,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    /// Overall strength score, 0-100
    pub score: u8,
    /// Qualitative strength level
    pub level: StrengthLevel,
    /// Estimated entropy in bits (upper bound, assumes uniform random choice)
    pub entropy: f64,
    /// Whether the password appears in the breach corpus
    pub breached: bool,
    /// Number of times the password appears in known breaches
    pub breach_count: u64,
    /// Remediation suggestions, most important first
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::Empty,
            entropy: 0.0,
            breached: false,
            breach_count: 0,
            suggestions: Vec::new(),
        }
    }
}

pub struct StrengthScorer {
    checker: BreachChecker,
}

impl StrengthScorer {
    pub fn new(checker: BreachChecker) -> Self {
        Self { checker }
    }

    /// Evaluate a password: breach lookup, entropy estimate, additive rubric.
    /// Empty passwords short-circuit without touching the network.
    pub async fn evaluate(&self, password: &str) -> StrengthReport {
        if password.is_empty() {
            return StrengthReport::empty();
        }
        let breach = self.checker.check(password).await;
        score_password(password, breach)
    }
}

/// Coarse entropy estimate: length x log2(pool), where the pool is the sum
/// of the sizes of the character classes actually present. An upper bound,
/// not measured entropy; human-chosen passwords score lower in practice.
pub fn estimate_entropy(password: &str) -> f64 {
    let mut pool = 0usize;
    if password.chars().any(charset::is_lowercase) {
        pool += charset::LOWERCASE.len();
    }
    if password.chars().any(charset::is_uppercase) {
        pool += charset::UPPERCASE.len();
    }
    if password.chars().any(charset::is_digit) {
        pool += charset::DIGITS.len();
    }
    if password.chars().any(charset::is_symbol) {
        pool += charset::SYMBOLS.len();
    }

    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (pool as f64).log2()
}

fn score_password(password: &str, breach: BreachResult) -> StrengthReport {
    let entropy = estimate_entropy(password);
    let length = password.chars().count();

    let mut score: i32 = 0;
    let mut suggestions: Vec<String> = Vec::new();

    if length < 8 {
        suggestions.push("Increase password length to at least 12 characters.".to_string());
    } else if length < 12 {
        suggestions.push(
            "Consider making the password even longer (12+ chars) for better security."
                .to_string(),
        );
        score += 15;
    } else {
        score += 25;
    }

    if password.chars().any(charset::is_lowercase) {
        score += 15;
    } else {
        suggestions.push("Add lowercase letters.".to_string());
    }

    if password.chars().any(charset::is_uppercase) {
        score += 15;
    } else {
        suggestions.push("Add uppercase letters.".to_string());
    }

    if password.chars().any(charset::is_digit) {
        score += 15;
    } else {
        suggestions.push("Add numbers.".to_string());
    }

    if password.chars().any(charset::is_symbol) {
        score += 15;
    } else {
        suggestions.push("Add special characters (e.g., !@#$%).".to_string());
    }

    if entropy > 80.0 {
        score += 15;
    } else if entropy > 50.0 {
        score += 5;
    }

    if breach.found {
        score = score.min(20);
        suggestions.insert(
            0,
            format!(
                "DANGER: Password found in {} data breaches! Do not use this.",
                breach.count
            ),
        );
    }

    let score = score.clamp(0, 100) as u8;

    let level = if score < 40 {
        StrengthLevel::Weak
    } else if score < 75 {
        StrengthLevel::Moderate
    } else {
        StrengthLevel::Strong
    };

    StrengthReport {
        score,
        level,
        entropy: (entropy * 100.0).round() / 100.0,
        breached: breach.found,
        breach_count: breach.count,
        suggestions,
    }
}
