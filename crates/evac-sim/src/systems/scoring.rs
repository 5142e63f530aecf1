//! Final scoring and grading.

use evac_core::constants::*;
use evac_core::enums::{Grade, Outcome};
use evac_core::state::CompletionSummary;

use crate::player::ScoreState;

/// Completion bonus on top of the running score.
pub fn completion_bonus(time_remaining: u32, rescued: u32, safety_score: u32) -> u32 {
    let safe_route = if safety_score >= SAFE_ROUTE_THRESHOLD {
        SAFE_ROUTE_BONUS
    } else {
        0
    };
    COMPLETION_BASE_SCORE
        .saturating_add(time_remaining.saturating_mul(TIME_BONUS_PER_SEC))
        .saturating_add(rescued.saturating_mul(RESCUE_BONUS))
        .saturating_add(safe_route)
}

/// Settle the score for `outcome` and record the summary.
///
/// Failures zero the score and grade F regardless of progress.
pub fn finalize(score: &mut ScoreState, outcome: Outcome, rescued: u32, safety_score: u32) -> CompletionSummary {
    let grade = if outcome.is_failure() {
        score.score = 0;
        Grade::F
    } else {
        score.score = score
            .score
            .saturating_add(completion_bonus(score.time_remaining, rescued, safety_score));
        Grade::from_score(score.score)
    };

    let summary = CompletionSummary {
        outcome,
        score: score.score,
        grade,
        time_remaining: score.time_remaining,
        rescued,
        safety_score,
    };
    score.grade = Some(grade);
    score.summary = Some(summary);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_bonus() {
        assert_eq!(completion_bonus(0, 0, 0), 1000);
        assert_eq!(completion_bonus(30, 2, 90), 1000 + 300 + 200 + 200);
        assert_eq!(completion_bonus(30, 2, 89), 1000 + 300 + 200);
    }

    #[test]
    fn test_escape_adds_bonus_to_running_score() {
        let mut score = ScoreState::new(60);
        score.time_remaining = 50;
        score.score = 20;

        let summary = finalize(&mut score, Outcome::Escaped, 1, 100);

        assert_eq!(summary.score, 20 + 1000 + 500 + 100 + 200);
        assert_eq!(summary.grade, Grade::S);
        assert_eq!(score.grade, Some(Grade::S));
        assert_eq!(score.summary, Some(summary));
    }

    #[test]
    fn test_failures_zero_the_score() {
        for outcome in [Outcome::TimedOut, Outcome::SmokeOverwhelmed] {
            let mut score = ScoreState::new(60);
            score.score = 500;
            let summary = finalize(&mut score, outcome, 3, 100);
            assert_eq!(summary.score, 0);
            assert_eq!(summary.grade, Grade::F);
        }
    }

    #[test]
    fn test_route_exhausted_is_graded_normally() {
        let mut score = ScoreState::new(60);
        score.time_remaining = 0;
        let summary = finalize(&mut score, Outcome::RouteExhausted, 0, 50);
        assert_eq!(summary.score, 1000);
        assert_eq!(summary.grade, Grade::C);
    }
}
