use super::bracket::{GoldenBracket, Shrink};
use super::{Config, Point, Solution, Status};

/// Search state between iterations.
///
/// Scores are transformed objectives where lower is better. A point the
/// observer asked to treat as worse carries an infinite score and is never
/// reported as the best.
pub(super) struct State {
    bracket: GoldenBracket,
    left_score: f64,
    right_score: f64,
    best: Point,
    best_score: f64,
}

impl State {
    pub(super) fn new(
        bracket: GoldenBracket,
        left_score: f64,
        right_score: f64,
        best: Point,
        best_score: f64,
    ) -> Self {
        Self {
            bracket,
            left_score,
            right_score,
            best,
            best_score,
        }
    }

    pub(super) fn best(&self) -> Point {
        self.best
    }

    /// Keeps the better interior point; ties shrink toward the left.
    pub(super) fn next_direction(&self) -> Shrink {
        if self.left_score <= self.right_score {
            Shrink::Right
        } else {
            Shrink::Left
        }
    }

    pub(super) fn probe_x(&self, direction: Shrink) -> f64 {
        self.bracket.probe(direction)
    }

    /// Narrows the bracket and records the score of the newly evaluated point.
    pub(super) fn apply(&mut self, direction: Shrink, score: f64) {
        self.bracket.shrink(direction);
        match direction {
            Shrink::Right => {
                self.right_score = self.left_score;
                self.left_score = score;
            }
            Shrink::Left => {
                self.left_score = self.right_score;
                self.right_score = score;
            }
        }
    }

    /// Replaces the best point if `point` scores strictly better.
    pub(super) fn offer(&mut self, point: Point, score: f64) {
        if score < self.best_score {
            self.best = point;
            self.best_score = score;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        config.accepts(self.bracket.left, self.bracket.right)
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution {
        Solution::at(self.best, status, iters)
    }
}
