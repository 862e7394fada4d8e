/// The inverse golden ratio, `(√5 - 1) / 2`.
pub(super) const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// The squared inverse golden ratio, `(3 - √5) / 2`, which equals `1 - 1/φ`.
const INV_PHI_SQ: f64 = 1.0 - INV_PHI;

/// Outer bounds and golden-ratio interior points of a search interval.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,

    /// Interior point at `left + (1 - φ⁻¹) * width`.
    pub(super) inner_left: f64,

    /// Interior point at `left + φ⁻¹ * width`.
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket from bounds given in either order.
    pub(super) fn new([a, b]: [f64; 2]) -> Self {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + INV_PHI_SQ * width,
            inner_right: left + INV_PHI * width,
        }
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Where the next evaluation lands if the bracket shrinks in `direction`.
    pub(super) fn probe(&self, direction: Shrink) -> f64 {
        match direction {
            Shrink::Right => self.left + INV_PHI_SQ * (self.inner_right - self.left),
            Shrink::Left => self.inner_left + INV_PHI * (self.right - self.inner_left),
        }
    }

    /// Narrows the bracket, keeping the surviving interior point.
    pub(super) fn shrink(&mut self, direction: Shrink) {
        let next = self.probe(direction);
        match direction {
            Shrink::Right => {
                self.right = self.inner_right;
                self.inner_right = self.inner_left;
                self.inner_left = next;
            }
            Shrink::Left => {
                self.left = self.inner_left;
                self.inner_left = self.inner_right;
                self.inner_right = next;
            }
        }
    }
}

/// Which outer bound moves inward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shrink {
    /// `right` moves to `inner_right`; a new `inner_left` is evaluated.
    Right,

    /// `left` moves to `inner_left`; a new `inner_right` is evaluated.
    Left,
}
