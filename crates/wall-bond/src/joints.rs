/// Staggered-step bookkeeping for the head joints of one course.
///
/// A joint displaced by exactly one quarter module from a joint in the course
/// below continues a staircase in that direction. `left[q]` and `right[q]`
/// hold the length (in courses) of the staircase ending at joint `q`, or zero
/// when the course has no joint there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct JointRuns {
    left: Vec<u32>,
    right: Vec<u32>,
}

/// Displacement, in quarter modules, that counts as a step.
const STEP: u32 = 1;

impl JointRuns {
    /// Runs for the virtual course below the first one: no joints.
    pub(crate) fn empty(quarters: u32) -> Self {
        let len = quarters as usize + 1;
        Self {
            left: vec![0; len],
            right: vec![0; len],
        }
    }

    pub(crate) fn has_joint(&self, quarter: u32) -> bool {
        self.right
            .get(quarter as usize)
            .is_some_and(|run| *run > 0)
    }

    /// `(left, right)` staircase lengths a joint at `quarter` would have in the
    /// next course.
    pub(crate) fn runs_for(&self, quarter: u32) -> (u32, u32) {
        let right = quarter
            .checked_sub(STEP)
            .and_then(|below| self.right.get(below as usize))
            .copied()
            .unwrap_or(0);
        let left = self
            .left
            .get((quarter + STEP) as usize)
            .copied()
            .unwrap_or(0);
        (left + 1, right + 1)
    }

    /// Longest staircase a joint at `quarter` would extend.
    pub(crate) fn longest_for(&self, quarter: u32) -> u32 {
        let (left, right) = self.runs_for(quarter);
        left.max(right)
    }

    /// Runs of the course laid on top of this one with the given joints.
    pub(crate) fn next_course(&self, joints: &[u32]) -> JointRuns {
        let len = self.left.len();
        let mut next = JointRuns {
            left: vec![0; len],
            right: vec![0; len],
        };
        for &quarter in joints {
            if (quarter as usize) < len {
                let (left, right) = self.runs_for(quarter);
                next.left[quarter as usize] = left;
                next.right[quarter as usize] = right;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staircase_grows_in_one_direction() {
        let mut runs = JointRuns::empty(20);
        for course in 0..4u32 {
            let joint = 4 + course;
            assert_eq!(runs.runs_for(joint).1, course + 1);
            runs = runs.next_course(&[joint]);
        }
        assert!(runs.has_joint(7));
        assert!(!runs.has_joint(6));
    }

    #[test]
    fn wider_offsets_start_a_new_run() {
        let runs = JointRuns::empty(20).next_course(&[4]);
        assert_eq!(runs.runs_for(3), (2, 1));
        assert_eq!(runs.runs_for(5), (1, 2));
        assert_eq!(runs.runs_for(2), (1, 1));
        assert_eq!(runs.longest_for(6), 1);
    }
}
