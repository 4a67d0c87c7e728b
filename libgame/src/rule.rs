/// Outer-totalistic rule: neighbor counts that give birth to a dead cell and
/// counts that keep a live cell alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl Rule {
    pub fn next_state(&self, alive: bool, alive_neighbor_count: usize) -> bool {
        if alive {
            self.survive.contains(&alive_neighbor_count)
        } else {
            self.birth.contains(&alive_neighbor_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rule_is_b3_s23() {
        let rule = Rule::default();

        for count in 0..=8 {
            assert_eq!(rule.next_state(true, count), count == 2 || count == 3);
            assert_eq!(rule.next_state(false, count), count == 3);
        }
    }
}
