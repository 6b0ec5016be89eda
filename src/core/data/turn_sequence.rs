use std::slice;

/// Ordered left/right decisions of a Dragon Curve at a fixed iteration
/// depth. `true` is a left turn. Length is always `2^iterations - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequence {
    iterations: u32,
    turns: Vec<bool>,
}

impl TurnSequence {
    pub(crate) fn from_turns(iterations: u32, turns: Vec<bool>) -> Self {
        debug_assert_eq!(turns.len(), (1usize << iterations) - 1);

        Self { iterations, turns }
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.turns.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.turns
    }

    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, bool>> {
        self.turns.iter().copied()
    }

    /// Turns as `1` (left) and `0` (right), space separated.
    #[must_use]
    pub fn to_bit_string(&self) -> String {
        self.render(|turn| if turn { '1' } else { '0' })
    }

    /// Turns as `L` and `R`, space separated.
    #[must_use]
    pub fn to_letter_string(&self) -> String {
        self.render(|turn| if turn { 'L' } else { 'R' })
    }

    fn render(&self, symbol: impl Fn(bool) -> char) -> String {
        let mut out = String::with_capacity(self.turns.len() * 2);

        for (index, &turn) in self.turns.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            out.push(symbol(turn));
        }

        out
    }
}

impl<'a> IntoIterator for &'a TurnSequence {
    type Item = bool;
    type IntoIter = std::iter::Copied<slice::Iter<'a, bool>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
