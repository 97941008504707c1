/// The hand's single pot, with each seat's running contribution.
///
/// The total is the only number shown at the table; per-seat contributions
/// exist so that a bet nobody could match is handed back before a showdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pot {
    contributions: Vec<u32>,
    total: u32,
}

impl Pot {
    pub fn new(seats: usize) -> Self {
        Self {
            contributions: vec![0; seats],
            total: 0,
        }
    }

    pub fn from_contributions(contributions: impl Into<Vec<u32>>) -> Self {
        let contributions = contributions.into();
        let total = contributions.iter().sum();
        Self {
            contributions,
            total,
        }
    }

    pub fn add(&mut self, seat: usize, amount: u32) {
        if seat >= self.contributions.len() {
            self.contributions.resize(seat + 1, 0);
        }
        self.contributions[seat] += amount;
        self.total += amount;
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn contribution(&self, seat: usize) -> u32 {
        self.contributions.get(seat).copied().unwrap_or(0)
    }

    /// Chips the largest contributor put in beyond what anyone else matched,
    /// as `(seat, amount)`. `None` when the top contribution is shared.
    pub fn uncalled_excess(&self) -> Option<(usize, u32)> {
        let (top_seat, top) = self
            .contributions
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|&(seat, amount)| (amount, std::cmp::Reverse(seat)))?;
        let second = self
            .contributions
            .iter()
            .copied()
            .enumerate()
            .filter(|&(seat, _)| seat != top_seat)
            .map(|(_, amount)| amount)
            .max()
            .unwrap_or(0);
        (top > second).then(|| (top_seat, top - second))
    }

    /// Removes `amount` from `seat`'s contribution and the total.
    pub fn refund(&mut self, seat: usize, amount: u32) -> u32 {
        let amount = amount.min(self.contribution(seat));
        if let Some(c) = self.contributions.get_mut(seat) {
            *c -= amount;
        }
        self.total -= amount;
        amount
    }

    /// Empties the pot, returning everything it held.
    pub fn take(&mut self) -> u32 {
        let total = self.total;
        self.clear();
        total
    }

    pub fn clear(&mut self) {
        self.contributions.iter_mut().for_each(|c| *c = 0);
        self.total = 0;
    }
}

/// Splits `amount` between `winners` as `(seat, share)` in seat order.
///
/// Every winner gets `amount / n`; the `amount % n` leftover chips go one each
/// to the lowest seats, so the shares always add up to `amount` exactly.
pub fn split_pot(amount: u32, winners: &[usize]) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let mut seats = winners.to_vec();
    seats.sort_unstable();
    seats.dedup();
    let n = seats.len() as u32;
    let share = amount / n;
    let remainder = (amount % n) as usize;
    seats
        .into_iter()
        .enumerate()
        .map(|(i, seat)| (seat, share + u32::from(i < remainder)))
        .collect()
}
