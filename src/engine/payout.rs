use crate::domain::chips::Chips;
use crate::domain::SeatIndex;
use crate::engine::positions::distance_after;

/// Поделить сумму поровну между победителями.
///
/// Остаток `amount % n` раздаётся по одной фишке победителям по часовой,
/// начиная с места сразу после баттона.
pub fn split_evenly(amount: Chips, winners: &[SeatIndex], button: SeatIndex, num_seats: u8) -> Vec<(SeatIndex, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }

    let mut ordered = winners.to_vec();
    ordered.sort_by_key(|&s| distance_after(button, s, num_seats));
    ordered.dedup();

    let n = ordered.len() as u64;
    let base = amount.0 / n;
    let remainder = (amount.0 % n) as usize;

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, seat)| {
            let extra = if i < remainder { 1 } else { 0 };
            (seat, Chips(base + extra))
        })
        .collect()
}
