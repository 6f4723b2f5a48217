use crate::domain::SeatIndex;

/// Следующее место по часовой стрелке.
pub fn next_seat(seat: SeatIndex, num_seats: u8) -> SeatIndex {
    if num_seats == 0 {
        return seat;
    }
    ((seat as u16 + 1) % num_seats as u16) as SeatIndex
}

/// Все места по кругу, начиная с `start` (включительно).
pub fn clockwise_from(start: SeatIndex, num_seats: u8) -> Vec<SeatIndex> {
    let n = num_seats as u16;
    (0..n)
        .map(|i| ((start as u16 + i) % n) as SeatIndex)
        .collect()
}

/// Все места по кругу, начиная со следующего после `seat`; `seat` – последний.
pub fn clockwise_after(seat: SeatIndex, num_seats: u8) -> Vec<SeatIndex> {
    clockwise_from(next_seat(seat, num_seats), num_seats)
}

/// Сколько шагов по часовой от места после `from` до `seat`
/// (место сразу после `from` – 0, само `from` – последнее).
pub fn distance_after(from: SeatIndex, seat: SeatIndex, num_seats: u8) -> usize {
    let n = num_seats as usize;
    if n == 0 {
        return 0;
    }
    (seat as usize + n - from as usize - 1) % n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clockwise_orders_wrap_around() {
        assert_eq!(clockwise_from(2, 4), vec![2, 3, 0, 1]);
        assert_eq!(clockwise_after(2, 4), vec![3, 0, 1, 2]);
        assert_eq!(next_seat(3, 4), 0);
    }

    #[test]
    fn distance_after_button() {
        assert_eq!(distance_after(0, 1, 3), 0);
        assert_eq!(distance_after(0, 2, 3), 1);
        assert_eq!(distance_after(0, 0, 3), 2);
    }
}
