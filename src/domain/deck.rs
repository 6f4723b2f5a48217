use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт. В домене – просто упорядоченный список карт.
/// Перемешивание делает дилер через RandomSource, НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять n карт сверху (конец вектора = верх колоды).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            } else {
                break;
            }
        }
        taken
    }
}

/// Внешний дилер: выдаёт карты для раздачи.
///
/// Контракт: ни одна карта не выдаётся дважды в пределах раздачи.
/// Если карт меньше, чем запрошено, возвращается сколько есть.
pub trait Dealer {
    fn pop_cards(&mut self, n: usize) -> Vec<Card>;

    /// Подготовить дилера к новой раздаче.
    fn reset(&mut self);

    /// Сколько карт ещё можно выдать.
    fn remaining(&self) -> usize;
}

/// Дилер со стандартной колодой, перемешиваемой при каждом `reset`.
#[derive(Clone, Debug)]
pub struct ShuffledDealer<R: RandomSource> {
    rng: R,
    deck: Deck,
}

impl<R: RandomSource> ShuffledDealer<R> {
    pub fn new(rng: R) -> Self {
        let mut dealer = Self {
            rng,
            deck: Deck::standard_52(),
        };
        dealer.reset();
        dealer
    }
}

impl<R: RandomSource> Dealer for ShuffledDealer<R> {
    fn pop_cards(&mut self, n: usize) -> Vec<Card> {
        self.deck.draw_n(n)
    }

    fn reset(&mut self) {
        self.deck = Deck::standard_52();
        self.rng.shuffle(&mut self.deck.cards);
    }

    fn remaining(&self) -> usize {
        self.deck.len()
    }
}

/// Дилер с заранее заданным порядком карт (для тестов и реплея).
/// Карты выдаются в том порядке, в котором переданы.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDealer {
    cards: Vec<Card>,
    next: usize,
}

impl FixedDealer {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }
}

impl Dealer for FixedDealer {
    fn pop_cards(&mut self, n: usize) -> Vec<Card> {
        let end = (self.next + n).min(self.cards.len());
        let taken = self.cards[self.next..end].to_vec();
        self.next = end;
        taken
    }

    fn reset(&mut self) {
        self.next = 0;
    }

    fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }
}
