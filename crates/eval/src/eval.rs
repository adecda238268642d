// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand classification and comparison.
//!
//! A five cards hand is classified into a [HandRank] and a tiebreaker
//! sequence, together they make a [HandValue]. Hand values are totally ordered
//! by rank first and then by tiebreaker, two hands with equal rank and
//! tiebreaker have the same strength.
//!
//! The best hand out of more than five cards (e.g. two hole cards and five
//! board cards) is found by classifying all its five cards subsets.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{
    Card, Rank,
    combinations::for_each_combination,
    error::{EvalError, Result},
    straight::straight_high,
};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Number of distinct card values.
const NUM_VALUES: usize = (Rank::MAX_VALUE - Rank::MIN_VALUE + 1) as usize;

/// A hand category.
///
/// The discriminant is the category strength, a higher category always beats
/// a lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 1,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
    /// Royal flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The rank value in the range 1..=10.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a poker hand.
///
/// The tiebreaker holds card values from the most to the least significant,
/// when comparing two tiebreakers of different length the missing values
/// count as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    tiebreaker: Vec<u8>,
}

impl HandValue {
    /// Creates a hand value from a rank and a tiebreaker.
    pub fn new(rank: HandRank, tiebreaker: Vec<u8>) -> Self {
        Self { rank, tiebreaker }
    }

    /// Classifies a five cards hand.
    ///
    /// Returns an error if `cards` doesn't have exactly five cards.
    pub fn classify(cards: &[Card]) -> Result<Self> {
        if cards.len() != HAND_SIZE {
            return Err(EvalError::HandSize(cards.len()));
        }

        Ok(classify_hand(cards))
    }

    /// Returns the value of the best five cards hand out of `cards`.
    ///
    /// Returns an error if there are less than five cards.
    pub fn best(cards: &[Card]) -> Result<Self> {
        Self::best_with_hand(cards).map(|(value, _)| value)
    }

    /// Returns the value of the best five cards hand out of `cards` and the
    /// cards that make that hand.
    ///
    /// When more than one subset has the best value the first one found is
    /// returned. Returns an error if there are less than five cards.
    pub fn best_with_hand(cards: &[Card]) -> Result<(Self, [Card; HAND_SIZE])> {
        if cards.len() < HAND_SIZE {
            return Err(EvalError::NotEnoughCards(cards.len()));
        }

        let mut best: Option<(HandValue, [Card; HAND_SIZE])> = None;
        for_each_combination(cards, HAND_SIZE, |subset| {
            let value = classify_hand(subset);
            if best.as_ref().is_none_or(|(b, _)| value > *b) {
                let mut hand = [subset[0]; HAND_SIZE];
                hand.copy_from_slice(subset);
                best = Some((value, hand));
            }
        });

        best.ok_or(EvalError::NotEnoughCards(cards.len()))
    }

    /// The hand rank.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The hand tiebreaker values.
    pub fn tiebreaker(&self) -> &[u8] {
        &self.tiebreaker
    }
}

/// Compares two hand values, a greater value is a stronger hand.
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank).then_with(|| {
            let len = self.tiebreaker.len().max(other.tiebreaker.len());
            (0..len)
                .map(|i| {
                    let a = self.tiebreaker.get(i).copied().unwrap_or(0);
                    let b = other.tiebreaker.get(i).copied().unwrap_or(0);
                    a.cmp(&b)
                })
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for HandValue {}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreaker)
    }
}

/// Value and suit frequencies of a five cards hand.
#[derive(Debug)]
struct HandShape {
    /// Number of cards for each value, indexed by value - 2.
    counts: [u8; NUM_VALUES],
    /// Distinct values, highest first.
    values: Vec<u8>,
    flush: bool,
    straight: Option<u8>,
}

impl HandShape {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; NUM_VALUES];
        let mut suits = [0u8; 4];

        for card in cards {
            counts[value_index(card.value())] += 1;
            suits[card.suit().index()] += 1;
        }

        let values = (Rank::MIN_VALUE..=Rank::MAX_VALUE)
            .rev()
            .filter(|&v| counts[value_index(v)] > 0)
            .collect::<Vec<_>>();

        let flush = suits.iter().any(|&n| n as usize == HAND_SIZE);
        let straight = straight_high(&values);

        Self {
            counts,
            values,
            flush,
            straight,
        }
    }

    /// Values that appear exactly `n` times, highest first.
    fn with_count(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        self.values
            .iter()
            .copied()
            .filter(move |&v| self.counts[value_index(v)] == n)
    }

    /// Values not in `used`, highest first.
    fn kickers<'a>(&'a self, used: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        self.values.iter().copied().filter(move |v| !used.contains(v))
    }

    fn straight_flush(&self) -> Option<u8> {
        self.straight.filter(|_| self.flush)
    }
}

#[inline]
fn value_index(value: u8) -> usize {
    (value - Rank::MIN_VALUE) as usize
}

/// A classification rule, returns a value if the hand matches the rule.
type Rule = fn(&HandShape) -> Option<HandValue>;

/// Classification rules from the strongest to the weakest category, the first
/// matching rule gives the hand value. A hand that matches no rule is a high
/// card hand.
const RULES: [Rule; 9] = [
    royal_flush,
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    one_pair,
];

/// Classifies a hand that is known to have five cards.
fn classify_hand(cards: &[Card]) -> HandValue {
    let shape = HandShape::new(cards);
    RULES
        .iter()
        .find_map(|rule| rule(&shape))
        .unwrap_or_else(|| high_card(&shape))
}

fn royal_flush(shape: &HandShape) -> Option<HandValue> {
    shape
        .straight_flush()
        .filter(|&high| high == Rank::Ace.value())
        .map(|high| HandValue::new(HandRank::RoyalFlush, vec![high]))
}

fn straight_flush(shape: &HandShape) -> Option<HandValue> {
    shape
        .straight_flush()
        .map(|high| HandValue::new(HandRank::StraightFlush, vec![high]))
}

fn four_of_a_kind(shape: &HandShape) -> Option<HandValue> {
    let quad = shape.with_count(4).next()?;
    let mut tiebreaker = vec![quad];
    tiebreaker.extend(shape.kickers(&[quad]));
    Some(HandValue::new(HandRank::FourOfAKind, tiebreaker))
}

fn full_house(shape: &HandShape) -> Option<HandValue> {
    let triple = shape.with_count(3).next()?;
    let pair = shape.with_count(2).next()?;
    Some(HandValue::new(HandRank::FullHouse, vec![triple, pair]))
}

fn flush(shape: &HandShape) -> Option<HandValue> {
    shape
        .flush
        .then(|| HandValue::new(HandRank::Flush, shape.values.clone()))
}

fn straight(shape: &HandShape) -> Option<HandValue> {
    shape
        .straight
        .map(|high| HandValue::new(HandRank::Straight, vec![high]))
}

fn three_of_a_kind(shape: &HandShape) -> Option<HandValue> {
    let triple = shape.with_count(3).next()?;
    let mut tiebreaker = vec![triple];
    tiebreaker.extend(shape.kickers(&[triple]));
    Some(HandValue::new(HandRank::ThreeOfAKind, tiebreaker))
}

fn two_pair(shape: &HandShape) -> Option<HandValue> {
    let pairs = shape.with_count(2).collect::<Vec<_>>();
    if pairs.len() != 2 {
        return None;
    }

    let mut tiebreaker = pairs.clone();
    tiebreaker.extend(shape.kickers(&pairs));
    Some(HandValue::new(HandRank::TwoPair, tiebreaker))
}

fn one_pair(shape: &HandShape) -> Option<HandValue> {
    let mut pairs = shape.with_count(2);
    let pair = pairs.next()?;
    if pairs.next().is_some() {
        return None;
    }

    let mut tiebreaker = vec![pair];
    tiebreaker.extend(shape.kickers(&[pair]));
    Some(HandValue::new(HandRank::OnePair, tiebreaker))
}

fn high_card(shape: &HandShape) -> HandValue {
    HandValue::new(HandRank::HighCard, shape.values.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;
    use rand::prelude::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn classify(s: &str) -> HandValue {
        HandValue::classify(&cards(s)).unwrap()
    }

    fn deck() -> Vec<Card> {
        Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect()
    }

    fn assert_hand(s: &str, rank: HandRank, tiebreaker: &[u8]) {
        let v = classify(s);
        assert_eq!(v.rank(), rank, "{s}");
        assert_eq!(v.tiebreaker(), tiebreaker, "{s}");
    }

    #[test]
    fn classify_categories() {
        assert_hand("AH KH QH JH TH", HandRank::RoyalFlush, &[14]);
        assert_hand("9S 8S 7S 6S 5S", HandRank::StraightFlush, &[9]);
        assert_hand("9C 9D 9H 9S 2C", HandRank::FourOfAKind, &[9, 2]);
        assert_hand("2C 2D 2H 2S AC", HandRank::FourOfAKind, &[2, 14]);
        assert_hand("KC KD KH 3S 3C", HandRank::FullHouse, &[13, 3]);
        assert_hand("3C 3D 3H KS KC", HandRank::FullHouse, &[3, 13]);
        assert_hand("AH JH 8H 4H 2H", HandRank::Flush, &[14, 11, 8, 4, 2]);
        assert_hand("TC 9D 8H 7S 6C", HandRank::Straight, &[10]);
        assert_hand("AC KD QH JS TC", HandRank::Straight, &[14]);
        assert_hand("7C 7D 7H KS 2C", HandRank::ThreeOfAKind, &[7, 13, 2]);
        assert_hand("QC QD 5H 5S 9C", HandRank::TwoPair, &[12, 5, 9]);
        assert_hand("2C 2D 5H 5S AC", HandRank::TwoPair, &[5, 2, 14]);
        assert_hand("AC AD 9H 5S 2C", HandRank::OnePair, &[14, 9, 5, 2]);
        assert_hand("KC JD 8H 5S 2C", HandRank::HighCard, &[13, 11, 8, 5, 2]);
        assert_hand("AC KD QH JS 9C", HandRank::HighCard, &[14, 13, 12, 11, 9]);
    }

    #[test]
    fn wheel_is_five_high() {
        assert_hand("5C 4D 3H 2S AC", HandRank::Straight, &[5]);

        // A suited wheel is a straight flush and not a royal flush.
        assert_hand("AH 2H 3H 4H 5H", HandRank::StraightFlush, &[5]);

        let wheel = classify("5C 4D 3H 2S AC");
        let six_high = classify("6C 5D 4H 3S 2C");
        let broadway = classify("AC KD QH JS TC");
        assert!(wheel < six_high);
        assert!(six_high < broadway);
    }

    #[test]
    fn card_order_doesnt_matter() {
        let hands = ["QC QD 5H 5S 9C", "9C 5S QD 5H QC", "5H 9C QC 5S QD"];
        for h in hands {
            assert_hand(h, HandRank::TwoPair, &[12, 5, 9]);
        }
    }

    #[test]
    fn rules_precedence() {
        // A royal flush also matches the straight flush, flush and straight
        // rules, the first matching rule wins.
        let shape = HandShape::new(&cards("AH KH QH JH TH"));
        assert_eq!(royal_flush(&shape).unwrap().rank(), HandRank::RoyalFlush);
        assert_eq!(straight_flush(&shape).unwrap().rank(), HandRank::StraightFlush);
        assert_eq!(flush(&shape).unwrap().rank(), HandRank::Flush);
        assert_eq!(straight(&shape).unwrap().rank(), HandRank::Straight);
        assert!(four_of_a_kind(&shape).is_none());
        assert!(one_pair(&shape).is_none());

        // A full house also matches three of a kind and one pair.
        let shape = HandShape::new(&cards("KC KD KH 3S 3C"));
        assert!(royal_flush(&shape).is_none());
        assert!(four_of_a_kind(&shape).is_none());
        assert_eq!(full_house(&shape).unwrap().rank(), HandRank::FullHouse);
        assert_eq!(three_of_a_kind(&shape).unwrap().tiebreaker(), &[13, 3]);
        assert_eq!(one_pair(&shape).unwrap().tiebreaker(), &[3, 13]);

        // Two pair doesn't match the one pair rule.
        let shape = HandShape::new(&cards("QC QD 5H 5S 9C"));
        assert!(one_pair(&shape).is_none());
        assert!(two_pair(&shape).is_some());

        // One pair doesn't match the two pair rule.
        let shape = HandShape::new(&cards("AC AD 9H 5S 2C"));
        assert!(two_pair(&shape).is_none());
        assert!(one_pair(&shape).is_some());

        // The rules table goes from the strongest to the weakest rank.
        let ranks = [
            "AH KH QH JH TH",
            "9S 8S 7S 6S 5S",
            "9C 9D 9H 9S 2C",
            "KC KD KH 3S 3C",
            "AH JH 8H 4H 2H",
            "TC 9D 8H 7S 6C",
            "7C 7D 7H KS 2C",
            "QC QD 5H 5S 9C",
            "AC AD 9H 5S 2C",
        ];

        for (rule, hand) in RULES.iter().zip(ranks) {
            let shape = HandShape::new(&cards(hand));
            assert_eq!(rule(&shape), Some(classify(hand)), "{hand}");
        }
    }

    #[test]
    fn classify_wrong_size() {
        let all = cards("AH KH QH JH TH 9H 8H");
        for n in [0, 1, 4, 6, 7] {
            assert_eq!(HandValue::classify(&all[..n]), Err(EvalError::HandSize(n)));
        }
    }

    #[test]
    fn classify_all_hands_valid() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..1_000 {
            let hand = deck.choose_multiple(&mut rng, HAND_SIZE).copied().collect::<Vec<_>>();
            let v = HandValue::classify(&hand).unwrap();
            assert!((1..=10).contains(&v.rank().value()));
            assert!(!v.tiebreaker().is_empty());
        }
    }

    #[test]
    fn adjacent_categories() {
        let quads = classify("2C 2D 2H 2S 3C");
        let full_house = classify("AC AD AH KS KC");
        let flush = classify("AH KH QH JH 9H");
        let straight = classify("AC KD QH JS TC");
        let trips = classify("AC AD AH KS QC");

        assert!(quads > full_house);
        assert!(full_house > flush);
        assert!(flush > straight);
        assert!(straight > trips);

        assert!(classify("AH KH QH JH TH") > classify("KH QH JH TH 9H"));
        assert!(classify("KH QH JH TH 9H") > classify("AC AD AH AS KC"));
    }

    #[test]
    fn kickers_break_ties() {
        assert!(classify("AC AD 9H 5S 3C") > classify("AH AS 9C 5D 2C"));
        assert!(classify("QC QD 5H 5S KC") > classify("QH QS 5C 5D 9C"));
        assert!(classify("KC JD 8H 5S 3C") > classify("KD JC 8S 5H 2C"));

        // Suits don't matter.
        assert_eq!(classify("KC JD 8H 5S 2C"), classify("KD JC 8S 5H 2H"));
        assert_eq!(
            compare(&classify("KC JD 8H 5S 2C"), &classify("KD JC 8S 5H 2H")),
            Ordering::Equal
        );
    }

    #[test]
    fn missing_tiebreakers_are_zero() {
        let short = HandValue::new(HandRank::Straight, vec![5]);
        let padded = HandValue::new(HandRank::Straight, vec![5, 0]);
        let longer = HandValue::new(HandRank::Straight, vec![5, 1]);

        assert_eq!(compare(&short, &padded), Ordering::Equal);
        assert_eq!(short, padded);
        assert_eq!(compare(&short, &longer), Ordering::Less);
        assert_eq!(compare(&longer, &short), Ordering::Greater);

        // The rank is compared first.
        let flush = HandValue::new(HandRank::Flush, vec![7]);
        assert!(flush > HandValue::new(HandRank::Straight, vec![14, 14, 14]));
    }

    #[test]
    fn compare_is_total_order() {
        let deck = deck();
        let mut rng = StdRng::seed_from_u64(42);

        let values = (0..60)
            .map(|_| {
                let hand = deck.choose_multiple(&mut rng, HAND_SIZE).copied().collect::<Vec<_>>();
                HandValue::classify(&hand).unwrap()
            })
            .collect::<Vec<_>>();

        for a in &values {
            assert_eq!(compare(a, a), Ordering::Equal);

            for b in &values {
                assert_eq!(compare(a, b), compare(b, a).reverse());

                for c in &values {
                    if compare(a, b).is_le() && compare(b, c).is_le() {
                        assert!(compare(a, c).is_le());
                    }
                }
            }
        }

        // Sorting with the comparator gives non decreasing pairwise comparisons.
        let mut sorted = values.clone();
        sorted.sort_by(compare);
        assert!(sorted.windows(2).all(|w| compare(&w[0], &w[1]).is_le()));
    }

    #[test]
    fn best_of_seven() {
        let best = HandValue::best(&cards("AH KH QH JH TH 9D 8S")).unwrap();
        assert_eq!(best.rank(), HandRank::RoyalFlush);
        assert_eq!(best.tiebreaker(), &[14]);

        let (best, hand) = HandValue::best_with_hand(&cards("2C 9D AH 3S KH 4D 5C")).unwrap();
        assert_eq!(best, HandValue::new(HandRank::Straight, vec![5]));
        assert_eq!(HandValue::classify(&hand).unwrap(), best);

        // Two pairs on board with a higher pair in hand plays the two higher pairs.
        let best = HandValue::best(&cards("AC AD KH KS 2C 2D 9H")).unwrap();
        assert_eq!(best.rank(), HandRank::TwoPair);
        assert_eq!(best.tiebreaker(), &[14, 13, 9]);

        // Two triples make a full house with the higher triple.
        let best = HandValue::best(&cards("8C 8D 8H 4S 4C 4D JH")).unwrap();
        assert_eq!(best, HandValue::new(HandRank::FullHouse, vec![8, 4]));
    }

    #[test]
    fn best_of_five_and_six() {
        let five = cards("KC KD KH 3S 3C");
        assert_eq!(HandValue::best(&five).unwrap(), classify("KC KD KH 3S 3C"));

        let six = cards("KC KD 7H 3S 3C KH");
        assert_eq!(
            HandValue::best(&six).unwrap(),
            HandValue::new(HandRank::FullHouse, vec![13, 3])
        );
    }

    #[test]
    fn best_not_enough_cards() {
        let all = cards("AH KH QH JH");
        for n in 0..=4 {
            assert_eq!(HandValue::best(&all[..n]), Err(EvalError::NotEnoughCards(n)));
        }
    }

    #[test]
    fn best_is_maximum() {
        let mut deck = deck();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            deck.shuffle(&mut rng);
            let seven = &deck[..7];
            let (best, hand) = HandValue::best_with_hand(seven).unwrap();
            assert_eq!(HandValue::classify(&hand).unwrap(), best);
            assert!(hand.iter().all(|c| seven.contains(c)));

            for_each_combination(seven, HAND_SIZE, |subset| {
                assert!(HandValue::classify(subset).unwrap() <= best);
            });
        }
    }

    #[test]
    fn display() {
        assert_eq!(HandRank::RoyalFlush.to_string(), "Royal Flush");
        assert_eq!(HandRank::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(classify("QC QD 5H 5S 9C").to_string(), "Two Pair [12, 5, 9]");

        let values = HandRank::ranks().map(HandRank::value).collect::<Vec<_>>();
        assert_eq!(values, (1..=10u8).collect::<Vec<_>>());
    }
}
