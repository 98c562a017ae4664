use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, HandRank};

/// Strategy pattern: each category detector recognizes its category and builds the rank.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: Ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        match analysis.straight_info.top_rank? {
            Rank::Ace => Some(analysis.build_rank(Category::RoyalFlush, &[Rank::Ace])),
            _ => None,
        }
    }
}

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_rank(Category::StraightFlush, &[top]))
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let quad = analysis.rank_groups.quad()?;
        let kicker = *analysis.rank_groups.kickers().first()?;
        Some(analysis.build_rank(Category::FourOfAKind, &[quad, kicker]))
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let trips = analysis.rank_groups.trips()?;
        let pair = *analysis.rank_groups.pairs().first()?;
        Some(analysis.build_rank(Category::FullHouse, &[trips, pair]))
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        analysis.suit_info.flush_suit?;
        // All 5 cards are kickers in flush ranking
        Some(analysis.build_rank(Category::Flush, &analysis.ranks))
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let top = analysis.straight_info.top_rank?;
        Some(analysis.build_rank(Category::Straight, &[top]))
    }
}

/// Three of a Kind: Three cards of the same rank, two unpaired kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let trips = analysis.rank_groups.trips()?;
        match *analysis.rank_groups.kickers().as_slice() {
            [k1, k2] => Some(analysis.build_rank(Category::ThreeOfAKind, &[trips, k1, k2])),
            _ => None,
        }
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            ([hi, lo], [k]) => Some(analysis.build_rank(Category::TwoPair, &[*hi, *lo, *k])),
            _ => None,
        }
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        match (&analysis.rank_groups.pairs()[..], &analysis.rank_groups.kickers()[..]) {
            ([p], [k1, k2, k3]) => Some(analysis.build_rank(Category::Pair, &[*p, *k1, *k2, *k3])),
            _ => None,
        }
    }
}

// ============================================================================
// Static detector list (in priority order); high card is the evaluator's floor.
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let xs = parse_cards(s).unwrap();
        HandAnalysis::new(&[xs[0], xs[1], xs[2], xs[3], xs[4]])
    }

    #[test]
    fn test_royal_flush_detector() {
        let a = analyze("As Ks Qs Js Ts");
        let rank = RoyalFlushDetector.detect(&a).unwrap();
        assert_eq!(rank.category, Category::RoyalFlush);
        assert!(RoyalFlushDetector.detect(&analyze("Ks Qs Js Ts 9s")).is_none());
    }

    #[test]
    fn test_straight_flush_detector() {
        let a = analyze("9h 8h 7h 6h 5h");
        let rank = StraightFlushDetector.detect(&a).unwrap();
        assert_eq!(rank.category, Category::StraightFlush);
        assert_eq!(rank.tiebreak(), &[Rank::Nine]);
    }

    #[test]
    fn test_steel_wheel_is_five_high() {
        let rank = StraightFlushDetector.detect(&analyze("Ad 2d 3d 4d 5d")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::Five]);
        assert!(RoyalFlushDetector.detect(&analyze("Ad 2d 3d 4d 5d")).is_none());
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let rank = FourOfAKindDetector.detect(&analyze("As Ah Ad Ac Ks")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::Ace, Rank::King]);
    }

    #[test]
    fn test_full_house_detector() {
        let rank = FullHouseDetector.detect(&analyze("Ks Kh Kd Qc Qs")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::King, Rank::Queen]);
        assert!(FullHouseDetector.detect(&analyze("Ks Kh Kd Qc Js")).is_none());
    }

    #[test]
    fn test_flush_detector() {
        let rank = FlushDetector.detect(&analyze("Ad Jd 9d 5d 2d")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::Ace, Rank::Jack, Rank::Nine, Rank::Five, Rank::Two]);
    }

    #[test]
    fn test_three_of_a_kind_detector() {
        let rank = ThreeOfAKindDetector.detect(&analyze("Js Jh Jd 9c 7s")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::Jack, Rank::Nine, Rank::Seven]);
        // trips with a pair is a full house, not trips
        assert!(ThreeOfAKindDetector.detect(&analyze("Js Jh Jd 9c 9s")).is_none());
    }

    #[test]
    fn test_two_pair_detector() {
        let rank = TwoPairDetector.detect(&analyze("As Ah Kd Kc Qs")).unwrap();
        assert_eq!(rank.tiebreak(), &[Rank::Ace, Rank::King, Rank::Queen]);
    }

    #[test]
    fn test_one_pair_detector() {
        let rank = OnePairDetector.detect(&analyze("Js Jh 9d 7c 3s")).unwrap();
        assert_eq!(rank.category, Category::Pair);
        assert!(OnePairDetector.detect(&analyze("Js Jh 9d 9c 3s")).is_none());
    }

    #[test]
    fn test_high_card_matches_nothing() {
        let a = analyze("As Kh Jd 9c 7s");
        assert!(DETECTORS.iter().all(|d| d.detect(&a).is_none()));
    }
}
