use crate::cards::Rank;

/// Bits for A-2-3-4-5, where the ace plays low.
const WHEEL_MASK: u16 = (1 << 14) | (1 << 5) | (1 << 4) | (1 << 3) | (1 << 2);

/// Whether five ranks form a straight, and the straight's top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Detect a straight from 5 ranks in any order.
    /// Handles both regular straights and the wheel (A-2-3-4-5), whose top rank is Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        // One bit per rank value; duplicates collapse.
        let mask: u16 = ranks.iter().fold(0, |m, r| m | (1 << r.value()));
        if mask.count_ones() != 5 {
            return StraightInfo { top_rank: None };
        }

        let low = mask.trailing_zeros();
        if mask >> low == 0b1_1111 {
            return StraightInfo { top_rank: Rank::from_value((low + 4) as u8) };
        }
        if mask == WHEEL_MASK {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        StraightInfo { top_rank: None }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_broadway() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_wheel() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::Five));
    }

    #[test]
    fn test_six_high_is_not_wheel() {
        let ranks = [Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::Six));
    }

    #[test]
    fn test_no_wraparound() {
        let ranks = [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three];
        assert!(!StraightInfo::detect(&ranks).is_straight());
    }

    #[test]
    fn test_not_straight_pair() {
        let ranks = [Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack];
        assert!(!StraightInfo::detect(&ranks).is_straight());
    }

    #[test]
    fn test_unsorted_input() {
        let ranks = [Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::King));
    }
}
