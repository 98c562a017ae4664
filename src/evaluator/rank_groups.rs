use crate::cards::Rank;

/// Rank multiplicities of a five-card hand, biggest group first and higher
/// rank first within equal counts: `A A A K Q` is `[(A, 3), (K, 1), (Q, 1)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by_key(|&(rank, count)| core::cmp::Reverse((count, rank)));

        Self { groups }
    }

    /// Four-of-a-kind rank.
    pub fn quad(&self) -> Option<Rank> {
        self.of_count(4).next()
    }

    /// Highest three-of-a-kind rank.
    pub fn trips(&self) -> Option<Rank> {
        self.of_count(3).next()
    }

    /// Paired ranks, high to low.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_count(2).collect()
    }

    /// Unpaired ranks (kickers), high to low.
    pub fn kickers(&self) -> Vec<Rank> {
        self.of_count(1).collect()
    }

    fn of_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == n).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
