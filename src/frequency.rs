/// Occurrence count of every byte value in one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [usize; 256],
}

impl FrequencyTable {
    pub fn tabulate(bytes: &[u8]) -> Self {
        let mut counts = [0; 256];
        for b in bytes {
            counts[*b as usize] += 1;
        }
        FrequencyTable { counts }
    }

    pub fn count(&self, symbol: u8) -> usize {
        self.counts[symbol as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of byte values that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|c| **c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }

    /// Present symbols with their counts, in ascending byte order.
    pub fn symbols(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (0..=u8::MAX)
            .map(|symbol| (symbol, self.count(symbol)))
            .filter(|(_, count)| *count > 0)
    }
}
