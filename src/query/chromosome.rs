use std::fmt;

/// Canonical human chromosome labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chromosome {
    Chr1,
    Chr2,
    Chr3,
    Chr4,
    Chr5,
    Chr6,
    Chr7,
    Chr8,
    Chr9,
    Chr10,
    Chr11,
    Chr12,
    Chr13,
    Chr14,
    Chr15,
    Chr16,
    Chr17,
    Chr18,
    Chr19,
    Chr20,
    Chr21,
    Chr22,
    X,
    Y,
    Mt,
}

impl Chromosome {
    /// All chromosomes in karyotype order.
    pub const ALL: [Chromosome; 25] = [
        Chromosome::Chr1,
        Chromosome::Chr2,
        Chromosome::Chr3,
        Chromosome::Chr4,
        Chromosome::Chr5,
        Chromosome::Chr6,
        Chromosome::Chr7,
        Chromosome::Chr8,
        Chromosome::Chr9,
        Chromosome::Chr10,
        Chromosome::Chr11,
        Chromosome::Chr12,
        Chromosome::Chr13,
        Chromosome::Chr14,
        Chromosome::Chr15,
        Chromosome::Chr16,
        Chromosome::Chr17,
        Chromosome::Chr18,
        Chromosome::Chr19,
        Chromosome::Chr20,
        Chromosome::Chr21,
        Chromosome::Chr22,
        Chromosome::X,
        Chromosome::Y,
        Chromosome::Mt,
    ];

    /// Order used for suffix matching. Two-character labels come first so
    /// `chr11` resolves to 11 rather than 1.
    pub(crate) const SUFFIX_ORDER: [Chromosome; 25] = [
        Chromosome::Chr10,
        Chromosome::Chr11,
        Chromosome::Chr12,
        Chromosome::Chr13,
        Chromosome::Chr14,
        Chromosome::Chr15,
        Chromosome::Chr16,
        Chromosome::Chr17,
        Chromosome::Chr18,
        Chromosome::Chr19,
        Chromosome::Chr20,
        Chromosome::Chr21,
        Chromosome::Chr22,
        Chromosome::Mt,
        Chromosome::Chr1,
        Chromosome::Chr2,
        Chromosome::Chr3,
        Chromosome::Chr4,
        Chromosome::Chr5,
        Chromosome::Chr6,
        Chromosome::Chr7,
        Chromosome::Chr8,
        Chromosome::Chr9,
        Chromosome::X,
        Chromosome::Y,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Chromosome::Chr1 => "1",
            Chromosome::Chr2 => "2",
            Chromosome::Chr3 => "3",
            Chromosome::Chr4 => "4",
            Chromosome::Chr5 => "5",
            Chromosome::Chr6 => "6",
            Chromosome::Chr7 => "7",
            Chromosome::Chr8 => "8",
            Chromosome::Chr9 => "9",
            Chromosome::Chr10 => "10",
            Chromosome::Chr11 => "11",
            Chromosome::Chr12 => "12",
            Chromosome::Chr13 => "13",
            Chromosome::Chr14 => "14",
            Chromosome::Chr15 => "15",
            Chromosome::Chr16 => "16",
            Chromosome::Chr17 => "17",
            Chromosome::Chr18 => "18",
            Chromosome::Chr19 => "19",
            Chromosome::Chr20 => "20",
            Chromosome::Chr21 => "21",
            Chromosome::Chr22 => "22",
            Chromosome::X => "X",
            Chromosome::Y => "Y",
            Chromosome::Mt => "MT",
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_suffix_order_covers_all() {
        let all: HashSet<_> = Chromosome::ALL.into_iter().collect();
        let ordered: HashSet<_> = Chromosome::SUFFIX_ORDER.into_iter().collect();
        assert_eq!(all, ordered);
    }

    #[test]
    fn test_longer_labels_precede_their_suffixes() {
        for (i, c) in Chromosome::SUFFIX_ORDER.iter().enumerate() {
            for later in &Chromosome::SUFFIX_ORDER[i + 1..] {
                assert!(
                    !later.label().ends_with(c.label()) || later.label() == c.label(),
                    "{} must be tried before {}",
                    later,
                    c
                );
            }
        }
    }
}
