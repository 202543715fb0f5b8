use std::fmt;

/// Supported reference genome assemblies (UCSC naming)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Hg38,
    Hg19,
    Hg18,
    Hg17,
    Hg16,
}

/// UCSC build to GRC/NCBI alias.
const ASSEMBLY_ALIASES: [(Reference, &str); 5] = [
    (Reference::Hg38, "GRCh38"),
    (Reference::Hg19, "GRCh37"),
    (Reference::Hg18, "NCBI36"),
    (Reference::Hg17, "NCBI35"),
    (Reference::Hg16, "NCBI34"),
];

impl Reference {
    pub const ALL: [Reference; 5] = [
        Reference::Hg38,
        Reference::Hg19,
        Reference::Hg18,
        Reference::Hg17,
        Reference::Hg16,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Reference::Hg38 => "hg38",
            Reference::Hg19 => "hg19",
            Reference::Hg18 => "hg18",
            Reference::Hg17 => "hg17",
            Reference::Hg16 => "hg16",
        }
    }

    /// Canonical GRC/NCBI name, e.g. `GRCh37` for hg19.
    pub fn alias(&self) -> &'static str {
        ASSEMBLY_ALIASES
            .iter()
            .find(|(r, _)| r == self)
            .map(|(_, alias)| *alias)
            .unwrap_or_else(|| self.name())
    }

    pub(crate) fn aliases() -> impl Iterator<Item = (Reference, &'static str)> {
        ASSEMBLY_ALIASES.into_iter()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
