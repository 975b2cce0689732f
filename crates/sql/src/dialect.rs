use tessera_connector::catalog::id;

/// Adapters whose drivers take numbered `$N` placeholders.
const INDEXED_PLACEHOLDER_IDS: &[u32] = &[
    id::POSTGRESQL,
    id::SUPABASEDB,
    id::NEON,
    id::HYDRA,
    id::COCKROACHDB,
];

/// Placeholder syntax a SQL dialect expects for bound arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// One-based numbered placeholders (`$1`, `$2`, ...).
    Indexed,
    /// Positional `?` placeholders.
    Question,
}

impl PlaceholderStyle {
    /// The style for a cataloged adapter id.
    ///
    /// The postgres wire family takes numbered placeholders; every other
    /// dialect takes `?`.
    pub fn for_adapter(adapter_id: u32) -> Self {
        if INDEXED_PLACEHOLDER_IDS.contains(&adapter_id) {
            Self::Indexed
        } else {
            Self::Question
        }
    }

    /// Render the placeholder for the one-based argument `index`.
    pub fn token(self, index: usize) -> String {
        match self {
            Self::Indexed => format!("${index}"),
            Self::Question => "?".to_string(),
        }
    }
}
