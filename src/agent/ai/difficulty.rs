// Search settings
//
// Difficulty levels are named presets for the fixed search depth.

/// Search depth used when nothing else is configured
pub const DEFAULT_DEPTH: u32 = 3;

/// AI difficulty levels that map to search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// One ply: grabs material, ignores replies
    Easy,
    /// Two plies: sees the immediate recapture
    Medium,
    /// Three plies, the reference strength
    #[default]
    Hard,
}

impl Difficulty {
    pub fn search_depth(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => DEFAULT_DEPTH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Case-insensitive lookup by name ("easy", "Medium", ...)
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Parameters for one negamax search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search, at least 1
    pub depth: u32,
    /// Shuffle the root moves before searching so equal lines vary between games
    pub shuffle: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            shuffle: true,
        }
    }
}

impl From<Difficulty> for SearchConfig {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.search_depth(),
            ..Self::default()
        }
    }
}
