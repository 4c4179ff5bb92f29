use serde::{Deserialize, Serialize};

/// The three kinds of catalog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Book,
    Movie,
    Series,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Book, MediaKind::Movie, MediaKind::Series];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Book => "book",
            MediaKind::Movie => "movie",
            MediaKind::Series => "series",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" | "livro" => Ok(MediaKind::Book),
            "movie" | "film" | "filme" => Ok(MediaKind::Movie),
            "series" | "serie" | "série" => Ok(MediaKind::Series),
            other => Err(format!("Unknown media kind: {}", other)),
        }
    }
}

/// Identity of a catalog entry
/// Two entries with equal identity are duplicates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaIdentity {
    Book {
        title: String,
        author: String,
        isbn: String,
        release_year: i32,
    },
    Movie {
        title: String,
        director: String,
        release_year: i32,
    },
    Series {
        title: String,
        release_year: i32,
    },
}

impl MediaIdentity {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaIdentity::Book { .. } => MediaKind::Book,
            MediaIdentity::Movie { .. } => MediaKind::Movie,
            MediaIdentity::Series { .. } => MediaKind::Series,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MediaIdentity::Book { title, .. }
            | MediaIdentity::Movie { title, .. }
            | MediaIdentity::Series { title, .. } => title,
        }
    }
}

impl std::fmt::Display for MediaIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaIdentity::Book {
                title,
                author,
                isbn,
                release_year,
            } => write!(f, "book '{}' by {} ({}, ISBN {})", title, author, release_year, isbn),
            MediaIdentity::Movie {
                title,
                director,
                release_year,
            } => write!(f, "movie '{}' directed by {} ({})", title, director, release_year),
            MediaIdentity::Series {
                title,
                release_year,
            } => write!(f, "series '{}' ({})", title, release_year),
        }
    }
}
