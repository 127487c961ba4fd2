//! Mood vocabulary. A mood is a user-facing label over one or more movie
//! genres, matched with "any of" semantics.

/// TMDB movie genre ids referenced by the mood table
mod genre {
    pub const ACTION: u32 = 28;
    pub const ADVENTURE: u32 = 12;
    pub const ANIMATION: u32 = 16;
    pub const COMEDY: u32 = 35;
    pub const DOCUMENTARY: u32 = 99;
    pub const DRAMA: u32 = 18;
    pub const FAMILY: u32 = 10751;
    pub const HISTORY: u32 = 36;
    pub const HORROR: u32 = 27;
    pub const ROMANCE: u32 = 10749;
    pub const SCIENCE_FICTION: u32 = 878;
    pub const WAR: u32 = 10752;
}

/// A mood and the genres it expands to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub id: &'static str,
    pub genre_ids: &'static [u32],
}

pub const MOODS: &[Mood] = &[
    Mood {
        id: "Happy",
        genre_ids: &[genre::COMEDY],
    },
    Mood {
        id: "Romantic",
        genre_ids: &[genre::ROMANCE],
    },
    Mood {
        id: "Scary",
        genre_ids: &[genre::HORROR],
    },
    Mood {
        id: "Funny",
        genre_ids: &[genre::COMEDY],
    },
    Mood {
        id: "CalmCozy",
        genre_ids: &[genre::FAMILY, genre::ANIMATION, genre::DRAMA],
    },
    Mood {
        id: "InspiredTravel",
        genre_ids: &[genre::ADVENTURE, genre::DOCUMENTARY],
    },
    // TMDB has no Sport or Biography genre
    Mood {
        id: "MotivatedSport",
        genre_ids: &[genre::DOCUMENTARY, genre::HISTORY],
    },
    Mood {
        id: "NatureAnimals",
        genre_ids: &[genre::DOCUMENTARY],
    },
    Mood {
        id: "SadEmotional",
        genre_ids: &[genre::DRAMA, genre::WAR],
    },
    Mood {
        id: "ExcitedAction",
        genre_ids: &[genre::ACTION, genre::ADVENTURE, genre::SCIENCE_FICTION],
    },
];

/// Looks a mood up by key, trimmed and case-insensitive
pub fn find_mood(mood: &str) -> Option<&'static Mood> {
    let mood = mood.trim();
    if mood.is_empty() {
        return None;
    }
    MOODS.iter().find(|m| m.id.eq_ignore_ascii_case(mood))
}

pub fn is_valid_mood(mood: &str) -> bool {
    find_mood(mood).is_some()
}

/// Genre ids for a mood; absent for blank or unknown moods
pub fn resolve_genre_ids(mood: &str) -> Option<&'static [u32]> {
    find_mood(mood).map(|m| m.genre_ids)
}

/// Every known mood key, in table order
pub fn supported_moods() -> Vec<&'static str> {
    MOODS.iter().map(|m| m.id).collect()
}
