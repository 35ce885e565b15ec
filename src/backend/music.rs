use std::fmt::Formatter;

use rusqlite::Row;

use crate::backend::error::OrganizerError;
use crate::backend::error::Result;

pub type SongId = usize;
pub type PlaylistId = usize;

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub album: String,
    pub year: Option<i64>,
}

impl Song {
    /// Expects the column order `id, name, artist, genre, album, year`.
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            artist: row.get(2)?,
            genre: row.get(3)?,
            album: row.get(4)?,
            year: row.get(5)?,
        })
    }

    pub fn fields(&self) -> SongFields {
        SongFields {
            name: self.name.clone(),
            artist: self.artist.clone(),
            genre: self.genre.clone(),
            album: self.album.clone(),
            year: self.year,
        }
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} [{}]", self.name, self.artist, self.genre)
    }
}

/// Editable columns of a song, as typed into the detail form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFields {
    pub name: String,
    pub artist: String,
    pub genre: String,
    pub album: String,
    pub year: Option<i64>,
}

impl SongFields {
    pub fn new(name: impl Into<String>, artist: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
            ..Self::default()
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_year(mut self, year: Option<i64>) -> Self {
        self.year = year;
        self
    }

    /// Trim every text column and reject an empty name.
    pub fn validated(&self) -> Result<SongFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(OrganizerError::Validation("Song name cannot be empty."));
        }

        Ok(SongFields {
            name: name.to_string(),
            artist: self.artist.trim().to_string(),
            genre: self.genre.trim().to_string(),
            album: self.album.trim().to_string(),
            year: self.year,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub created_at: String,
}

impl Playlist {
    pub fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

impl std::fmt::Display for Playlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub fn validate_playlist_name(name: &str) -> Result<&str> {
    match name.trim() {
        "" => Err(OrganizerError::Validation("Playlist name cannot be empty.")),
        trimmed => Ok(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validated_trims_every_text_field() {
        let fields = SongFields::new("  Song 2 ", " Blur\t", " britpop ")
            .with_album(" Blur ")
            .with_year(Some(1997))
            .validated()
            .unwrap();

        assert_eq!(fields.name, "Song 2");
        assert_eq!(fields.artist, "Blur");
        assert_eq!(fields.genre, "britpop");
        assert_eq!(fields.album, "Blur");
        assert_eq!(fields.year, Some(1997));
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let err = SongFields::new(" \t\n ", "Artist", "Genre").validated().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn playlist_name_validation() {
        assert_eq!(validate_playlist_name("  Road Trip ").unwrap(), "Road Trip");
        assert!(validate_playlist_name("   ").unwrap_err().is_validation());
    }

    #[test]
    fn song_display_matches_list_format() {
        let song = Song {
            id: 1,
            name: "Teardrop".to_string(),
            artist: "Massive Attack".to_string(),
            genre: "Trip hop".to_string(),
            album: String::new(),
            year: None,
        };
        assert_eq!(song.to_string(), "Teardrop — Massive Attack [Trip hop]");
    }
}
