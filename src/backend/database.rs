use std::path::Path;
use std::path::PathBuf;

use rusqlite::ffi;
use rusqlite::params;
use rusqlite::Connection;
use rusqlite::OptionalExtension;
use tracing::debug;

use crate::backend::error::OrganizerError;
use crate::backend::error::Result;
use crate::backend::music::validate_playlist_name;
use crate::backend::music::Playlist;
use crate::backend::music::PlaylistId;
use crate::backend::music::Song;
use crate::backend::music::SongFields;
use crate::backend::music::SongId;
use crate::backend::sql::*;

/// Handle to the library file. Each call opens its own connection and drops
/// it before returning, so the handle itself is just a path.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Point at `file_name` inside `root_dir` and make sure the tables exist.
    pub fn create_or_load(root_dir: &Path, file_name: &str) -> Result<Self> {
        let database = Self::new(root_dir.join(file_name));
        database.initialize()?;
        Ok(database)
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    fn connect(&self) -> Result<Connection> {
        // Automagically creates the file if it does not exist
        let connection = Connection::open(&self.path)?;
        // Off by default in SQLite, and the cascades depend on it.
        connection.pragma_update(None, "foreign_keys", true)?;
        Ok(connection)
    }

    /// Create any missing tables. Existing data is left alone.
    pub fn initialize(&self) -> Result<()> {
        let connection = self.connect()?;
        connection.execute(CREATE_SONG_TABLE, [])?;
        connection.execute(CREATE_PLAYLIST_TABLE, [])?;
        connection.execute(CREATE_PLAYLIST_ENTRIES_TABLE, [])?;
        debug!(path = ?self.path, "schema ready");
        Ok(())
    }

    pub fn create_song(&self, fields: &SongFields) -> Result<SongId> {
        let fields = fields.validated()?;
        let connection = self.connect()?;
        connection.execute(
            INSERT_SONG,
            params![fields.name, fields.artist, fields.genre, fields.album, fields.year],
        )?;

        let id: SongId = row_id(connection.last_insert_rowid())?;
        debug!(id, name = %fields.name, "created song");
        Ok(id)
    }

    pub fn list_songs(&self) -> Result<Vec<Song>> {
        self.select_songs(SELECT_ALL_SONGS, [])
    }

    pub fn get_song(&self, song_id: SongId) -> Result<Option<Song>> {
        let connection = self.connect()?;
        Ok(connection
            .query_row(SELECT_SONG_BY_ID, params![song_id], Song::from_row)
            .optional()?)
    }

    /// Overwrite every column of the song. A missing id changes nothing.
    pub fn update_song(&self, song_id: SongId, fields: &SongFields) -> Result<()> {
        let fields = fields.validated()?;
        let connection = self.connect()?;
        let changed = connection.execute(
            UPDATE_SONG,
            params![fields.name, fields.artist, fields.genre, fields.album, fields.year, song_id],
        )?;
        debug!(song_id, changed, "updated song");
        Ok(())
    }

    /// Memberships referencing the song go with it.
    pub fn delete_song(&self, song_id: SongId) -> Result<()> {
        let connection = self.connect()?;
        let changed = connection.execute(REMOVE_SONG, params![song_id])?;
        debug!(song_id, changed, "deleted song");
        Ok(())
    }

    /// Case-insensitive substring match on the song name. A blank query matches everything.
    pub fn search_songs_by_name(&self, query: &str) -> Result<Vec<Song>> {
        self.select_songs(SELECT_SONGS_BY_NAME, params![like_pattern(query)])
    }

    /// Case-insensitive substring match on the genre. A blank query matches everything.
    pub fn search_songs_by_genre(&self, query: &str) -> Result<Vec<Song>> {
        self.select_songs(SELECT_SONGS_BY_GENRE, params![like_pattern(query)])
    }

    pub fn create_playlist(&self, name: &str) -> Result<PlaylistId> {
        let name = validate_playlist_name(name)?;
        let connection = self.connect()?;
        match connection.execute(INSERT_PLAYLIST, params![name]) {
            Ok(_) => {
                let id: PlaylistId = row_id(connection.last_insert_rowid())?;
                debug!(id, name, "created playlist");
                Ok(id)
            }
            Err(error) if is_unique_violation(&error) => {
                Err(OrganizerError::DuplicatePlaylist(name.to_string()))
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn get_playlist(&self, playlist_id: PlaylistId) -> Result<Option<Playlist>> {
        let connection = self.connect()?;
        Ok(connection
            .query_row(SELECT_PLAYLIST_BY_ID, params![playlist_id], Playlist::from_row)
            .optional()?)
    }

    pub fn list_playlists(&self) -> Result<Vec<Playlist>> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(SELECT_ALL_PLAYLISTS)?;
        let playlists = statement
            .query_map([], Playlist::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(playlists)
    }

    /// Erase a playlist along with its entries
    pub fn delete_playlist(&self, playlist_id: PlaylistId) -> Result<()> {
        let connection = self.connect()?;
        let changed = connection.execute(REMOVE_PLAYLIST, params![playlist_id])?;
        debug!(playlist_id, changed, "deleted playlist");
        Ok(())
    }

    /// Returns whether an entry was added. Re-adding, or naming an id that
    /// does not exist, leaves the table as it was.
    pub fn add_song_to_playlist(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<bool> {
        let connection = self.connect()?;
        let added = connection.execute(INSERT_ENTRY, params![playlist_id, song_id])? > 0;
        debug!(playlist_id, song_id, added, "add song to playlist");
        Ok(added)
    }

    pub fn remove_song_from_playlist(&self, playlist_id: PlaylistId, song_id: SongId) -> Result<()> {
        let connection = self.connect()?;
        let changed = connection.execute(REMOVE_SONG_FROM_PLAYLIST, params![playlist_id, song_id])?;
        debug!(playlist_id, song_id, changed, "removed song from playlist");
        Ok(())
    }

    pub fn list_songs_for_playlist(&self, playlist_id: PlaylistId) -> Result<Vec<Song>> {
        self.select_songs(SELECT_ALL_SONGS_IN_PLAYLIST, params![playlist_id])
    }

    fn select_songs<P: rusqlite::Params>(&self, query: &str, params: P) -> Result<Vec<Song>> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(query)?;
        let songs = statement
            .query_map(params, Song::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(songs)
    }
}

/// A rowid as an id. Negative rowids do not fit and are an error.
fn row_id(rowid: i64) -> Result<usize> {
    usize::try_from(rowid).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, rowid).into())
}

/// Escape LIKE wildcards so the trimmed query is matched literally.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len());
    for c in query.trim().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern
}

fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
