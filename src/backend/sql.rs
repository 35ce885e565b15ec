pub const CREATE_SONG_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS Songs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        artist TEXT NOT NULL DEFAULT '',
        genre TEXT NOT NULL DEFAULT '',
        album TEXT NOT NULL DEFAULT '',
        year INTEGER
    );
";

pub const CREATE_PLAYLIST_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS Playlists (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE CHECK (length(trim(name)) > 0),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );
";

pub const CREATE_PLAYLIST_ENTRIES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS Entries (
        playlist_id INTEGER NOT NULL,
        song_id INTEGER NOT NULL,
        PRIMARY KEY (playlist_id, song_id),
        FOREIGN KEY (playlist_id) REFERENCES Playlists(id) ON DELETE CASCADE,
        FOREIGN KEY (song_id) REFERENCES Songs(id) ON DELETE CASCADE
    );
";

pub const INSERT_SONG: &str = "
    INSERT INTO Songs (name, artist, genre, album, year)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

pub const UPDATE_SONG: &str = "
    UPDATE Songs
    SET name = ?1, artist = ?2, genre = ?3, album = ?4, year = ?5
    WHERE id = ?6
";

pub const INSERT_PLAYLIST: &str = "INSERT INTO Playlists (name) VALUES (?1)";

// Both ids must resolve, so a stale id never trips the foreign keys.
pub const INSERT_ENTRY: &str = "
    INSERT OR IGNORE INTO Entries (playlist_id, song_id)
    SELECT ?1, ?2
    WHERE EXISTS (SELECT 1 FROM Playlists WHERE id = ?1)
      AND EXISTS (SELECT 1 FROM Songs WHERE id = ?2)
";

pub const SELECT_ALL_SONGS: &str = "
    SELECT id, name, artist, genre, album, year FROM Songs
    ORDER BY name COLLATE NOCASE, id
";

pub const SELECT_SONGS_BY_NAME: &str = "
    SELECT id, name, artist, genre, album, year FROM Songs
    WHERE name LIKE '%' || ?1 || '%' ESCAPE '\\'
    ORDER BY name COLLATE NOCASE, id
";

pub const SELECT_SONGS_BY_GENRE: &str = "
    SELECT id, name, artist, genre, album, year FROM Songs
    WHERE genre LIKE '%' || ?1 || '%' ESCAPE '\\'
    ORDER BY name COLLATE NOCASE, id
";

pub const SELECT_SONG_BY_ID: &str = "
    SELECT id, name, artist, genre, album, year FROM Songs WHERE id = ?1
";

pub const SELECT_ALL_SONGS_IN_PLAYLIST: &str = "
    SELECT Songs.id, Songs.name, Songs.artist, Songs.genre, Songs.album, Songs.year
    FROM Songs
    INNER JOIN Entries ON Songs.id = Entries.song_id
    WHERE Entries.playlist_id = ?1
    ORDER BY Songs.name COLLATE NOCASE, Songs.id
";

pub const SELECT_ALL_PLAYLISTS: &str = "
    SELECT id, name, created_at FROM Playlists
    ORDER BY name COLLATE NOCASE, id
";

pub const SELECT_PLAYLIST_BY_ID: &str = "SELECT id, name, created_at FROM Playlists WHERE id = ?1";
pub const REMOVE_SONG: &str = "DELETE FROM Songs WHERE id = ?1";
pub const REMOVE_PLAYLIST: &str = "DELETE FROM Playlists WHERE id = ?1";
pub const REMOVE_SONG_FROM_PLAYLIST: &str = "DELETE FROM Entries WHERE playlist_id = ?1 AND song_id = ?2";
