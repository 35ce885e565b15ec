use iced::widget::scrollable;
use iced::widget::text;
use iced::widget::Column;
use iced::widget::Row;
use iced::Length;
use iced::Task;

use crate::frontend::application::Page;
use crate::frontend::message::Message;
use crate::frontend::message::Notice;
use crate::frontend::widgets::OrganizerWidget;

use crate::backend::database::Database;
use crate::backend::music::Playlist;
use crate::backend::music::PlaylistId;
use crate::backend::music::Song;
use crate::backend::music::SongId;

pub struct PlaylistsPage {
    database: Database,
    playlists: Vec<Playlist>,
    selected_playlist: Option<PlaylistId>,
    songs: Vec<Song>,
    selected_song: Option<SongId>,
    new_name: String,
}

impl PlaylistsPage {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            playlists: Vec::new(),
            selected_playlist: None,
            songs: Vec::new(),
            selected_song: None,
            new_name: String::new(),
        }
    }

    /// Reload the playlist list. The selection is dropped only once the
    /// reload succeeds.
    fn refresh_playlists(&mut self) -> Task<Message> {
        match self.database.list_playlists() {
            Ok(playlists) => {
                self.selected_playlist = None;
                self.songs.clear();
                self.selected_song = None;
                self.playlists = playlists;
                Task::none()
            }
            Err(e) => Message::Notify(Notice::failure("Failed to load playlists", &e)).task(),
        }
    }

    fn refresh_playlist_songs(&mut self) -> Task<Message> {
        let Some(playlist_id) = self.selected_playlist else {
            self.songs.clear();
            self.selected_song = None;
            return Task::none();
        };

        match self.database.list_songs_for_playlist(playlist_id) {
            Ok(songs) => {
                if !songs.iter().any(|song| Some(song.id) == self.selected_song) {
                    self.selected_song = None;
                }
                self.songs = songs;
                Task::none()
            }
            Err(e) => Message::Notify(Notice::failure("Failed to load playlist songs", &e)).task(),
        }
    }

    fn select_playlist(&mut self, playlist_id: PlaylistId) -> Task<Message> {
        match self.database.get_playlist(playlist_id) {
            Ok(Some(_)) => {
                self.selected_playlist = Some(playlist_id);
                self.selected_song = None;
                self.refresh_playlist_songs()
            }
            // Deleted behind our back
            Ok(None) => self.refresh_playlists(),
            Err(e) => Message::Notify(Notice::failure("Failed to load playlist", &e)).task(),
        }
    }

    fn create_playlist(&mut self) -> Task<Message> {
        match self.database.create_playlist(&self.new_name) {
            Ok(_) => {
                self.new_name.clear();
                self.refresh_playlists()
            }
            Err(e) => Message::Notify(Notice::failure("Failed to create playlist", &e)).task(),
        }
    }

    fn delete_playlist(&mut self, playlist_id: PlaylistId) -> Task<Message> {
        match self.database.delete_playlist(playlist_id) {
            Ok(()) => self.refresh_playlists(),
            Err(e) => Message::Notify(Notice::failure("Failed to delete playlist", &e)).task(),
        }
    }

    fn add_song(&mut self, song_id: Option<SongId>) -> Task<Message> {
        let Some(playlist_id) = self.selected_playlist else {
            return Message::Notify(Notice::info("Select Playlist", "Select a playlist first.")).task();
        };
        let Some(song_id) = song_id else {
            return Message::Notify(Notice::info("Select Song", "Select a song from the Library tab.")).task();
        };

        match self.database.add_song_to_playlist(playlist_id, song_id) {
            Ok(_) => self.refresh_playlist_songs(),
            Err(e) => Message::Notify(Notice::failure("Failed to add song to playlist", &e)).task(),
        }
    }

    fn ask_to_remove_song(&self) -> Task<Message> {
        let Some(playlist_id) = self.selected_playlist else {
            return Message::Notify(Notice::info("Select Playlist", "Select a playlist first.")).task();
        };
        let Some(song_id) = self.selected_song else {
            return Message::Notify(Notice::info("Select Song", "Select a song from the playlist list.")).task();
        };

        Message::confirm(
            "Remove this song from the playlist?",
            Message::RemoveSongFromPlaylistConfirmed(playlist_id, song_id),
        )
        .task()
    }

    fn remove_song(&mut self, playlist_id: PlaylistId, song_id: SongId) -> Task<Message> {
        match self.database.remove_song_from_playlist(playlist_id, song_id) {
            Ok(()) => self.refresh_playlist_songs(),
            Err(e) => Message::Notify(Notice::failure("Failed to remove song from playlist", &e)).task(),
        }
    }

    fn playlist_pane(&self) -> Column<'_, Message> {
        let mut list = Column::new().spacing(2);
        for playlist in &self.playlists {
            list = list.push(
                OrganizerWidget::list_entry(playlist.to_string(), self.selected_playlist == Some(playlist.id))
                    .on_press(Message::SelectPlaylist(playlist.id)),
            );
        }

        Column::new()
            .spacing(10)
            .width(Length::FillPortion(1))
            .push(OrganizerWidget::header("Playlists"))
            .push(scrollable(list).height(Length::Fill))
            .push(
                OrganizerWidget::search_bar("New Playlist", &self.new_name)
                    .on_input(Message::PlaylistNameInput)
                    .on_submit(Message::CreatePlaylist),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(OrganizerWidget::inline_button("Create Playlist").on_press(Message::CreatePlaylist))
                    .push(OrganizerWidget::inline_button("Delete Playlist").on_press(Message::DeletePlaylist)),
            )
    }

    fn song_pane(&self) -> Column<'_, Message> {
        let mut list = Column::new().spacing(2);
        for song in &self.songs {
            list = list.push(
                OrganizerWidget::list_entry(song.to_string(), self.selected_song == Some(song.id))
                    .on_press(Message::SelectPlaylistSong(song.id)),
            );
        }

        let created = self
            .playlists
            .iter()
            .find(|playlist| Some(playlist.id) == self.selected_playlist)
            .map(|playlist| format!("Created {}", playlist.created_at))
            .unwrap_or_default();

        Column::new()
            .spacing(10)
            .width(Length::FillPortion(2))
            .push(OrganizerWidget::header("Songs in Selected Playlist"))
            .push(text(created))
            .push(scrollable(list).height(Length::Fill))
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        OrganizerWidget::inline_button("Add Selected Library Song to Playlist")
                            .on_press(Message::AddLibrarySongToPlaylist),
                    )
                    .push(
                        OrganizerWidget::inline_button("Remove Selected Song from Playlist")
                            .on_press(Message::RemoveSongFromPlaylist),
                    ),
            )
    }
}

impl Page for PlaylistsPage {
    fn view(&self) -> Column<'_, Message> {
        Column::new().push(
            Row::new()
                .spacing(20)
                .height(Length::Fill)
                .push(self.playlist_pane())
                .push(self.song_pane()),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh => self.refresh_playlists(),
            Message::LibraryChanged => self.refresh_playlist_songs(),
            Message::PlaylistNameInput(text) => {
                self.new_name = text;
                Task::none()
            }
            Message::CreatePlaylist => self.create_playlist(),
            Message::SelectPlaylist(playlist_id) => self.select_playlist(playlist_id),
            Message::DeletePlaylist => match self.selected_playlist {
                Some(playlist_id) => Message::confirm(
                    "Delete this playlist and its song links?",
                    Message::DeletePlaylistConfirmed(playlist_id),
                )
                .task(),
                None => Message::Notify(Notice::info("Select Playlist", "Please select a playlist to delete.")).task(),
            },
            Message::DeletePlaylistConfirmed(playlist_id) => self.delete_playlist(playlist_id),
            Message::SelectPlaylistSong(song_id) => {
                self.selected_song = Some(song_id);
                Task::none()
            }
            Message::AddSongToPlaylist(song_id) => self.add_song(song_id),
            Message::RemoveSongFromPlaylist => self.ask_to_remove_song(),
            Message::RemoveSongFromPlaylistConfirmed(playlist_id, song_id) => self.remove_song(playlist_id, song_id),
            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::music::SongFields;
    use tempfile::TempDir;

    fn page() -> (TempDir, Database, PlaylistsPage) {
        let dir = TempDir::new().unwrap();
        let database = Database::create_or_load(dir.path(), "library.db").unwrap();
        let page = PlaylistsPage::new(database.clone());
        (dir, database, page)
    }

    fn create(page: &mut PlaylistsPage, name: &str) -> PlaylistId {
        let _ = page.update(Message::PlaylistNameInput(name.to_string()));
        let _ = page.update(Message::CreatePlaylist);
        page.playlists.iter().find(|p| p.name == name.trim()).unwrap().id
    }

    #[test]
    fn create_clears_name_and_lists_playlist() {
        let (_dir, _database, mut page) = page();
        create(&mut page, " Evening ");

        assert!(page.new_name.is_empty());
        assert_eq!(page.playlists.len(), 1);
    }

    #[test]
    fn duplicate_create_keeps_typed_name() {
        let (_dir, _database, mut page) = page();
        create(&mut page, "Dup");

        let _ = page.update(Message::PlaylistNameInput("Dup".into()));
        let _ = page.update(Message::CreatePlaylist);

        assert_eq!(page.new_name, "Dup");
        assert_eq!(page.playlists.len(), 1);
    }

    #[test]
    fn add_and_remove_selected_song() {
        let (_dir, database, mut page) = page();
        let playlist = create(&mut page, "Mix");
        let song = database.create_song(&SongFields::new("Track", "", "")).unwrap();

        let _ = page.update(Message::SelectPlaylist(playlist));
        let _ = page.update(Message::AddSongToPlaylist(Some(song)));
        let _ = page.update(Message::AddSongToPlaylist(Some(song)));
        assert_eq!(page.songs.len(), 1);

        let _ = page.update(Message::SelectPlaylistSong(song));
        let _ = page.update(Message::RemoveSongFromPlaylistConfirmed(playlist, song));
        assert!(page.songs.is_empty());
        assert_eq!(page.selected_song, None);
    }

    #[test]
    fn library_change_drops_deleted_songs() {
        let (_dir, database, mut page) = page();
        let playlist = create(&mut page, "Mix");
        let song = database.create_song(&SongFields::new("Gone", "", "")).unwrap();
        let _ = page.update(Message::SelectPlaylist(playlist));
        let _ = page.update(Message::AddSongToPlaylist(Some(song)));

        database.delete_song(song).unwrap();
        let _ = page.update(Message::LibraryChanged);

        assert!(page.songs.is_empty());
        assert_eq!(page.selected_playlist, Some(playlist));
    }

    #[test]
    fn delete_playlist_resets_selection() {
        let (_dir, _database, mut page) = page();
        let playlist = create(&mut page, "Short-lived");
        let _ = page.update(Message::SelectPlaylist(playlist));

        let _ = page.update(Message::DeletePlaylistConfirmed(playlist));

        assert!(page.playlists.is_empty());
        assert_eq!(page.selected_playlist, None);
    }

    #[test]
    fn failed_reload_keeps_selection() {
        let (_dir, database, mut page) = page();
        let playlist = create(&mut page, "Mix");
        let song = database.create_song(&SongFields::new("Track", "", "")).unwrap();
        let _ = page.update(Message::SelectPlaylist(playlist));
        let _ = page.update(Message::AddSongToPlaylist(Some(song)));
        let _ = page.update(Message::SelectPlaylistSong(song));

        rusqlite::Connection::open(database.path())
            .unwrap()
            .execute_batch("DROP TABLE Playlists;")
            .unwrap();
        let _ = page.update(Message::Refresh);

        assert_eq!(page.selected_playlist, Some(playlist));
        assert_eq!(page.songs.len(), 1);
        assert_eq!(page.selected_song, Some(song));
        assert_eq!(page.playlists.len(), 1);
    }
}
