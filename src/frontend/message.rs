use crate::backend::error::OrganizerError;
use crate::backend::music::PlaylistId;
use crate::backend::music::SongId;

#[derive(Clone, Debug)]
pub enum Message {
    Refresh,                                // Reload every list from the database
    SelectTab(Tab),
    Notify(Notice),                         // Stand-in for a message box
    DismissNotice,
    Confirm(String, Box<Message>),          // Ask first, dispatch the boxed message on yes
    Confirmed,
    Cancelled,
    LibraryChanged,                         // Songs were written; playlist views reload

    // Library tab
    SearchInput(String),
    SearchMode(SearchMode),
    SubmitSearch,
    ShowAll,
    SelectSong(SongId),
    FormInput(FormField, String),
    AddSong,
    UpdateSong,
    DeleteSong,
    DeleteSongConfirmed(SongId),
    ClearForm,

    // Playlists tab
    PlaylistNameInput(String),
    CreatePlaylist,
    SelectPlaylist(PlaylistId),
    DeletePlaylist,
    DeletePlaylistConfirmed(PlaylistId),
    SelectPlaylistSong(SongId),
    AddLibrarySongToPlaylist,               // Application fills in the library selection
    AddSongToPlaylist(Option<SongId>),
    RemoveSongFromPlaylist,
    RemoveSongFromPlaylistConfirmed(PlaylistId, SongId),
}

impl Message {
    pub fn task(self) -> iced::Task<Message> {
        iced::Task::done(self)
    }

    pub fn confirm(prompt: &str, then: Message) -> Message {
        Message::Confirm(prompt.to_string(), Box::new(then))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Library,
    Playlists,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Name,
    Genre,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Artist,
    Genre,
    Album,
    Year,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: &str, body: &str) -> Notice {
        Notice { kind: NoticeKind::Info, title: title.to_string(), body: body.to_string() }
    }

    pub fn warning(title: &str, body: &str) -> Notice {
        Notice { kind: NoticeKind::Warning, title: title.to_string(), body: body.to_string() }
    }

    /// Validation failures read as a warning, everything else as an error
    /// prefixed with what was being attempted.
    pub fn failure(action: &str, error: &OrganizerError) -> Notice {
        if error.is_validation() {
            Notice::warning("Validation", &error.to_string())
        } else {
            Notice {
                kind: NoticeKind::Error,
                title: String::from("Error"),
                body: format!("{action}:\n{error}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_is_a_warning() {
        let notice = Notice::failure("Failed to add song", &OrganizerError::Validation("Song name cannot be empty."));
        assert_eq!(notice, Notice::warning("Validation", "Song name cannot be empty."));
    }

    #[test]
    fn other_failures_name_the_action() {
        let notice = Notice::failure("Failed to create playlist", &OrganizerError::DuplicatePlaylist("Mix".into()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.body, "Failed to create playlist:\nA playlist named \"Mix\" already exists.");
    }
}
