use iced::widget::scrollable;
use iced::widget::Button;
use iced::widget::Column;
use iced::widget::Row;
use iced::Length;
use iced::Task;

use crate::frontend::application::Page;
use crate::frontend::message::FormField;
use crate::frontend::message::Message;
use crate::frontend::message::Notice;
use crate::frontend::message::SearchMode;
use crate::frontend::widgets::OrganizerWidget;

use crate::backend::database::Database;
use crate::backend::error::Result;
use crate::backend::music::Song;
use crate::backend::music::SongFields;
use crate::backend::music::SongId;

/// Raw contents of the detail form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SongForm {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub album: String,
    pub year: String,
}

impl SongForm {
    fn fill(song: &Song) -> Self {
        let fields = song.fields();
        Self {
            title: fields.name,
            artist: fields.artist,
            genre: fields.genre,
            album: fields.album,
            year: fields.year.map(|year| year.to_string()).unwrap_or_default(),
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Title => self.title = value,
            FormField::Artist => self.artist = value,
            FormField::Genre => self.genre = value,
            FormField::Album => self.album = value,
            FormField::Year => self.year = value,
        }
    }

    /// Only the year can fail here; name checks belong to the database layer.
    fn to_fields(&self) -> std::result::Result<SongFields, Notice> {
        let year = match self.year.trim() {
            "" => None,
            year => match year.parse::<i64>() {
                Ok(year) => Some(year),
                Err(_) => return Err(Notice::warning("Validation", "Year must be a whole number.")),
            },
        };

        Ok(SongFields::new(&self.title, &self.artist, &self.genre)
            .with_album(&self.album)
            .with_year(year))
    }
}

pub struct LibraryPage {
    database: Database,
    songs: Vec<Song>,
    query: String,
    mode: SearchMode,
    selected: Option<SongId>,
    form: SongForm,
}

impl LibraryPage {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            songs: Vec::new(),
            query: String::new(),
            mode: SearchMode::Name,
            selected: None,
            form: SongForm::default(),
        }
    }

    pub fn selected_song(&self) -> Option<SongId> {
        self.selected
    }

    fn populate(&mut self, songs: Result<Vec<Song>>, action: &str) -> Task<Message> {
        match songs {
            Ok(songs) => {
                self.songs = songs;
                Task::none()
            }
            Err(e) => Message::Notify(Notice::failure(action, &e)).task(),
        }
    }

    fn refresh_songs(&mut self) -> Task<Message> {
        let songs = self.database.list_songs();
        self.populate(songs, "Failed to load songs")
    }

    fn search_songs(&mut self) -> Task<Message> {
        if self.query.trim().is_empty() {
            return self.refresh_songs();
        }

        let songs = match self.mode {
            SearchMode::Name => self.database.search_songs_by_name(&self.query),
            SearchMode::Genre => self.database.search_songs_by_genre(&self.query),
        };
        self.populate(songs, "Search failed")
    }

    fn clear_form(&mut self) {
        self.selected = None;
        self.form = SongForm::default();
    }

    /// After a successful write: show everything, reset the form and let
    /// the playlist views catch up.
    fn written(&mut self) -> Task<Message> {
        self.clear_form();
        Task::batch(vec![self.refresh_songs(), Message::LibraryChanged.task()])
    }

    fn add_song(&mut self) -> Task<Message> {
        let fields = match self.form.to_fields() {
            Ok(fields) => fields,
            Err(notice) => return Message::Notify(notice).task(),
        };

        match self.database.create_song(&fields) {
            Ok(_) => self.written(),
            Err(e) => Message::Notify(Notice::failure("Failed to add song", &e)).task(),
        }
    }

    /// The selected song, or the notice asking for one.
    fn selection(&self, action: &str) -> std::result::Result<SongId, Message> {
        self.selected
            .ok_or_else(|| Message::Notify(Notice::info("Select Song", &format!("Please select a song to {action}."))))
    }

    fn delete_request(&self) -> Message {
        match self.selection("delete") {
            Ok(song_id) => Message::confirm("Delete this song?", Message::DeleteSongConfirmed(song_id)),
            Err(notice) => notice,
        }
    }

    fn update_song(&mut self) -> Task<Message> {
        let song_id = match self.selection("update") {
            Ok(song_id) => song_id,
            Err(notice) => return notice.task(),
        };

        let fields = match self.form.to_fields() {
            Ok(fields) => fields,
            Err(notice) => return Message::Notify(notice).task(),
        };

        match self.database.update_song(song_id, &fields) {
            Ok(()) => self.written(),
            Err(e) => Message::Notify(Notice::failure("Failed to update song", &e)).task(),
        }
    }

    fn delete_song(&mut self, song_id: SongId) -> Task<Message> {
        match self.database.delete_song(song_id) {
            Ok(()) => self.written(),
            Err(e) => Message::Notify(Notice::failure("Failed to delete song", &e)).task(),
        }
    }

    /// Fill the form from the stored row rather than the possibly stale list.
    fn select_song(&mut self, song_id: SongId) -> Task<Message> {
        match self.database.get_song(song_id) {
            Ok(Some(song)) => {
                self.selected = Some(song_id);
                self.form = SongForm::fill(&song);
                Task::none()
            }
            Ok(None) => self.refresh_songs(),
            Err(e) => Message::Notify(Notice::failure("Failed to load song", &e)).task(),
        }
    }

    fn mode_button(&self, label: &'static str, mode: SearchMode) -> Button<'_, Message> {
        OrganizerWidget::list_entry(String::from(label), self.mode == mode)
            .width(Length::Shrink)
            .on_press(Message::SearchMode(mode))
    }

    fn search_area(&self) -> Row<'_, Message> {
        Row::new()
            .spacing(10)
            .push(
                OrganizerWidget::search_bar("Keyword", &self.query)
                    .on_input(Message::SearchInput)
                    .on_submit(Message::SubmitSearch),
            )
            .push(self.mode_button("By Name", SearchMode::Name))
            .push(self.mode_button("By Genre", SearchMode::Genre))
            .push(OrganizerWidget::inline_button("Search").on_press(Message::SubmitSearch))
            .push(OrganizerWidget::inline_button("Show All").on_press(Message::ShowAll))
    }

    fn details_form(&self) -> Row<'_, Message> {
        let fields = Column::new()
            .spacing(5)
            .push(form_input("Title", &self.form.title, FormField::Title))
            .push(form_input("Artist", &self.form.artist, FormField::Artist))
            .push(form_input("Genre", &self.form.genre, FormField::Genre))
            .push(form_input("Album", &self.form.album, FormField::Album))
            .push(form_input("Year", &self.form.year, FormField::Year));

        let buttons = Column::new()
            .spacing(5)
            .push(OrganizerWidget::inline_button("Add Song").on_press(Message::AddSong))
            .push(OrganizerWidget::inline_button("Update Song").on_press(Message::UpdateSong))
            .push(OrganizerWidget::inline_button("Delete Song").on_press(Message::DeleteSong))
            .push(OrganizerWidget::inline_button("Clear Form").on_press(Message::ClearForm));

        Row::new().spacing(20).push(fields).push(buttons)
    }
}

fn form_input<'a>(label: &'a str, value: &'a str, field: FormField) -> Row<'a, Message> {
    OrganizerWidget::labelled(
        label,
        OrganizerWidget::search_bar(label, value).on_input(move |text| Message::FormInput(field, text)),
    )
}

impl Page for LibraryPage {
    fn view(&self) -> Column<'_, Message> {
        let mut list = Column::new().spacing(2);
        for song in &self.songs {
            list = list.push(
                OrganizerWidget::list_entry(song.to_string(), self.selected == Some(song.id))
                    .on_press(Message::SelectSong(song.id)),
            );
        }

        Column::new()
            .spacing(20)
            .push(OrganizerWidget::header("Search"))
            .push(self.search_area())
            .push(OrganizerWidget::header("Songs"))
            .push(scrollable(list).height(Length::Fill))
            .push(OrganizerWidget::header("Song Details"))
            .push(self.details_form())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Refresh | Message::ShowAll => self.refresh_songs(),
            Message::SearchInput(text) => {
                self.query = text;
                Task::none()
            }
            Message::SearchMode(mode) => {
                self.mode = mode;
                Task::none()
            }
            Message::SubmitSearch => self.search_songs(),
            Message::SelectSong(song_id) => self.select_song(song_id),
            Message::FormInput(field, value) => {
                self.form.set(field, value);
                Task::none()
            }
            Message::AddSong => self.add_song(),
            Message::UpdateSong => self.update_song(),
            Message::DeleteSong => self.delete_request().task(),
            Message::DeleteSongConfirmed(song_id) => self.delete_song(song_id),
            Message::ClearForm => {
                self.clear_form();
                Task::none()
            }
            _ => Task::none(),
        }
    }
}
