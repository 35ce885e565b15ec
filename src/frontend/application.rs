use iced::widget::Column;
use iced::widget::Row;
use iced::Element;
use iced::Task;
use tracing::warn;

use crate::backend::database::Database;

use crate::frontend::message::Message;
use crate::frontend::message::Notice;
use crate::frontend::message::Tab;
use crate::frontend::pages::library_page::LibraryPage;
use crate::frontend::pages::playlists_page::PlaylistsPage;
use crate::frontend::widgets::OrganizerWidget;

pub trait Page {
    fn update(&mut self, message: Message) -> Task<Message>;
    fn view(&self) -> Column<'_, Message>;
}

pub struct Application {
    tab: Tab,
    library: LibraryPage,
    playlists: PlaylistsPage,
    notice: Option<Notice>,
    confirmation: Option<(String, Message)>,
}

impl Application {
    pub fn new(database: Database) -> Self {
        Self {
            tab: Tab::Library,
            library: LibraryPage::new(database.clone()),
            playlists: PlaylistsPage::new(database),
            notice: None,
            confirmation: None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let tabs = Row::new()
            .spacing(10)
            .push(OrganizerWidget::tab("Library", self.tab == Tab::Library).on_press(Message::SelectTab(Tab::Library)))
            .push(
                OrganizerWidget::tab("Playlists", self.tab == Tab::Playlists)
                    .on_press(Message::SelectTab(Tab::Playlists)),
            );

        let mut column = Column::new().spacing(20).padding(20).push(tabs);

        if let Some(notice) = self.notice.as_ref() {
            column = column.push(OrganizerWidget::notice(notice));
        }

        if let Some((prompt, _)) = self.confirmation.as_ref() {
            column = column.push(OrganizerWidget::confirmation(prompt));
        }

        let page = match self.tab {
            Tab::Library => self.library.view(),
            Tab::Playlists => self.playlists.view(),
        };

        column.push(page).into()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectTab(tab) => {
                self.tab = tab;
                Task::none()
            }

            Message::Notify(notice) => {
                warn!(title = %notice.title, body = %notice.body, "surfaced to user");
                self.notice = Some(notice);
                Task::none()
            }

            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }

            Message::Confirm(prompt, action) => {
                self.confirmation = Some((prompt, *action));
                Task::none()
            }

            Message::Confirmed => match self.confirmation.take() {
                Some((_, action)) => action.task(),
                None => Task::none(),
            },

            Message::Cancelled => {
                self.confirmation = None;
                Task::none()
            }

            // The playlists tab adds whatever is selected over in the library
            Message::AddLibrarySongToPlaylist => {
                Message::AddSongToPlaylist(self.library.selected_song()).task()
            }

            other => Task::batch(vec![
                self.library.update(other.clone()),
                self.playlists.update(other),
            ]),
        }
    }
}
