use iced::widget::button;
use iced::widget::text;
use iced::widget::text_input;
use iced::widget::Button;
use iced::widget::Column;
use iced::widget::Container;
use iced::widget::Row;
use iced::widget::TextInput;
use iced::alignment::Vertical;
use iced::Color;
use iced::Element;
use iced::Length;
use iced::Theme;

use crate::frontend::message::Message;
use crate::frontend::message::Notice;
use crate::frontend::message::NoticeKind;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

pub struct OrganizerWidget;
impl OrganizerWidget {
    pub fn header<'a>(label: &'a str) -> Element<'a, Message> {
        text(label).size(24).into()
    }

    pub fn inline_button<'a>(label: &'a str) -> Button<'a, Message> {
        button(text(label)).padding(6)
    }

    /// A row in one of the list panes. The selected row is highlighted.
    pub fn list_entry<'a>(label: String, selected: bool) -> Button<'a, Message> {
        let style: ButtonStyle = if selected { button::primary } else { button::text };
        button(text(label)).width(Length::Fill).style(style)
    }

    pub fn tab<'a>(label: &'a str, active: bool) -> Button<'a, Message> {
        let style: ButtonStyle = if active { button::primary } else { button::secondary };
        button(text(label).size(18)).padding(8).style(style)
    }

    pub fn search_bar<'a>(placeholder: &'a str, value: &'a str) -> TextInput<'a, Message> {
        text_input(placeholder, value).padding(6).width(Length::Fixed(260.0))
    }

    pub fn labelled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Row<'a, Message> {
        Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(text(label).width(Length::Fixed(60.0)))
            .push(input)
    }

    pub fn notice<'a>(notice: &'a Notice) -> Element<'a, Message> {
        let colour = match notice.kind {
            NoticeKind::Info => Color::from_rgb8(70, 130, 180),
            NoticeKind::Warning => Color::from_rgb8(218, 165, 32),
            NoticeKind::Error => Color::from_rgb8(200, 40, 40),
        };

        Container::new(
            Row::new()
                .spacing(20)
                .align_y(Vertical::Center)
                .push(
                    Column::new()
                        .push(text(&notice.title).size(18).color(colour))
                        .push(text(&notice.body))
                        .width(Length::Fill),
                )
                .push(Self::inline_button("OK").on_press(Message::DismissNotice)),
        )
        .padding(10)
        .into()
    }

    pub fn confirmation<'a>(prompt: &'a str) -> Element<'a, Message> {
        Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(text(prompt).width(Length::Fill))
            .push(Self::inline_button("Yes").on_press(Message::Confirmed))
            .push(Self::inline_button("No").on_press(Message::Cancelled))
            .into()
    }
}
