use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::application::EventForm;
use crate::components::month_calendar::{month_calendar, MonthCalendarState};
use crate::core::event::{self, CalendarEvent};
use crate::fl;
use crate::message::Message;

pub fn calendar_view(
    events: &[CalendarEvent],
    month_state: &MonthCalendarState,
    form: Option<&EventForm>,
    member_names: &[String],
) -> Element<'static, Message> {
    let today = chrono::Local::now().date_naive();
    let busy = event::busy_days(events);

    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::title4(fl!("calendar-title")).width(Length::Fill))
            .push(
                button::suggested(fl!("calendar-add-event"))
                    .on_press(Message::CreateEvent),
            ),
    );

    if let Some(form) = form {
        content = content.push(event_form_view(form.clone(), member_names.to_vec()));
    }

    let grid = container(month_calendar(month_state, &busy, today))
        .padding(8)
        .width(Length::Fill)
        .class(theme::Container::Card);

    let mut side = column().spacing(12).width(Length::Fixed(340.0));
    if let Some(selected) = month_state.selected_day {
        side = side.push(selected_day_card(events, selected));
    }
    side = side.push(upcoming_card(events, today));

    content = content.push(row().spacing(12).push(grid).push(side));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn selected_day_card(events: &[CalendarEvent], day: chrono::NaiveDate) -> Element<'static, Message> {
    let selected = event::events_on(events, day);

    let mut col = column()
        .spacing(8)
        .push(text::title4(day.format("%A, %B %e").to_string()))
        .push(text::caption(fl!(
            "calendar-scheduled-count",
            count = selected.len() as i64
        )));

    if selected.is_empty() {
        col = col.push(
            container(
                column()
                    .spacing(4)
                    .align_x(Alignment::Center)
                    .push(icon::from_name("x-office-calendar-symbolic").size(32).icon())
                    .push(text::caption(fl!("calendar-day-empty"))),
            )
            .padding(16)
            .center_x(Length::Fill)
            .width(Length::Fill),
        );
    } else {
        for event in selected {
            let mut info = column().spacing(2).push(text::body(event.title.clone()));

            let time = event
                .time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default();
            let detail = if event.description.is_empty() {
                time.clone()
            } else if time.is_empty() {
                event.description.clone()
            } else {
                format!("{} • {}", time, event.description)
            };
            if !detail.is_empty() {
                info = info.push(text::caption(detail));
            }
            info = info.push(
                text::caption(fl!("calendar-added-by", name = event.created_by.as_str()))
                    .size(11.0),
            );

            col = col.push(info);
        }
    }

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn upcoming_card(events: &[CalendarEvent], today: chrono::NaiveDate) -> Element<'static, Message> {
    let upcoming = event::upcoming(events, today);

    let mut col = column()
        .spacing(8)
        .push(text::title4(fl!("calendar-upcoming")))
        .push(text::caption(fl!("calendar-upcoming-caption")));

    if upcoming.is_empty() {
        col = col.push(
            container(text::caption(fl!("calendar-upcoming-empty")))
                .padding(16)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        for event in upcoming {
            let time = event
                .time
                .map(|t| t.format("%H:%M").to_string())
                .unwrap_or_default();

            let mut info = column().spacing(2).push(text::body(event.title.clone()));
            if !time.is_empty() {
                info = info.push(text::caption(time));
            }

            col = col.push(
                row()
                    .spacing(8)
                    .align_y(Alignment::Center)
                    .push(info.width(Length::Fill))
                    .push(text::body(event.date.format("%b %e").to_string())),
            );
        }
    }

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn event_form_view(form: EventForm, member_names: Vec<String>) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(text::title4(fl!("calendar-new-event")));

    col = col.push(
        text_input::text_input(fl!("calendar-event-title"), form.title.clone())
            .on_input(Message::SetEventTitle)
            .on_submit(|_| Message::SubmitEvent)
            .width(Length::Fill),
    );

    col = col.push(
        row()
            .spacing(8)
            .push(
                text_input::text_input("YYYY-MM-DD", form.date.clone())
                    .on_input(Message::SetEventDate)
                    .width(Length::Fill),
            )
            .push(
                text_input::text_input("HH:MM", form.time.clone())
                    .on_input(Message::SetEventTime)
                    .width(Length::Fixed(80.0)),
            ),
    );

    col = col.push(
        text_input::text_input(fl!("calendar-event-description"), form.description.clone())
            .on_input(Message::SetEventDescription)
            .width(Length::Fill),
    );

    if !member_names.is_empty() {
        col = col.push(
            row()
                .spacing(8)
                .align_y(Alignment::Center)
                .push(text::caption(fl!("calendar-event-creator")))
                .push(
                    dropdown(member_names, Some(form.created_by), Message::SetEventCreator)
                        .width(Length::Shrink),
                ),
        );
    }

    col = col.push(
        row()
            .spacing(8)
            .push(
                button::suggested(fl!("calendar-add-confirm"))
                    .on_press(Message::SubmitEvent),
            )
            .push(
                button::standard(fl!("form-cancel"))
                    .on_press(Message::CancelEventForm),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
