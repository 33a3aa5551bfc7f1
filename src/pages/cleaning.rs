use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, flex_row, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::application::CleaningForm;
use crate::core::cleaning::{self, CleaningTask, DAYS};
use crate::fl;
use crate::message::Message;

const CARD_WIDTH: f32 = 260.0;

pub fn cleaning_view(
    tasks: &[CleaningTask],
    form: Option<&CleaningForm>,
) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                column()
                    .spacing(2)
                    .push(text::title4(fl!("cleaning-title")))
                    .push(text::caption(fl!("cleaning-caption")))
                    .width(Length::Fill),
            )
            .push(
                button::suggested(fl!("cleaning-add"))
                    .on_press(Message::OpenNewCleaningForm),
            ),
    );

    if let Some(form) = form {
        content = content.push(cleaning_form_view(form));
    }

    let cards: Vec<Element<'static, Message>> = DAYS
        .iter()
        .map(|day| day_card(*day, &cleaning::tasks_for_day(tasks, *day)))
        .collect();
    content = content.push(flex_row(cards).row_spacing(12).column_spacing(12));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn day_card(day: chrono::Weekday, tasks: &[&CleaningTask]) -> Element<'static, Message> {
    let mut col = column()
        .spacing(8)
        .push(text::title4(cleaning::day_name(day)))
        .push(text::caption(fl!("cleaning-day-count", count = tasks.len() as i64)));

    if tasks.is_empty() {
        col = col.push(text::caption(fl!("cleaning-day-empty")));
    } else {
        for task in tasks {
            col = col.push(task_row(task));
        }
    }

    container(col)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .class(theme::Container::Card)
        .into()
}

fn task_row(task: &CleaningTask) -> Element<'static, Message> {
    let id = task.id.clone();

    let mut info = column().spacing(2).push(text::body(task.task.clone()));
    if !task.description.is_empty() {
        info = info.push(text::caption(task.description.clone()));
    }

    let toggle_icon = if task.completed {
        "checkbox-checked-symbolic"
    } else {
        "checkbox-symbolic"
    };

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(info.width(Length::Fill))
        .push(
            button::icon(icon::from_name(toggle_icon))
                .on_press(Message::ToggleCleaningDone(id)),
        )
        .into()
}

fn cleaning_form_view(form: &CleaningForm) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(text::title4(fl!("cleaning-new")));

    let day_labels: Vec<String> = DAYS.iter().map(|d| cleaning::day_name(*d).to_string()).collect();
    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("cleaning-day")))
            .push(
                dropdown(day_labels, form.day, Message::CleaningFormDay)
                    .width(Length::Shrink),
            ),
    );

    col = col.push(
        text_input::text_input(fl!("cleaning-name-placeholder"), form.task.clone())
            .on_input(Message::CleaningFormTask)
            .on_submit(|_| Message::CleaningFormSubmit)
            .width(Length::Fill),
    );

    col = col.push(
        text_input::text_input(fl!("cleaning-description-placeholder"), form.description.clone())
            .on_input(Message::CleaningFormDescription)
            .width(Length::Fill),
    );

    col = col.push(
        row()
            .spacing(8)
            .push(
                button::suggested(fl!("cleaning-add-confirm"))
                    .on_press(Message::CleaningFormSubmit),
            )
            .push(
                button::standard(fl!("form-cancel"))
                    .on_press(Message::CancelCleaningForm),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
