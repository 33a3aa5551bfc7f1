use cosmic::iced::{Alignment, Length};
use cosmic::widget::{checkbox, column, container, icon, row, text};
use cosmic::{Element, theme};

use crate::core::task::Task;
use crate::fl;
use crate::message::Message;

/// One assignee's card: a header with their pending count, then their tasks
/// in original order. An empty group still renders, with an explicit
/// "no tasks" line, rather than disappearing from the board.
pub fn assignee_card(name: &str, tasks: &[&Task]) -> Element<'static, Message> {
    let pending = tasks.iter().filter(|t| !t.status.is_completed()).count() as i64;

    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(icon::from_name("avatar-default-symbolic").size(24).icon())
        .push(
            column()
                .spacing(2)
                .push(text::title4(name.to_string()))
                .push(text::caption(fl!("tasks-pending-count", count = pending))),
        );

    let mut content = column().spacing(8).push(header);

    if tasks.is_empty() {
        content = content.push(
            container(text::caption(fl!("tasks-none-assigned")))
                .padding(16)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        for task in tasks {
            content = content.push(task_row(task));
        }
    }

    container(content)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn task_row(task: &Task) -> Element<'static, Message> {
    let id = task.id;
    let done = task.status.is_completed();

    let title: Element<'static, Message> = if done {
        text::caption(task.title.clone()).into()
    } else {
        text::body(task.title.clone()).into()
    };

    let meta = format!(
        "Due: {} • {} • {} • {}",
        task.due.format("%Y-%m-%d"),
        task.recurring.as_str(),
        task.category,
        task.room,
    );

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(checkbox("", done).on_toggle(move |_| Message::ToggleTaskDone(id)))
        .push(
            column()
                .spacing(2)
                .push(title)
                .push(text::caption(meta))
                .width(Length::Fill),
        )
        .into()
}
