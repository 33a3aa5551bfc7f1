use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, flex_row, icon, row, scrollable, text};
use cosmic::Element;

use crate::components::task_card::assignee_card;
use crate::core::group::group_by;
use crate::core::task::{self, StatusFilter, Task};
use crate::fl;
use crate::message::Message;

pub fn tasks_view(
    tasks: &[Task],
    status_filter: StatusFilter,
    assignee_filter: Option<&str>,
) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::title4(fl!("tasks-title")).width(Length::Fill))
            .push(
                button::suggested(fl!("tasks-add"))
                    .on_press(Message::OpenNewTaskForm),
            ),
    );

    // Status tabs
    content = content.push(
        row()
            .spacing(4)
            .push(status_button(fl!("tasks-filter-all"), StatusFilter::All, status_filter))
            .push(status_button(fl!("tasks-filter-pending"), StatusFilter::Pending, status_filter))
            .push(status_button(fl!("tasks-filter-completed"), StatusFilter::Completed, status_filter)),
    );

    // Assignee tabs, derived from the unfiltered collection so names with no
    // visible tasks stay selectable.
    let assignees = task::assignees(tasks);
    let mut assignee_buttons: Vec<Element<'static, Message>> = Vec::new();
    assignee_buttons.push(assignee_button(
        fl!("tasks-everyone"),
        0,
        assignee_filter.is_none(),
    ));
    for (idx, name) in assignees.iter().enumerate() {
        assignee_buttons.push(assignee_button(
            name.clone(),
            idx + 1,
            assignee_filter == Some(name.as_str()),
        ));
    }
    content = content.push(flex_row(assignee_buttons).row_spacing(4).column_spacing(4));

    let visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| task::visible(t, status_filter, assignee_filter))
        .collect();

    if visible.is_empty() {
        let caption = match (status_filter, assignee_filter) {
            (StatusFilter::Completed, _) => fl!("tasks-empty-completed"),
            (_, Some(name)) => fl!("tasks-empty-assignee", name = name),
            _ => fl!("tasks-empty-all"),
        };
        content = content.push(
            container(
                column()
                    .spacing(4)
                    .align_x(Alignment::Center)
                    .push(icon::from_name("object-select-symbolic").size(48).icon())
                    .push(text::title4(fl!("tasks-empty")))
                    .push(text::caption(caption)),
            )
            .padding(32)
            .center_x(Length::Fill)
            .width(Length::Fill),
        );
    } else {
        match assignee_filter {
            // One card per assignee, stable partition of the filtered list.
            None => {
                for (assignee, group) in group_by(visible, |t: &Task| t.assigned_to.clone()) {
                    content = content.push(assignee_card(&assignee, &group));
                }
            }
            Some(name) => {
                content = content.push(assignee_card(name, &visible));
            }
        }
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_button(
    label: String,
    value: StatusFilter,
    current: StatusFilter,
) -> Element<'static, Message> {
    if value == current {
        button::suggested(label)
            .on_press(Message::SetStatusFilter(value))
            .into()
    } else {
        button::standard(label)
            .on_press(Message::SetStatusFilter(value))
            .into()
    }
}

fn assignee_button(label: String, idx: usize, active: bool) -> Element<'static, Message> {
    if active {
        button::suggested(label)
            .on_press(Message::SelectAssignee(idx))
            .into()
    } else {
        button::standard(label)
            .on_press(Message::SelectAssignee(idx))
            .into()
    }
}
