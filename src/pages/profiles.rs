use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, flex_row, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::application::MemberForm;
use crate::core::member::{FamilyMember, Role};
use crate::fl;
use crate::message::Message;

const CARD_WIDTH: f32 = 220.0;

pub fn profiles_view(
    members: &[FamilyMember],
    form: Option<&MemberForm>,
) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::title4(fl!("profiles-title")).width(Length::Fill))
            .push(
                button::suggested(fl!("profiles-add"))
                    .on_press(Message::OpenNewMemberForm),
            ),
    );

    if let Some(form) = form {
        content = content.push(member_form_view(form));
    }

    let cards: Vec<Element<'static, Message>> =
        members.iter().map(member_card).collect();
    content = content.push(flex_row(cards).row_spacing(12).column_spacing(12));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn member_card(member: &FamilyMember) -> Element<'static, Message> {
    let id = member.id.clone();

    let mut col = column()
        .spacing(4)
        .align_x(Alignment::Center)
        .push(icon::from_name(member.avatar.clone()).size(48).icon())
        .push(text::title4(member.name.clone()))
        .push(text::caption(member.role.as_str()));

    col = col.push(text::caption(fl!(
        "profiles-tasks-completed",
        count = member.tasks_completed as i64
    )));

    if !member.favorite_color.is_empty() {
        col = col.push(text::caption(member.favorite_color.clone()).size(11.0));
    }

    col = col.push(
        button::standard(fl!("profiles-view"))
            .on_press(Message::OpenProfile(id))
            .width(Length::Fill),
    );

    container(col)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .class(theme::Container::Card)
        .into()
}

fn member_form_view(form: &MemberForm) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(text::title4(fl!("profiles-new")));

    col = col.push(
        text_input::text_input(fl!("profiles-name-placeholder"), form.name.clone())
            .on_input(Message::MemberFormName)
            .on_submit(|_| Message::MemberFormSubmit)
            .width(Length::Fill),
    );

    let role_labels: Vec<String> = Role::ALL.iter().map(|r| r.as_str().to_string()).collect();
    let selected = Role::ALL.iter().position(|r| *r == form.role);
    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("profiles-role")))
            .push(
                dropdown(role_labels, selected, |idx| {
                    Message::MemberFormRole(Role::ALL[idx])
                })
                .width(Length::Shrink),
            ),
    );

    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("profiles-color")))
            .push(
                text_input::text_input("#FF5733", form.color.clone())
                    .on_input(Message::MemberFormColor)
                    .width(Length::Fixed(120.0)),
            ),
    );

    col = col.push(
        row()
            .spacing(8)
            .push(
                button::suggested(fl!("profiles-add-confirm"))
                    .on_press(Message::MemberFormSubmit),
            )
            .push(
                button::standard(fl!("form-cancel"))
                    .on_press(Message::CancelMemberForm),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
