use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::application::WishForm;
use crate::core::member::FamilyMember;
use crate::core::wishlist::{WishPriority, WishlistItem};
use crate::fl;
use crate::message::{Message, Page};

fn detail_line(label: String, value: &str) -> Option<Element<'static, Message>> {
    if value.is_empty() {
        return None;
    }
    Some(
        row()
            .spacing(6)
            .push(text::caption(label).width(Length::Fixed(110.0)))
            .push(text::caption(value.to_string()))
            .into(),
    )
}

pub fn profile_view(
    profile: &FamilyMember,
    wishlist: &[WishlistItem],
    form: Option<&WishForm>,
) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                button::icon(icon::from_name("go-previous-symbolic"))
                    .on_press(Message::Open(Page::Profiles)),
            )
            .push(text::title3(fl!("profile-title", name = profile.name.as_str()))),
    );

    let left = column()
        .spacing(12)
        .push(identity_card(profile))
        .push(info_card(profile))
        .width(Length::Fixed(300.0));

    let mut right = column().spacing(12).width(Length::Fill);

    if !profile.bio.is_empty() {
        right = right.push(
            container(
                column()
                    .spacing(8)
                    .push(text::title4(fl!("profile-about")))
                    .push(text::body(profile.bio.clone())),
            )
            .padding(12)
            .width(Length::Fill)
            .class(theme::Container::Card),
        );
    }

    right = right.push(wishlist_card(profile, wishlist, form));

    content = content.push(row().spacing(12).push(left).push(right));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn identity_card(profile: &FamilyMember) -> Element<'static, Message> {
    let col = column()
        .spacing(4)
        .align_x(Alignment::Center)
        .push(icon::from_name(profile.avatar.clone()).size(96).icon())
        .push(text::title3(profile.name.clone()))
        .push(text::caption(profile.role.as_str()))
        .push(text::caption(fl!(
            "profiles-tasks-completed",
            count = profile.tasks_completed as i64
        )));

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn info_card(profile: &FamilyMember) -> Element<'static, Message> {
    let mut col = column().spacing(6).push(text::title4(fl!("profile-info")));

    let age = profile.age.map(|a| a.to_string()).unwrap_or_default();
    let birthday = profile
        .birthday
        .map(|b| b.format("%B %e, %Y").to_string())
        .unwrap_or_default();

    for line in [
        detail_line(fl!("profile-age"), &age),
        detail_line(fl!("profile-birthday"), &birthday),
        detail_line(fl!("profile-clothes-size"), &profile.clothes_size),
        detail_line(fl!("profile-shoe-size"), &profile.shoe_size),
        detail_line(fl!("profile-favorite-color"), &profile.favorite_color),
        detail_line(fl!("profile-allergies"), &profile.allergies),
    ]
    .into_iter()
    .flatten()
    {
        col = col.push(line);
    }

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn wishlist_card(
    profile: &FamilyMember,
    wishlist: &[WishlistItem],
    form: Option<&WishForm>,
) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(icon::from_name("emblem-favorite-symbolic").size(16).icon())
            .push(
                column()
                    .spacing(2)
                    .push(text::title4(fl!("wishlist-title")))
                    .push(text::caption(fl!(
                        "wishlist-caption",
                        name = profile.name.as_str()
                    )))
                    .width(Length::Fill),
            )
            .push(
                button::suggested(fl!("wishlist-add"))
                    .on_press(Message::OpenNewWishForm),
            ),
    );

    if let Some(form) = form {
        col = col.push(wish_form_view(form));
    }

    if wishlist.is_empty() {
        col = col.push(
            container(
                column()
                    .spacing(4)
                    .align_x(Alignment::Center)
                    .push(icon::from_name("emblem-favorite-symbolic").size(32).icon())
                    .push(text::body(fl!("wishlist-empty")))
                    .push(text::caption(fl!(
                        "wishlist-empty-caption",
                        name = profile.name.as_str()
                    ))),
            )
            .padding(24)
            .center_x(Length::Fill)
            .width(Length::Fill),
        );
    } else {
        for item in wishlist {
            col = col.push(wish_row(item));
        }
    }

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

fn wish_row(item: &WishlistItem) -> Element<'static, Message> {
    let id = item.id;

    let mut info = column().spacing(2).push(text::body(item.title.clone()));
    if !item.description.is_empty() {
        info = info.push(text::caption(item.description.clone()));
    }
    if let Some(link) = &item.link {
        info = info.push(
            row()
                .spacing(4)
                .align_y(Alignment::Center)
                .push(icon::from_name("web-browser-symbolic").size(12).icon())
                .push(text::caption(link.clone()).size(11.0)),
        );
    }

    let priority = match item.priority {
        WishPriority::High => fl!("wishlist-priority-high"),
        WishPriority::Medium => fl!("wishlist-priority-medium"),
        WishPriority::Low => fl!("wishlist-priority-low"),
    };

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(info.width(Length::Fill))
        .push(text::caption(priority))
        .push(
            button::icon(icon::from_name("edit-delete-symbolic"))
                .on_press(Message::RemoveWishlistItem(id)),
        )
        .into()
}

fn wish_form_view(form: &WishForm) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(
        text_input::text_input(fl!("wishlist-name-placeholder"), form.title.clone())
            .on_input(Message::WishFormTitle)
            .on_submit(|_| Message::WishFormSubmit)
            .width(Length::Fill),
    );

    col = col.push(
        text_input::text_input(fl!("wishlist-description-placeholder"), form.description.clone())
            .on_input(Message::WishFormDescription)
            .width(Length::Fill),
    );

    col = col.push(
        text_input::text_input("https://example.com/item", form.link.clone())
            .on_input(Message::WishFormLink)
            .width(Length::Fill),
    );

    let priority_labels: Vec<String> = WishPriority::ALL
        .iter()
        .map(|p| p.as_str().to_string())
        .collect();
    let selected = WishPriority::ALL.iter().position(|p| *p == form.priority);
    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("wishlist-priority")))
            .push(
                dropdown(priority_labels, selected, |idx| {
                    Message::WishFormPriority(WishPriority::ALL[idx])
                })
                .width(Length::Shrink),
            ),
    );

    col = col.push(
        row()
            .spacing(8)
            .push(
                button::suggested(fl!("wishlist-add-confirm"))
                    .on_press(Message::WishFormSubmit),
            )
            .push(
                button::standard(fl!("form-cancel"))
                    .on_press(Message::CancelWishForm),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
