use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, flex_row, icon, row, scrollable, text};
use cosmic::{Element, theme};

use crate::fl;
use crate::message::{Message, Page};

const CARD_WIDTH: f32 = 240.0;

pub fn dashboard_view(household_name: &str) -> Element<'static, Message> {
    let mut content = column().spacing(16);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(icon::from_name("user-home-symbolic").size(24).icon())
            .push(text::title3(household_name.to_string())),
    );

    content = content.push(
        column()
            .spacing(4)
            .push(text::title3(fl!("dashboard-tagline-title")))
            .push(text::body(fl!("dashboard-tagline"))),
    );

    // The headline figures are fixed display copy, not live counts.
    let cards: Vec<Element<'static, Message>> = vec![
        summary_card(
            Page::Profiles,
            fl!("dashboard-profiles-headline"),
            fl!("dashboard-profiles-caption"),
            fl!("dashboard-profiles-action"),
        ),
        summary_card(
            Page::Inventory,
            fl!("dashboard-inventory-headline"),
            fl!("dashboard-inventory-caption"),
            fl!("dashboard-inventory-action"),
        ),
        summary_card(
            Page::Tasks,
            fl!("dashboard-tasks-headline"),
            fl!("dashboard-tasks-caption"),
            fl!("dashboard-tasks-action"),
        ),
        summary_card(
            Page::Calendar,
            fl!("dashboard-calendar-headline"),
            fl!("dashboard-calendar-caption"),
            fl!("dashboard-calendar-action"),
        ),
        summary_card(
            Page::Cleaning,
            fl!("dashboard-cleaning-headline"),
            fl!("dashboard-cleaning-caption"),
            fl!("dashboard-cleaning-action"),
        ),
    ];

    content = content.push(flex_row(cards).row_spacing(12).column_spacing(12));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn summary_card(
    page: Page,
    headline: String,
    caption: String,
    action: String,
) -> Element<'static, Message> {
    let header = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(text::caption(page.title()).width(Length::Fill))
        .push(icon::from_name(page.icon_name()).size(16).icon());

    let card = column()
        .spacing(8)
        .push(header)
        .push(text::title3(headline))
        .push(text::caption(caption))
        .push(
            button::standard(action)
                .on_press(Message::Open(page))
                .width(Length::Fill),
        );

    container(card)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .class(theme::Container::Card)
        .into()
}
