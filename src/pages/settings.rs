use cosmic::iced::{Alignment, Length};
use cosmic::widget::{column, container, row, scrollable, text, text_input};
use cosmic::Element;

use crate::config::HomehubConfig;
use crate::fl;
use crate::message::Message;

pub fn settings_view(config: &HomehubConfig) -> Element<'_, Message> {
    let mut content = column().spacing(12);

    // --- Household ---
    content = content.push(text::title4(fl!("settings-household")));
    content = content.push(
        text_input::text_input("HomeHub", &config.household_name)
            .on_input(Message::SetHouseholdName)
            .width(Length::Fill),
    );

    // --- Debug logging ---
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::body(fl!("settings-debug-logging")).width(Length::Fill))
            .push(
                cosmic::widget::toggler(config.debug_logging)
                    .on_toggle(|_| Message::ToggleDebugLogging),
            ),
    );

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
