use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, flex_row, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::application::ItemForm;
use crate::core::attachment;
use crate::core::inventory::{Category, InventoryItem};
use crate::fl;
use crate::message::{Message, Page};

const CARD_WIDTH: f32 = 260.0;

pub fn category_view(
    raw_id: &str,
    category: Option<&'static Category>,
    items: &[InventoryItem],
    form: Option<&ItemForm>,
) -> Element<'static, Message> {
    // Unknown ids get a dedicated error view: no item list, no add form,
    // just the way back to the category list.
    let Some(category) = category else {
        return unknown_category_view(raw_id);
    };

    let mut content = column().spacing(12);

    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                button::icon(icon::from_name("go-previous-symbolic"))
                    .on_press(Message::Open(Page::Inventory)),
            )
            .push(
                column()
                    .spacing(2)
                    .push(text::title3(category.name))
                    .push(text::caption(fl!("category-caption")))
                    .width(Length::Fill),
            )
            .push(
                button::suggested(fl!("category-add-item"))
                    .on_press(Message::OpenNewItemForm),
            ),
    );

    if let Some(form) = form {
        content = content.push(item_form_view(form));
    }

    if items.is_empty() {
        content = content.push(
            container(text::body(fl!("category-empty")))
                .padding(32)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        let cards: Vec<Element<'static, Message>> = items.iter().map(item_card).collect();
        content = content.push(flex_row(cards).row_spacing(12).column_spacing(12));
    }

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn unknown_category_view(raw_id: &str) -> Element<'static, Message> {
    let content = column()
        .spacing(8)
        .align_x(Alignment::Center)
        .push(icon::from_name("dialog-warning-symbolic").size(48).icon())
        .push(text::title4(fl!("category-missing-title")))
        .push(text::caption(fl!("category-missing-body", id = raw_id)))
        .push(
            button::standard(fl!("category-missing-back"))
                .on_press(Message::Open(Page::Inventory)),
        );

    container(content)
        .padding(32)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn item_card(item: &InventoryItem) -> Element<'static, Message> {
    let mut col = column()
        .spacing(4)
        .push(text::title4(item.name.clone()))
        .push(text::caption(fl!("category-item-quantity", count = item.quantity as i64)));

    col = col.push(
        row()
            .spacing(6)
            .push(text::caption(fl!("category-item-location")))
            .push(text::caption(item.location.clone())),
    );

    if !item.notes.is_empty() {
        col = col.push(
            row()
                .spacing(6)
                .push(text::caption(fl!("category-item-notes")))
                .push(text::caption(item.notes.clone())),
        );
    }

    if let Some(expires) = item.expires {
        col = col.push(
            row()
                .spacing(6)
                .push(text::caption(fl!("category-item-expires")))
                .push(text::caption(expires.format("%Y-%m-%d").to_string())),
        );
    }

    for manual in &item.manuals {
        col = col.push(
            row()
                .spacing(6)
                .align_y(Alignment::Center)
                .push(icon::from_name("text-x-generic-symbolic").size(12).icon())
                .push(text::caption(manual.file_name.clone()).size(11.0))
                .push(text::caption(attachment::human_size(manual.size())).size(11.0)),
        );
    }

    col = col.push(
        text::caption(fl!(
            "category-item-updated",
            date = item.last_updated.format("%Y-%m-%d").to_string()
        ))
        .size(11.0),
    );

    container(col)
        .padding(12)
        .width(Length::Fixed(CARD_WIDTH))
        .class(theme::Container::Card)
        .into()
}

fn item_form_view(form: &ItemForm) -> Element<'static, Message> {
    let mut col = column().spacing(8);

    col = col.push(text::title4(fl!("category-new-item")));

    col = col.push(
        text_input::text_input(fl!("category-item-name-placeholder"), form.name.clone())
            .on_input(Message::ItemFormName)
            .on_submit(|_| Message::ItemFormSubmit)
            .width(Length::Fill),
    );

    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("category-item-quantity-label")))
            .push(
                text_input::text_input("1", form.quantity.clone())
                    .on_input(Message::ItemFormQuantity)
                    .width(Length::Fixed(80.0)),
            ),
    );

    col = col.push(
        text_input::text_input(fl!("category-item-location-placeholder"), form.location.clone())
            .on_input(Message::ItemFormLocation)
            .width(Length::Fill),
    );

    col = col.push(
        text_input::text_input(fl!("category-item-notes-placeholder"), form.notes.clone())
            .on_input(Message::ItemFormNotes)
            .width(Length::Fill),
    );

    col = col.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(text::caption(fl!("category-item-expires-label")))
            .push(
                text_input::text_input("YYYY-MM-DD", form.expires.clone())
                    .on_input(Message::ItemFormExpires)
                    .width(Length::Fixed(140.0)),
            ),
    );

    // Instruction manuals: path input feeds an async file read; loaded
    // manuals sit on the draft until submit or cancel.
    col = col.push(text::caption(fl!("category-item-manuals")));
    let mut manual_row = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(
            text_input::text_input(fl!("category-manual-placeholder"), form.manual_path.clone())
                .on_input(Message::ItemFormManualPath)
                .on_submit(|_| Message::ItemFormAttachManual)
                .width(Length::Fill),
        );
    if form.loading_manual {
        manual_row = manual_row.push(text::caption(fl!("category-manual-loading")));
    } else {
        manual_row = manual_row.push(
            button::icon(icon::from_name("list-add-symbolic"))
                .on_press(Message::ItemFormAttachManual),
        );
    }
    col = col.push(manual_row);

    for (idx, manual) in form.manuals.iter().enumerate() {
        col = col.push(
            row()
                .spacing(6)
                .align_y(Alignment::Center)
                .push(icon::from_name("text-x-generic-symbolic").size(12).icon())
                .push(text::caption(manual.file_name.clone()).width(Length::Fill))
                .push(text::caption(attachment::human_size(manual.size())))
                .push(
                    button::icon(icon::from_name("edit-delete-symbolic"))
                        .on_press(Message::ItemFormRemoveManual(idx)),
                ),
        );
    }

    col = col.push(
        row()
            .spacing(8)
            .push(
                button::suggested(fl!("category-add-confirm"))
                    .on_press(Message::ItemFormSubmit),
            )
            .push(
                button::standard(fl!("form-cancel"))
                    .on_press(Message::CancelItemForm),
            ),
    );

    container(col)
        .padding(12)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}
