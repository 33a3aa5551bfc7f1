use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, dropdown, flex_row, icon, row, scrollable, text, text_input};
use cosmic::{Element, theme};

use crate::core::inventory::{self, InventoryItem, CATEGORIES};
use crate::fl;
use crate::message::Message;

// Column widths for consistent alignment
const COL_CATEGORY: f32 = 110.0;
const COL_QUANTITY: f32 = 80.0;
const COL_LOCATION: f32 = 130.0;
const COL_UPDATED: f32 = 100.0;

const CARD_WIDTH: f32 = 200.0;

fn col(width: f32, content: impl Into<Element<'static, Message>>) -> Element<'static, Message> {
    container(content).width(Length::Fixed(width)).into()
}

pub fn inventory_view(
    stock: &[InventoryItem],
    search: &str,
    category_filter: &str,
) -> Element<'static, Message> {
    let mut content = column().spacing(12);

    // Search + category filter row
    let filter_labels = inventory::filter_labels();
    let selected = filter_labels.iter().position(|l| l == category_filter);
    content = content.push(
        row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(
                text_input::text_input(fl!("inventory-search-placeholder"), search.to_string())
                    .on_input(Message::SearchQueryChanged)
                    .width(Length::Fill),
            )
            .push(
                dropdown(filter_labels, selected, Message::CategoryFilterSelected)
                    .width(Length::Shrink),
            ),
    );

    // Stock table
    let filtered: Vec<&InventoryItem> = stock
        .iter()
        .filter(|item| inventory::matches(item, search, category_filter))
        .collect();

    let mut table = column().spacing(4).width(Length::Fill).push(header_row());
    if filtered.is_empty() {
        table = table.push(
            container(text::caption(fl!("inventory-empty")))
                .padding(16)
                .center_x(Length::Fill)
                .width(Length::Fill),
        );
    } else {
        for item in filtered {
            table = table.push(item_row(item));
        }
    }
    content = content.push(
        container(table)
            .padding(8)
            .width(Length::Fill)
            .class(theme::Container::Card),
    );

    // Fixed category shortcuts
    content = content.push(text::title4(fl!("inventory-categories")));
    let cards: Vec<Element<'static, Message>> = CATEGORIES
        .iter()
        .map(|category| {
            let card = column()
                .spacing(4)
                .align_x(Alignment::Center)
                .push(icon::from_name(category.icon).size(32).icon())
                .push(text::title4(category.name))
                .push(text::caption(fl!(
                    "inventory-category-count",
                    count = category.item_count as i64
                )))
                .push(
                    button::standard(fl!("inventory-category-open"))
                        .on_press(Message::OpenCategory(category.id.to_string()))
                        .width(Length::Fill),
                );

            container(card)
                .padding(12)
                .width(Length::Fixed(CARD_WIDTH))
                .class(theme::Container::Card)
                .into()
        })
        .collect();
    content = content.push(flex_row(cards).row_spacing(12).column_spacing(12));

    container(scrollable(content.padding(16).width(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn header_row() -> Element<'static, Message> {
    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(container(text::caption(fl!("inventory-col-item"))).width(Length::Fill))
        .push(col(COL_CATEGORY, text::caption(fl!("inventory-col-category"))))
        .push(col(COL_QUANTITY, text::caption(fl!("inventory-col-quantity"))))
        .push(col(COL_LOCATION, text::caption(fl!("inventory-col-location"))))
        .push(col(COL_UPDATED, text::caption(fl!("inventory-col-updated"))))
        .width(Length::Fill)
        .into()
}

fn item_row(item: &InventoryItem) -> Element<'static, Message> {
    let name = row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(icon::from_name("package-x-generic-symbolic").size(16).icon())
        .push(text::body(item.name.clone()));

    row()
        .spacing(8)
        .align_y(Alignment::Center)
        .push(container(name).width(Length::Fill))
        .push(col(COL_CATEGORY, text::body(item.category.clone())))
        .push(col(COL_QUANTITY, text::body(item.quantity.to_string())))
        .push(col(COL_LOCATION, text::body(item.location.clone())))
        .push(col(COL_UPDATED, text::body(item.last_updated.format("%Y-%m-%d").to_string())))
        .width(Length::Fill)
        .into()
}
