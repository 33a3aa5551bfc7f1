use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;

use cosmic::app::{Core, Task as CosmicTask, context_drawer};
use cosmic::iced::Length;
use cosmic::widget::{button, column, container, dropdown, icon, nav_bar, row, scrollable, text, text_input};
use cosmic::{Application, Element, executor};

use crate::config::HomehubConfig;
use crate::core::attachment::{self, Attachment};
use crate::core::cleaning::{self, CleaningTask};
use crate::core::event::{self, CalendarEvent};
use crate::core::inventory::{self, Category, InventoryItem};
use crate::core::member::{self, FamilyMember, Role};
use crate::core::task::{self, Recurrence, StatusFilter, Task, CATEGORY_OPTIONS, ROOM_OPTIONS};
use crate::core::wishlist::{self, WishPriority, WishlistItem};
use crate::components::month_calendar::MonthCalendarState;
use crate::fl;
use crate::message::{ActiveView, Message, Page};
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextDrawerState {
    NewTask,
}

pub struct NewTaskForm {
    pub title: String,
    pub assignee: usize,
    pub due: String,
    pub recurring: usize,
    pub category: usize,
    pub room: usize,
}

impl Default for NewTaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            assignee: 0,
            due: String::new(),
            // Index into Recurrence::ALL: Weekly
            recurring: 1,
            category: 0,
            room: 0,
        }
    }
}

#[derive(Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub created_by: usize,
}

#[derive(Clone)]
pub struct MemberForm {
    pub name: String,
    pub role: Role,
    pub color: String,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: Role::Child,
            color: "#FF5733".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct WishForm {
    pub title: String,
    pub description: String,
    pub link: String,
    pub priority: WishPriority,
}

impl Default for WishForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            link: String::new(),
            priority: WishPriority::Medium,
        }
    }
}

pub struct ItemForm {
    pub name: String,
    pub quantity: String,
    pub location: String,
    pub notes: String,
    pub expires: String,
    pub manual_path: String,
    /// Manuals already loaded for this draft. Ownership moves to the item on
    /// submit; dropping the form releases them.
    pub manuals: Vec<Attachment>,
    pub loading_manual: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_string(),
            location: String::new(),
            notes: String::new(),
            expires: String::new(),
            manual_path: String::new(),
            manuals: Vec::new(),
            loading_manual: false,
        }
    }
}

#[derive(Clone, Default)]
pub struct CleaningForm {
    pub day: Option<usize>,
    pub task: String,
    pub description: String,
}

pub struct HomeHub {
    core: Core,
    nav_model: nav_bar::Model,
    config: HomehubConfig,
    cosmic_config: cosmic::cosmic_config::Config,
    active_view: ActiveView,

    // Records, seeded with sample data and held for the session only
    members: Vec<FamilyMember>,
    wishlists: HashMap<String, Vec<WishlistItem>>,
    stock: Vec<InventoryItem>,
    category_items: HashMap<String, Vec<InventoryItem>>,
    tasks: Vec<Task>,
    events: Vec<CalendarEvent>,
    cleaning_tasks: Vec<CleaningTask>,

    // Inventory view state
    search_query: String,
    category_filter: String,

    // Chore board view state
    status_filter: StatusFilter,
    assignee_filter: Option<String>,

    // Drawer & capture
    context_drawer_state: Option<ContextDrawerState>,
    new_task_form: NewTaskForm,

    // Calendar
    month_calendar: MonthCalendarState,
    event_form: Option<EventForm>,

    // Profiles
    member_form: Option<MemberForm>,
    wish_form: Option<WishForm>,

    // Category detail
    item_form: Option<ItemForm>,

    // Cleaning routine
    cleaning_form: Option<CleaningForm>,
}

pub struct Flags {
    pub config: HomehubConfig,
    pub cosmic_config: cosmic::cosmic_config::Config,
}

impl Application for HomeHub {
    type Executor = executor::Default;
    type Flags = Flags;
    type Message = Message;

    const APP_ID: &'static str = "dev.homehub.app";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, CosmicTask<Self::Message>) {
        let config = flags.config;
        let cosmic_config = flags.cosmic_config;

        // Build sidebar navigation model with section dividers
        let mut nav_model = nav_bar::Model::default();
        for page in Page::ALL {
            let mut item = nav_model.insert();
            item = item
                .text(page.title())
                .icon(icon::from_name(page.icon_name()).icon())
                .data(*page);
            if Page::SECTION_STARTS.contains(page) {
                item.divider_above(true);
            }
        }
        nav_model.activate_position(0);

        let app = Self {
            core,
            nav_model,
            config,
            cosmic_config,
            active_view: ActiveView::Page(Page::Dashboard),
            members: member::sample_members(),
            wishlists: HashMap::new(),
            stock: inventory::sample_stock(),
            category_items: HashMap::new(),
            tasks: task::sample_tasks(),
            events: event::sample_events(),
            cleaning_tasks: cleaning::sample_cleaning_tasks(),
            search_query: String::new(),
            category_filter: "All".to_string(),
            status_filter: StatusFilter::All,
            assignee_filter: None,
            context_drawer_state: None,
            new_task_form: NewTaskForm::default(),
            month_calendar: MonthCalendarState::default(),
            event_form: None,
            member_form: None,
            wish_form: None,
            item_form: None,
            cleaning_form: None,
        };

        (app, CosmicTask::none())
    }

    fn nav_model(&self) -> Option<&nav_bar::Model> {
        Some(&self.nav_model)
    }

    fn on_nav_select(&mut self, id: nav_bar::Id) -> CosmicTask<Message> {
        if let Some(page) = self.nav_model.data::<Page>(id).cloned() {
            self.reset_view_state();
            self.active_view = ActiveView::Page(page);
            self.nav_model.activate(id);
        }
        CosmicTask::none()
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        let header_row = row()
            .spacing(4)
            .push(
                button::icon(icon::from_name("list-add-symbolic"))
                    .on_press(Message::OpenNewTaskForm),
            )
            .push(
                button::icon(icon::from_name("emblem-system-symbolic"))
                    .on_press(Message::Open(Page::Settings)),
            );

        vec![header_row.into()]
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        let drawer_state = self.context_drawer_state?;

        match drawer_state {
            ContextDrawerState::NewTask => {
                Some(context_drawer::context_drawer(
                    container(scrollable(self.capture_form_view().padding(16)))
                        .width(Length::Fill),
                    Message::CloseNewTaskForm,
                ).title(fl!("task-form-title")))
            }
        }
    }

    fn on_escape(&mut self) -> CosmicTask<Message> {
        if self.context_drawer_state == Some(ContextDrawerState::NewTask) {
            self.context_drawer_state = None;
            self.core.window.show_context = false;
        }
        CosmicTask::none()
    }

    fn subscription(&self) -> cosmic::iced::Subscription<Message> {
        cosmic::iced::event::listen_with(|event, _status, _id| {
            match event {
                cosmic::iced::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                    key: cosmic::iced::keyboard::Key::Character(ref c),
                    modifiers,
                    ..
                }) if c.as_str() == "n" && modifiers.control() => {
                    Some(Message::OpenNewTaskForm)
                }
                _ => None,
            }
        })
    }

    fn update(&mut self, message: Message) -> CosmicTask<Message> {
        match message {
            // --- Navigation ---
            Message::Open(page) => {
                self.reset_view_state();
                self.active_view = ActiveView::Page(page);
                self.activate_nav(page);
            }

            Message::OpenProfile(id) => {
                // An unknown id falls back to the first profile rather than
                // erroring; only category routes have a hard error state.
                let resolved = member::find_member(&self.members, &id)
                    .or_else(|| self.members.first())
                    .map(|m| m.id.clone());
                if let Some(member_id) = resolved {
                    self.wishlists
                        .entry(member_id.clone())
                        .or_insert_with(wishlist::sample_wishlist);
                    self.reset_view_state();
                    self.active_view = ActiveView::Profile(member_id);
                    let page = self.active_view.page();
                    self.activate_nav(page);
                }
            }

            Message::OpenCategory(id) => {
                // Only known categories get an item collection; an unknown id
                // renders the error view over no data at all.
                if let Some(category) = Category::find(&id) {
                    self.category_items
                        .entry(id.clone())
                        .or_insert_with(|| inventory::sample_category_items(category.name));
                } else {
                    log::info!("Rejected unknown inventory category id {:?}", id);
                }
                self.reset_view_state();
                self.active_view = ActiveView::Category(id);
                let page = self.active_view.page();
                self.activate_nav(page);
            }

            // --- Inventory overview ---
            Message::SearchQueryChanged(q) => {
                self.search_query = q;
            }

            Message::CategoryFilterSelected(idx) => {
                let labels = inventory::filter_labels();
                if let Some(label) = labels.get(idx) {
                    self.category_filter = label.clone();
                }
            }

            // --- Category detail: add-item form ---
            Message::OpenNewItemForm => {
                self.item_form = Some(ItemForm::default());
            }

            Message::CancelItemForm => {
                // Dropping the form releases any manuals loaded into the draft.
                self.item_form = None;
            }

            Message::ItemFormName(value) => {
                if let Some(form) = &mut self.item_form {
                    form.name = value;
                }
            }

            Message::ItemFormQuantity(value) => {
                if let Some(form) = &mut self.item_form {
                    form.quantity = value;
                }
            }

            Message::ItemFormLocation(value) => {
                if let Some(form) = &mut self.item_form {
                    form.location = value;
                }
            }

            Message::ItemFormNotes(value) => {
                if let Some(form) = &mut self.item_form {
                    form.notes = value;
                }
            }

            Message::ItemFormExpires(value) => {
                if let Some(form) = &mut self.item_form {
                    form.expires = value;
                }
            }

            Message::ItemFormManualPath(value) => {
                if let Some(form) = &mut self.item_form {
                    form.manual_path = value;
                }
            }

            Message::ItemFormAttachManual => {
                if let Some(form) = &mut self.item_form {
                    if form.loading_manual {
                        return CosmicTask::none();
                    }
                    let path = PathBuf::from(form.manual_path.trim());
                    if path.as_os_str().is_empty() {
                        return CosmicTask::none();
                    }
                    form.loading_manual = true;
                    return CosmicTask::perform(
                        async move { attachment::load(path).await.map_err(|e| e.to_string()) },
                        |result| cosmic::Action::App(Message::ManualLoaded(result)),
                    );
                }
            }

            Message::ManualLoaded(result) => {
                // If the form is already gone the loaded bytes are dropped here.
                if let Some(form) = &mut self.item_form {
                    form.loading_manual = false;
                    match result {
                        Ok(manual) => {
                            log::debug!("Loaded manual {} ({} bytes)", manual.file_name, manual.size());
                            form.manuals.push(manual);
                            form.manual_path.clear();
                        }
                        Err(e) => log::warn!("Failed to load manual: {}", e),
                    }
                }
            }

            Message::ItemFormRemoveManual(idx) => {
                if let Some(form) = &mut self.item_form {
                    if idx < form.manuals.len() {
                        form.manuals.remove(idx);
                    }
                }
            }

            Message::ItemFormSubmit => {
                if let ActiveView::Category(id) = self.active_view.clone() {
                    let Some(category) = Category::find(&id) else {
                        return CosmicTask::none();
                    };
                    let today = chrono::Local::now().date_naive();
                    let mut added = false;
                    if let Some(form) = &mut self.item_form {
                        let quantity = form.quantity.trim().parse().unwrap_or(0);
                        let expires =
                            NaiveDate::parse_from_str(form.expires.trim(), "%Y-%m-%d").ok();
                        if let Some(items) = self.category_items.get_mut(&id) {
                            added = inventory::add_item(
                                items,
                                category.name,
                                &form.name,
                                quantity,
                                &form.location,
                                &form.notes,
                                expires,
                                &mut form.manuals,
                                today,
                            );
                        }
                    }
                    if added {
                        self.item_form = None;
                    }
                }
            }

            // --- Chore board ---
            Message::SetStatusFilter(filter) => {
                self.status_filter = filter;
            }

            Message::SelectAssignee(idx) => {
                self.assignee_filter = if idx == 0 {
                    None
                } else {
                    task::assignees(&self.tasks).get(idx - 1).cloned()
                };
            }

            Message::ToggleTaskDone(id) => {
                task::toggle_status(&mut self.tasks, id);
            }

            // --- Chore capture form ---
            Message::OpenNewTaskForm => {
                self.context_drawer_state = Some(ContextDrawerState::NewTask);
                self.core.window.show_context = true;
            }

            Message::CloseNewTaskForm => {
                self.context_drawer_state = None;
                self.core.window.show_context = false;
            }

            Message::TaskFormTitle(value) => {
                self.new_task_form.title = value;
            }

            Message::TaskFormAssignee(idx) => {
                self.new_task_form.assignee = idx;
            }

            Message::TaskFormDue(value) => {
                self.new_task_form.due = value;
            }

            Message::TaskFormRecurring(idx) => {
                self.new_task_form.recurring = idx;
            }

            Message::TaskFormCategory(idx) => {
                self.new_task_form.category = idx;
            }

            Message::TaskFormRoom(idx) => {
                self.new_task_form.room = idx;
            }

            Message::TaskFormSubmit => {
                let names = self.member_names();
                let form = &self.new_task_form;
                let assignee = names.get(form.assignee).cloned().unwrap_or_default();
                let recurring = Recurrence::ALL
                    .get(form.recurring)
                    .copied()
                    .unwrap_or(Recurrence::Weekly);
                let category = CATEGORY_OPTIONS.get(form.category).copied().unwrap_or("Household");
                let room = ROOM_OPTIONS.get(form.room).copied().unwrap_or("Kitchen");

                if task::add_task(
                    &mut self.tasks,
                    &form.title,
                    &assignee,
                    &form.due,
                    recurring,
                    category,
                    room,
                ) {
                    self.new_task_form = NewTaskForm::default();
                    self.context_drawer_state = None;
                    self.core.window.show_context = false;
                }
            }

            // --- Calendar ---
            Message::CalendarPrevMonth => {
                self.month_calendar.prev_month();
            }

            Message::CalendarNextMonth => {
                self.month_calendar.next_month();
            }

            Message::CalendarSelectDay(date) => {
                self.month_calendar.select_day(date);
            }

            Message::CreateEvent => {
                self.event_form = Some(EventForm::default());
            }

            Message::CancelEventForm => {
                self.event_form = None;
            }

            Message::SetEventTitle(value) => {
                if let Some(form) = &mut self.event_form {
                    form.title = value;
                }
            }

            Message::SetEventDate(value) => {
                if let Some(form) = &mut self.event_form {
                    form.date = value;
                }
            }

            Message::SetEventTime(value) => {
                if let Some(form) = &mut self.event_form {
                    form.time = value;
                }
            }

            Message::SetEventDescription(value) => {
                if let Some(form) = &mut self.event_form {
                    form.description = value;
                }
            }

            Message::SetEventCreator(idx) => {
                if let Some(form) = &mut self.event_form {
                    form.created_by = idx;
                }
            }

            Message::SubmitEvent => {
                let names = self.member_names();
                let mut added = false;
                if let Some(form) = &self.event_form {
                    let created_by = names.get(form.created_by).cloned().unwrap_or_default();
                    added = event::add_event(
                        &mut self.events,
                        &form.title,
                        &form.date,
                        &form.time,
                        &form.description,
                        &created_by,
                    );
                }
                if added {
                    self.event_form = None;
                }
            }

            // --- Profiles ---
            Message::OpenNewMemberForm => {
                self.member_form = Some(MemberForm::default());
            }

            Message::CancelMemberForm => {
                self.member_form = None;
            }

            Message::MemberFormName(value) => {
                if let Some(form) = &mut self.member_form {
                    form.name = value;
                }
            }

            Message::MemberFormRole(role) => {
                if let Some(form) = &mut self.member_form {
                    form.role = role;
                }
            }

            Message::MemberFormColor(value) => {
                if let Some(form) = &mut self.member_form {
                    form.color = value;
                }
            }

            Message::MemberFormSubmit => {
                let mut added = false;
                if let Some(form) = &self.member_form {
                    added = member::add_member(&mut self.members, &form.name, form.role, &form.color);
                }
                if added {
                    self.member_form = None;
                }
            }

            // --- Wishlist ---
            Message::OpenNewWishForm => {
                self.wish_form = Some(WishForm::default());
            }

            Message::CancelWishForm => {
                self.wish_form = None;
            }

            Message::WishFormTitle(value) => {
                if let Some(form) = &mut self.wish_form {
                    form.title = value;
                }
            }

            Message::WishFormDescription(value) => {
                if let Some(form) = &mut self.wish_form {
                    form.description = value;
                }
            }

            Message::WishFormLink(value) => {
                if let Some(form) = &mut self.wish_form {
                    form.link = value;
                }
            }

            Message::WishFormPriority(priority) => {
                if let Some(form) = &mut self.wish_form {
                    form.priority = priority;
                }
            }

            Message::WishFormSubmit => {
                if let ActiveView::Profile(id) = &self.active_view {
                    let mut added = false;
                    if let (Some(form), Some(list)) =
                        (&self.wish_form, self.wishlists.get_mut(id))
                    {
                        added = wishlist::add_item(
                            list,
                            &form.title,
                            &form.description,
                            &form.link,
                            form.priority,
                        );
                    }
                    if added {
                        self.wish_form = None;
                    }
                }
            }

            Message::RemoveWishlistItem(id) => {
                if let ActiveView::Profile(member_id) = &self.active_view {
                    if let Some(list) = self.wishlists.get_mut(member_id) {
                        wishlist::remove_item(list, id);
                    }
                }
            }

            // --- Cleaning routine ---
            Message::OpenNewCleaningForm => {
                self.cleaning_form = Some(CleaningForm::default());
            }

            Message::CancelCleaningForm => {
                self.cleaning_form = None;
            }

            Message::CleaningFormDay(idx) => {
                if let Some(form) = &mut self.cleaning_form {
                    form.day = Some(idx);
                }
            }

            Message::CleaningFormTask(value) => {
                if let Some(form) = &mut self.cleaning_form {
                    form.task = value;
                }
            }

            Message::CleaningFormDescription(value) => {
                if let Some(form) = &mut self.cleaning_form {
                    form.description = value;
                }
            }

            Message::CleaningFormSubmit => {
                let mut added = false;
                if let Some(form) = &self.cleaning_form {
                    let day = form.day.and_then(|idx| cleaning::DAYS.get(idx).copied());
                    added = cleaning::add_task(
                        &mut self.cleaning_tasks,
                        day,
                        &form.task,
                        &form.description,
                    );
                }
                if added {
                    self.cleaning_form = None;
                }
            }

            Message::ToggleCleaningDone(id) => {
                cleaning::toggle_completed(&mut self.cleaning_tasks, &id);
            }

            // --- Settings ---
            Message::SetHouseholdName(value) => {
                self.config.household_name = value;
                self.save_config();
            }

            Message::ToggleDebugLogging => {
                self.config.debug_logging = !self.config.debug_logging;
                homehub::set_debug_logging(self.config.debug_logging);
                self.save_config();
            }
        }

        CosmicTask::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.active_view {
            ActiveView::Page(Page::Dashboard) => {
                pages::dashboard::dashboard_view(&self.config.household_name)
            }
            ActiveView::Page(Page::Profiles) => {
                pages::profiles::profiles_view(&self.members, self.member_form.as_ref())
            }
            ActiveView::Profile(id) => {
                match member::find_member(&self.members, id).or_else(|| self.members.first()) {
                    Some(profile) => {
                        let wishlist = self
                            .wishlists
                            .get(&profile.id)
                            .map(Vec::as_slice)
                            .unwrap_or(&[]);
                        pages::profile_detail::profile_view(
                            profile,
                            wishlist,
                            self.wish_form.as_ref(),
                        )
                    }
                    None => pages::profiles::profiles_view(&self.members, self.member_form.as_ref()),
                }
            }
            ActiveView::Page(Page::Inventory) => pages::inventory::inventory_view(
                &self.stock,
                &self.search_query,
                &self.category_filter,
            ),
            ActiveView::Category(id) => {
                let items = self
                    .category_items
                    .get(id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                pages::category_detail::category_view(
                    id,
                    Category::find(id),
                    items,
                    self.item_form.as_ref(),
                )
            }
            ActiveView::Page(Page::Tasks) => pages::tasks::tasks_view(
                &self.tasks,
                self.status_filter,
                self.assignee_filter.as_deref(),
            ),
            ActiveView::Page(Page::Calendar) => pages::calendar::calendar_view(
                &self.events,
                &self.month_calendar,
                self.event_form.as_ref(),
                &self.member_names(),
            ),
            ActiveView::Page(Page::Cleaning) => {
                pages::cleaning::cleaning_view(&self.cleaning_tasks, self.cleaning_form.as_ref())
            }
            ActiveView::Page(Page::Settings) => pages::settings::settings_view(&self.config),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl HomeHub {
    fn capture_form_view(&self) -> column::Column<'_, Message> {
        let form = &self.new_task_form;
        let mut content = column().spacing(16);

        // Title
        content = content.push(text::title4(fl!("task-form-name")));
        content = content.push(
            text_input::text_input(fl!("task-form-name-placeholder"), &form.title)
                .on_input(Message::TaskFormTitle)
                .on_submit(|_| Message::TaskFormSubmit)
                .width(Length::Fill),
        );

        // Assignee
        let names = self.member_names();
        if !names.is_empty() {
            content = content.push(text::title4(fl!("task-form-assignee")));
            content = content.push(
                dropdown(names, Some(form.assignee), Message::TaskFormAssignee)
                    .width(Length::Fill),
            );
        }

        // Due date
        content = content.push(text::title4(fl!("task-form-due")));
        content = content.push(
            text_input::text_input("YYYY-MM-DD", &form.due)
                .on_input(Message::TaskFormDue)
                .width(Length::Fill),
        );

        // Recurrence
        content = content.push(text::title4(fl!("task-form-recurring")));
        let recur_labels: Vec<String> =
            Recurrence::ALL.iter().map(|r| r.label().to_string()).collect();
        content = content.push(
            dropdown(recur_labels, Some(form.recurring), Message::TaskFormRecurring)
                .width(Length::Fill),
        );

        // Category
        content = content.push(text::title4(fl!("task-form-category")));
        let category_labels: Vec<String> =
            CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect();
        content = content.push(
            dropdown(category_labels, Some(form.category), Message::TaskFormCategory)
                .width(Length::Fill),
        );

        // Room
        content = content.push(text::title4(fl!("task-form-room")));
        let room_labels: Vec<String> = ROOM_OPTIONS.iter().map(|r| r.to_string()).collect();
        content = content.push(
            dropdown(room_labels, Some(form.room), Message::TaskFormRoom)
                .width(Length::Fill),
        );

        // Submit button
        content = content.push(
            button::suggested(fl!("task-form-submit"))
                .on_press(Message::TaskFormSubmit)
                .width(Length::Fill),
        );

        content
    }

    fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    fn activate_nav(&mut self, page: Page) {
        let id = self
            .nav_model
            .iter()
            .find(|&id| self.nav_model.data::<Page>(id) == Some(&page));
        if let Some(id) = id {
            self.nav_model.activate(id);
        }
    }

    /// Per-page view state is page-lifetime-bound: leaving a page puts its
    /// filters and drafts back to their defaults. Dropping the item form also
    /// releases any manuals still held by the draft.
    fn reset_view_state(&mut self) {
        self.search_query.clear();
        self.category_filter = "All".to_string();
        self.status_filter = StatusFilter::All;
        self.assignee_filter = None;
        self.month_calendar = MonthCalendarState::default();
        self.event_form = None;
        self.member_form = None;
        self.wish_form = None;
        self.item_form = None;
        self.cleaning_form = None;
    }

    fn save_config(&self) {
        use cosmic::cosmic_config::CosmicConfigEntry;
        if let Err(e) = self.config.write_entry(&self.cosmic_config) {
            log::error!("Failed to save config: {:?}", e);
        }
    }
}
