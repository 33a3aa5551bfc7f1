use chrono::NaiveDate;

use crate::core::attachment::Attachment;
use crate::core::member::Role;
use crate::core::task::StatusFilter;
use crate::core::wishlist::WishPriority;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Open(Page),
    OpenProfile(String),
    OpenCategory(String),

    // Inventory overview
    SearchQueryChanged(String),
    CategoryFilterSelected(usize),

    // Category detail: add-item form
    OpenNewItemForm,
    CancelItemForm,
    ItemFormName(String),
    ItemFormQuantity(String),
    ItemFormLocation(String),
    ItemFormNotes(String),
    ItemFormExpires(String),
    ItemFormManualPath(String),
    ItemFormAttachManual,
    ManualLoaded(Result<Attachment, String>),
    ItemFormRemoveManual(usize),
    ItemFormSubmit,

    // Chores
    SetStatusFilter(StatusFilter),
    SelectAssignee(usize),
    ToggleTaskDone(u32),

    // Chore capture form (context drawer)
    OpenNewTaskForm,
    CloseNewTaskForm,
    TaskFormTitle(String),
    TaskFormAssignee(usize),
    TaskFormDue(String),
    TaskFormRecurring(usize),
    TaskFormCategory(usize),
    TaskFormRoom(usize),
    TaskFormSubmit,

    // Calendar
    CalendarPrevMonth,
    CalendarNextMonth,
    CalendarSelectDay(NaiveDate),
    CreateEvent,
    CancelEventForm,
    SetEventTitle(String),
    SetEventDate(String),
    SetEventTime(String),
    SetEventDescription(String),
    SetEventCreator(usize),
    SubmitEvent,

    // Profiles
    OpenNewMemberForm,
    CancelMemberForm,
    MemberFormName(String),
    MemberFormRole(Role),
    MemberFormColor(String),
    MemberFormSubmit,

    // Wishlist
    OpenNewWishForm,
    CancelWishForm,
    WishFormTitle(String),
    WishFormDescription(String),
    WishFormLink(String),
    WishFormPriority(WishPriority),
    WishFormSubmit,
    RemoveWishlistItem(u32),

    // Cleaning routine
    OpenNewCleaningForm,
    CancelCleaningForm,
    CleaningFormDay(usize),
    CleaningFormTask(String),
    CleaningFormDescription(String),
    CleaningFormSubmit,
    ToggleCleaningDone(String),

    // Settings
    SetHouseholdName(String),
    ToggleDebugLogging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Profiles,
    Inventory,
    Tasks,
    Calendar,
    Cleaning,
    Settings,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Profiles => "Profiles",
            Self::Inventory => "Inventory",
            Self::Tasks => "Tasks",
            Self::Calendar => "Calendar",
            Self::Cleaning => "Cleaning Routine",
            Self::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Dashboard => "user-home-symbolic",
            Self::Profiles => "system-users-symbolic",
            Self::Inventory => "package-x-generic-symbolic",
            Self::Tasks => "object-select-symbolic",
            Self::Calendar => "x-office-calendar-symbolic",
            Self::Cleaning => "starred-symbolic",
            Self::Settings => "emblem-system-symbolic",
        }
    }

    pub const ALL: &'static [Page] = &[
        Page::Dashboard,
        Page::Profiles,
        Page::Inventory,
        Page::Tasks,
        Page::Calendar,
        Page::Cleaning,
        Page::Settings,
    ];

    /// Pages that start a new sidebar section (divider drawn above them).
    pub const SECTION_STARTS: &'static [Page] = &[Page::Profiles, Page::Settings];
}

/// What the content area is showing. Detail views carry the raw path
/// parameter; validation happens where the view is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    Page(Page),
    Profile(String),
    Category(String),
}

impl ActiveView {
    /// The sidebar page this view belongs under.
    pub fn page(&self) -> Page {
        match self {
            Self::Page(page) => *page,
            Self::Profile(_) => Page::Profiles,
            Self::Category(_) => Page::Inventory,
        }
    }
}
