pub mod calendar;
pub mod comment;
pub mod event_card;
pub mod event_detail;
pub mod event_form;
pub mod event_modal;
pub mod loading;
pub mod navbar;
pub mod page;
pub mod search;
pub mod toast;

pub use calendar::Calendar;
pub use comment::{CommentForm, CommentItem, CommentList};
pub use event_card::{EventCard, EventGrid};
pub use event_detail::EventDetailPanel;
pub use event_form::CreateEventForm;
pub use event_modal::EventDetailModal;
pub use loading::Loading;
pub use navbar::Navbar;
pub use page::Page;
pub use search::EventFiltersForm;
pub use toast::ToastStack;
