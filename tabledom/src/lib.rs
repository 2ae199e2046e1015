pub mod element;
pub mod event;
pub mod markup;
pub mod query;

pub use element::{Content, Element};
pub use event::{Event, Notification, NotificationQueue};
pub use query::{child_index, find_element, find_element_mut, query_class};
