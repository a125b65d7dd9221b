mod class_options;
mod health;
mod page;

pub use class_options::get_class_options;
pub use health::health_check;
pub use page::{SESSION_COOKIE, show_page, submit_form};
