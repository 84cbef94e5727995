pub mod back_navigation;
pub mod notification;

pub use back_navigation::BackNavigation;
pub use notification::Notification;
