pub mod delete_confirmation;
pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod notification_bar;
pub mod popup;
pub mod record_form;
pub mod screen_title;
