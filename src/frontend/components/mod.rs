pub mod guard;
pub mod page_layout;
