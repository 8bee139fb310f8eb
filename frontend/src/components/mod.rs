pub mod error_list;
pub mod error_messages;
