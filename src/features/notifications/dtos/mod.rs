mod notification_dto;

pub use notification_dto::{EmailReceiptDto, SendEmailDto};
