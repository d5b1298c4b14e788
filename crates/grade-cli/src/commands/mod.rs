pub mod course;
pub mod curriculum;
pub mod dispatch;
pub mod grade;
pub mod init;
pub mod person;
pub mod shared;
pub mod validation;
