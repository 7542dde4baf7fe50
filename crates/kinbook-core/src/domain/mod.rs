pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::{validate_birthday, Birthday, BIRTHDAY_FORMAT, MAX_BIRTHDAY_AGE_DAYS};
pub use name::{validate_name, Name, MIN_NAME_CHARS};
pub use phone::{validate_phone, PhoneNumber, PHONE_DIGITS};
pub use record::Record;
