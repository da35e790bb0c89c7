pub mod contact;
pub mod email_address;
mod sanitize;

pub use sanitize::bounded;
