pub mod constants;
pub mod timeout;

pub use constants::*;
pub use timeout::{PageTimeout, is_timeout, with_page_timeout};
