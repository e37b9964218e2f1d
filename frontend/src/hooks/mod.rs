pub mod use_shift_status;

pub use use_shift_status::use_shift_status;
