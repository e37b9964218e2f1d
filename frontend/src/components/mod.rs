pub mod open_shift_modal;

pub use open_shift_modal::{OpenShiftHandler, OpenShiftModal};
