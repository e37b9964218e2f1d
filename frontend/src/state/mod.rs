pub mod open_shift_form;
pub mod success_banner;

pub use open_shift_form::{ModalView, OpenShiftFormState};
pub use success_banner::BannerClock;
