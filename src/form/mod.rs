pub mod draft;
pub mod modal;

pub use draft::{DATE_FORMAT, Draft, format_date, optional, parse_number, parse_optional_date};
pub use modal::{EntityForm, FormError, FormTarget, ModalView};
