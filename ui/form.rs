mod checkbox;
mod checkbox_field;
mod field_label;
mod form;
mod select_field;
mod text_area;
mod text_field;

pub use self::checkbox::*;
pub use self::checkbox_field::*;
pub use self::field_label::*;
pub use self::form::*;
pub use self::select_field::*;
pub use self::text_area::*;
pub use self::text_field::*;

use html::{component, html};

/// Error text shown under a field.
#[component]
pub fn FieldError(error: Option<String>) {
	error.map(|error| {
		html! {
			<span class="form-field-error" role="alert">{error}</span>
		}
	})
	.into()
}
