use super::{FieldError, FieldLabel};
use html::{component, html};

pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

/// A select whose chosen option is the one matching `value`.
#[component]
pub fn SelectField(
	disabled: bool,
	error: Option<String>,
	label: String,
	name: String,
	options: Vec<SelectFieldOption>,
	value: Option<String>,
) {
	let options = options
		.into_iter()
		.map(|option| {
			let selected = value.as_deref() == Some(option.value.as_str());
			html! {
				<option selected={selected} value={option.value}>
					{option.text}
				</option>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<FieldLabel html_for={Some(name.clone())}>
			{label}
			<select class="form-select" disabled={disabled} id={name.clone()} name={name}>
				{options}
			</select>
			<FieldError error={error} />
		</FieldLabel>
	}
}
