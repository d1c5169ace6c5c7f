use super::{FieldError, FieldLabel};
use html::{component, html};

#[component]
pub fn TextArea(
	disabled: bool,
	error: Option<String>,
	label: String,
	name: String,
	placeholder: Option<String>,
	rows: usize,
	value: String,
) {
	html! {
		<FieldLabel html_for={Some(name.clone())}>
			{label}
			<textarea
				class="form-text-area"
				disabled={disabled}
				id={name.clone()}
				name={name}
				placeholder={placeholder}
				rows={rows.to_string()}
			>
				{value}
			</textarea>
			<FieldError error={error} />
		</FieldLabel>
	}
}
