use super::{FieldError, FieldLabel};
use html::{classes, component, html};

#[component]
pub fn TextField(
	disabled: bool,
	error: Option<String>,
	help_text: Option<String>,
	label: String,
	name: String,
	placeholder: Option<String>,
	value: String,
) {
	let error_class = error.as_ref().map(|_| "form-text-field-error");
	let help_text = help_text.map(|help_text| {
		html! {
			<span class="form-help-text">{help_text}</span>
		}
	});
	html! {
		<FieldLabel html_for={Some(name.clone())}>
			{label}
			<input
				class={classes!("form-text-field", error_class)}
				disabled={disabled}
				id={name.clone()}
				name={name}
				placeholder={placeholder}
				spellcheck={"false"}
				value={value}
			/>
			<FieldError error={error} />
			{help_text}
		</FieldLabel>
	}
}
