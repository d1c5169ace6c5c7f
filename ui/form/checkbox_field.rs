use super::FieldLabel;
use html::{component, html};

/// A checkbox posted as `name=true` when checked. Unchecked boxes are absent from the form body.
#[component]
pub fn CheckboxField(
	checked: bool,
	disabled: bool,
	help_text: Option<String>,
	label: String,
	name: String,
) {
	html! {
		<FieldLabel html_for={None}>
			<input
				checked={checked}
				class="form-checkbox-field"
				disabled={disabled}
				name={name}
				type="checkbox"
				value="true"
			/>
			{label}
			{help_text.map(|help_text| html! {
				<span class="form-help-text">{help_text}</span>
			})}
		</FieldLabel>
	}
}
