use html::{classes, component, html};

/// A checkbox that toggles by following `href`. Used for row selection in list tables, where each toggle is a navigation carrying the new selection.
#[component]
pub fn Checkbox(checked: bool, disabled: bool, href: Option<String>, label: String) {
	let checked_class = if checked { Some("checkbox-checked") } else { None };
	let class = classes!("checkbox", checked_class);
	let mark = html! {
		<input aria-label={label} checked={checked} disabled={true} tabindex="-1" type="checkbox" />
	};
	match href {
		Some(href) if !disabled => html! {
			<a class={class} data-test-id="checkbox" href={href} role="checkbox" aria-checked={if checked { "true" } else { "false" }}>
				{mark}
			</a>
		},
		_ => html! {
			<span class={class} data-test-id="checkbox" aria-disabled="true">
				{mark}
			</span>
		},
	}
}
