use html::{classes, component, html};

#[component]
pub fn TabBar() {
	html! {
		<div class="tab-bar" role="tablist">
			{children}
		</div>
	}
}

#[component]
pub fn TabLink(href: String, selected: bool) {
	let selected_class = if selected {
		Some("tab-bar-tab-selected")
	} else {
		None
	};
	html! {
		<a
			aria-selected={if selected { "true" } else { "false" }}
			class={classes!("tab-bar-tab", selected_class)}
			href={href}
			role="tab"
		>
			{children}
		</a>
	}
}
