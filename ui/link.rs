use html::{classes, component, html};

#[component]
pub fn Link(class_name: Option<String>, href: Option<String>, title: Option<String>) {
	html! {
		<a class={classes!("link", class_name)} href={href} title={title}>
			{children}
		</a>
	}
}

/// A link that leaves the dashboard. Opens in a new tab without handing the opener to the target.
#[component]
pub fn ExternalLink(class_name: Option<String>, href: String) {
	html! {
		<a
			class={classes!("link", "external-link", class_name)}
			href={href}
			rel="noopener noreferrer"
			target="_blank"
		>
			{children}
		</a>
	}
}
