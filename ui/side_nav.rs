use html::{classes, component, html};

#[component]
pub fn SideNav() {
	html! {
		<nav class="side-nav">
			{children}
		</nav>
	}
}

#[component]
pub fn SideNavItem(href: String, selected: bool) {
	let selected = if selected {
		Some("side-nav-item-selected")
	} else {
		None
	};
	html! {
		<a class={classes!("side-nav-item", selected)} href={href}>
			{children}
		</a>
	}
}
