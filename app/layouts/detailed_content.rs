use bazaar_ui as ui;
use html::{component, html};

/// The grid of a detail page: content on the left, a sidebar on the right, the savebar at the bottom.
#[component]
pub fn DetailedContent() {
	html! {
		<div class="detailed-content">
			{children}
		</div>
	}
}

/// The page header. With `href` set, a back arrow leads there.
#[component]
pub fn TopNav(href: Option<String>, title: String) {
	let back = href.map(|href| {
		html! {
			<a aria-label="back" class="top-nav-back" href={href}>{"←"}</a>
		}
	});
	html! {
		<div class="top-nav">
			<ui::SpaceBetween>
				<div class="top-nav-title">
					{back}
					<ui::H1 center={None}>{title}</ui::H1>
				</div>
				<div class="top-nav-actions">
					{children}
				</div>
			</ui::SpaceBetween>
		</div>
	}
}

#[component]
pub fn Content() {
	html! {
		<div class="detailed-content-main">{children}</div>
	}
}

#[component]
pub fn RightSidebar() {
	html! {
		<aside class="detailed-content-sidebar">{children}</aside>
	}
}
