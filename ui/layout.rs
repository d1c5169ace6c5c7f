use html::{classes, component, html};

#[component]
pub fn S1() {
	html! {
		<div class="s1">
			{children}
		</div>
	}
}

#[component]
pub fn S2() {
	html! {
		<div class="s2">{children}</div>
	}
}

#[component]
pub fn SpaceBetween() {
	html! {
		<div class="space-between">{children}</div>
	}
}

#[component]
pub fn H1(center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	html! {
		<h1 class={classes!("h1", center)}>
			{children}
		</h1>
	}
}

#[component]
pub fn H2(center: Option<bool>) {
	let center = center.and_then(|center| if center { Some("center") } else { None });
	html! {
		<h2 class={classes!("h2", center)}>
			{children}
		</h2>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}

#[component]
pub fn Card(title: Option<String>) {
	html! {
		<div class="card">
			{title.map(|title| html! {
				<div class="card-title">{title}</div>
			})}
			<div class="card-content">{children}</div>
		</div>
	}
}

#[component]
pub fn CardSpacer() {
	html! {
		<div class="card-spacer" />
	}
}
