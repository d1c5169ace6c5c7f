use html::{classes, component, html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
	Info,
	Success,
	Warning,
	Danger,
}

impl Level {
	pub fn class_suffix(self) -> &'static str {
		match self {
			Level::Info => "info",
			Level::Success => "success",
			Level::Warning => "warning",
			Level::Danger => "danger",
		}
	}
}

#[component]
pub fn Alert(level: Level, title: Option<String>) {
	let level_class = format!("alert-level-{}", level.class_suffix());
	html! {
		<div class={classes!("alert-wrapper", level_class)} role="alert">
			{title.map(|title| html! {
				<div class="alert-title">{title}</div>
			})}
			{children}
		</div>
	}
}
