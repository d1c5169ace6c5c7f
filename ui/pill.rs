use html::{classes, component, html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PillColor {
	Success,
	Info,
	Warning,
	Error,
	Neutral,
}

impl PillColor {
	pub fn as_str(self) -> &'static str {
		match self {
			PillColor::Success => "success",
			PillColor::Info => "info",
			PillColor::Warning => "warning",
			PillColor::Error => "error",
			PillColor::Neutral => "neutral",
		}
	}
}

#[component]
pub fn Pill(color: PillColor, label: String) {
	let color_class = format!("pill-{}", color.as_str());
	html! {
		<span class={classes!("pill", color_class)}>{label}</span>
	}
}

#[test]
fn test_pill() {
	let html = html!(<Pill color={PillColor::Warning} label={"Unfulfilled".to_owned()} />)
		.render_to_string();
	insta::assert_snapshot!(html, @r###"<span class="pill pill-warning">Unfulfilled</span>"###);
}
