use html::{classes, component, html, raw, style};

#[component]
fn Greeting() {
	html! {
		<div>{"Hello World"}</div>
	}
}

#[component]
fn Badge(label: String, color: Option<String>) {
	let style = style! {
		"background-color" => color,
	};
	html! {
		<span class="badge" style={style}>
			{label}
			{children}
		</span>
	}
}

#[test]
fn test_component() {
	let html = html!(<Greeting />).render_to_string();
	assert_eq!(html, "<div>Hello World</div>");
}

#[test]
fn test_component_with_props_and_children() {
	let html = html! {
		<Badge label={"New".to_owned()} color={Some("red".to_owned())}>
			<b>{"!"}</b>
		</Badge>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<span class="badge" style="background-color: red;">New<b>!</b></span>"#
	);
	let html = html! {
		<Badge label={"Old".to_owned()} color={None}></Badge>
	}
	.render_to_string();
	assert_eq!(html, r#"<span class="badge">Old</span>"#);
}

#[test]
fn test_escaping() {
	let name = "<script>alert('x')</script>".to_owned();
	let html = html! {
		<p title={name.clone()}>{name}</p>
	}
	.render_to_string();
	assert_eq!(
		html,
		"<p title=\"&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;\">&lt;script&gt;alert(&apos;x&apos;)&lt;/script&gt;</p>"
	);
	let html = html!(<div>{raw!("<br />")}</div>).render_to_string();
	assert_eq!(html, "<div><br /></div>");
}

#[test]
fn test_attributes() {
	let disabled = Some(true);
	let html = html! {
		<input data-test-id="name" disabled readonly={false} type="text" value={None::<String>} />
	}
	.render_to_string();
	assert_eq!(html, r#"<input data-test-id="name" disabled type="text" />"#);
}

#[test]
fn test_fragments_options_and_vecs() {
	let items = vec!["a", "b"];
	let html = html! {
		<>
			{items.iter().map(|item| html! { <li>{*item}</li> }).collect::<Vec<_>>()}
			{None::<String>}
			{Some("c")}
		</>
	}
	.render_to_string();
	assert_eq!(html, "<li>a</li><li>b</li>c");
}

#[test]
fn test_classes() {
	let selected: Option<&str> = Some("selected");
	let hidden: Option<&str> = None;
	assert_eq!(classes!("row", selected, hidden), "row selected");
	assert_eq!(classes!(hidden), "");
	assert_eq!(style! { "width" => None::<String> }, None);
}
