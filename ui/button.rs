use html::{classes, component, html, style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonType {
	Submit,
	Button,
	Reset,
}

/// A button, or a link styled as one when `href` is set. Submit buttons can carry a `name`/`value` pair so one form can tell several actions apart, and can target a form elsewhere on the page through `form`.
#[component]
pub fn Button(
	button_type: ButtonType,
	color: Option<String>,
	disabled: Option<bool>,
	form: Option<String>,
	href: Option<String>,
	id: Option<String>,
	name: Option<String>,
	value: Option<String>,
) {
	let button_type = match button_type {
		ButtonType::Submit => "submit",
		ButtonType::Button => "button",
		ButtonType::Reset => "reset",
	};
	let style = style! {
		"background-color" => color,
	};
	let disabled = disabled.unwrap_or(false);
	match href {
		Some(href) if !disabled => html! {
			<a class="button" href={href} id={id} style={style}>
				{children}
			</a>
		},
		Some(_) => html! {
			<span class={classes!("button", "button-disabled")} aria-disabled="true" id={id} style={style}>
				{children}
			</span>
		},
		None => html! {
			<button
				class="button"
				disabled={disabled}
				form={form}
				id={id}
				name={name}
				style={style}
				type={button_type}
				value={value}
			>
				{children}
			</button>
		},
	}
}

#[test]
fn test_button() {
	let html = html! {
		<Button
			button_type={ButtonType::Submit}
			color={None}
			disabled={Some(true)}
			form={Some("add-value".to_owned())}
			href={None}
			id={None}
			name={Some("action".to_owned())}
			value={Some("add_value".to_owned())}
		>
			{"Add"}
		</Button>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<button class="button" disabled form="add-value" name="action" type="submit" value="add_value">Add</button>"###);
	let html = html! {
		<Button
			button_type={ButtonType::Button}
			color={None}
			disabled={None}
			form={None}
			href={Some("/attributes/add".to_owned())}
			id={None}
			name={None}
			value={None}
		>
			{"Create attribute"}
		</Button>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<a class="button" href="/attributes/add">Create attribute</a>"###);
}
