use crate::{Button, ButtonType};
use html::{component, html};

/// Labels shown on the savebar buttons.
pub struct SavebarLabels {
	pub cancel: String,
	pub delete: String,
	pub save: String,
}

/// The sticky bar at the bottom of a detail page. The save and delete buttons submit the form named by `form` with `action=submit` and `action=delete`.
#[component]
pub fn Savebar(
	cancel_href: String,
	disabled: bool,
	form: String,
	labels: SavebarLabels,
	show_delete: bool,
) {
	let delete_button = if show_delete {
		Some(html! {
			<Button
				button_type={ButtonType::Submit}
				color={Some("var(--red)".to_owned())}
				disabled={Some(disabled)}
				form={Some(form.clone())}
				href={None}
				id={Some("savebar-delete".to_owned())}
				name={Some("action".to_owned())}
				value={Some("delete".to_owned())}
			>
				{labels.delete}
			</Button>
		})
	} else {
		None
	};
	html! {
		<div class="savebar">
			<div class="savebar-start">{delete_button}</div>
			<div class="savebar-end">
				<a class="savebar-cancel" href={cancel_href}>{labels.cancel}</a>
				<Button
					button_type={ButtonType::Submit}
					color={None}
					disabled={Some(disabled)}
					form={Some(form)}
					href={None}
					id={Some("savebar-save".to_owned())}
					name={Some("action".to_owned())}
					value={Some("submit".to_owned())}
				>
					{labels.save}
				</Button>
			</div>
		</div>
	}
}
