use html::{component, html};

#[component]
pub fn Form(action: Option<String>, id: Option<String>, post: bool) {
	let method = if post { Some("post") } else { None };
	html! {
		<form
			action={action}
			autocomplete="off"
			class="form"
			id={id}
			method={method}
		>
			{children}
		</form>
	}
}
