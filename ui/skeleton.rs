use html::{component, html};

/// Placeholder for a value that has not loaded yet.
#[component]
pub fn Skeleton() {
	html! {
		<span aria-hidden="true" class="skeleton" data-test-id="skeleton" />
	}
}
