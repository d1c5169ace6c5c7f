use html::{component, html};

/// A menu item whose action is a POST of `action` to the current page.
pub struct CardMenuItem {
	pub action: String,
	pub label: String,
	pub test_id: Option<String>,
}

/// Card header menu. Each item is its own one-button form so no script is needed.
#[component]
pub fn CardMenu(items: Vec<CardMenuItem>) {
	html! {
		<details class="card-menu">
			<summary aria-label="menu" class="card-menu-summary" role="button">
				{"…"}
			</summary>
			<div class="card-menu-list">
				{items.into_iter().map(|item| html! {
					<form class="card-menu-item" method="post">
						<button data-test-id={item.test_id} name="action" type="submit" value={item.action}>
							{item.label}
						</button>
					</form>
				}).collect::<Vec<_>>()}
			</div>
		</details>
	}
}
