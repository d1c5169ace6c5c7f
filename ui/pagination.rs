use html::{classes, component, html};

/// Labels of the pagination footer.
pub struct PaginationLabels {
	pub next: String,
	pub previous: String,
	pub rows: String,
}

/// Footer of a list table. The rows select posts `action=update_settings` with the chosen `rows_number`. The previous and next controls are links when a page exists in that direction, otherwise inert.
#[component]
pub fn TablePagination(
	choices: Vec<usize>,
	col_span: usize,
	labels: PaginationLabels,
	next_href: Option<String>,
	previous_href: Option<String>,
	rows_number: usize,
) {
	let options = choices
		.into_iter()
		.map(|choice| {
			html! {
				<option selected={choice == rows_number} value={choice.to_string()}>
					{choice.to_string()}
				</option>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<tr class="table-pagination">
			<td colspan={col_span.to_string()}>
				<div class="table-pagination-content">
					<form class="table-pagination-rows" method="post">
						<input name="action" type="hidden" value="update_settings" />
						<label class="table-pagination-rows-label">
							{labels.rows}
							<select name="rows_number">
								{options}
							</select>
						</label>
						<button class="table-pagination-rows-apply" type="submit">{"↵"}</button>
					</form>
					<div class="table-pagination-arrows">
						{page_link(previous_href, labels.previous, "previous")}
						{page_link(next_href, labels.next, "next")}
					</div>
				</div>
			</td>
		</tr>
	}
}

fn page_link(href: Option<String>, label: String, direction: &'static str) -> html::Node {
	let direction_class = format!("table-pagination-{}", direction);
	match href {
		Some(href) => html! {
			<a class={classes!("table-pagination-arrow", direction_class)} data-test-id={direction} href={href}>
				{label}
			</a>
		},
		None => html! {
			<span
				aria-disabled="true"
				class={classes!("table-pagination-arrow", "table-pagination-arrow-disabled", direction_class)}
				data-test-id={direction}
			>
				{label}
			</span>
		},
	}
}
