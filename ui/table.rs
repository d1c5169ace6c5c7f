use html::{classes, component, html, style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableLayout {
	Auto,
	Fixed,
}

#[component]
pub fn Table(layout: Option<TableLayout>, width: Option<String>) {
	let layout = layout.map(|layout| match layout {
		TableLayout::Auto => "auto",
		TableLayout::Fixed => "fixed",
	});
	let style = style! {
		"table-layout" => layout,
		"width" => width.unwrap_or_else(|| "auto".into()),
	};
	html! {
		<div class="table-wrapper">
			<table class="table" style={style}>
				{children}
			</table>
		</div>
	}
}

#[component]
pub fn ColGroup() {
	html! {
		<colgroup>{children}</colgroup>
	}
}

#[component]
pub fn Col(class: Option<String>, column: Option<String>) {
	html! {
		<col class={class} data-column={column} />
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">
			{children}
		</thead>
	}
}

#[component]
pub fn TableBody() {
	html! { <tbody>{children}</tbody> }
}

#[component]
pub fn TableFooter() {
	html! { <tfoot class="table-footer">{children}</tfoot> }
}

/// A table row. `href` makes the whole row navigate to the entity it shows, `key` identifies the row for tests and scripts.
#[component]
pub fn TableRow(
	color: Option<String>,
	href: Option<String>,
	key: Option<String>,
	selected: Option<bool>,
) {
	let style = style! {
		"background-color" => color,
	};
	let selected = selected.and_then(|selected| {
		if selected {
			Some("table-row-selected")
		} else {
			None
		}
	});
	let clickable = href.as_ref().map(|_| "table-row-clickable");
	html! {
		<tr
			class={classes!("table-row", selected, clickable)}
			data-href={href}
			data-key={key}
			style={style}
		>
			{children}
		</tr>
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Left,
	Center,
	Right,
}

fn text_align_class(text_align: Option<TextAlign>) -> Option<&'static str> {
	text_align.map(|text_align| match text_align {
		TextAlign::Left => "table-align-left",
		TextAlign::Center => "table-align-center",
		TextAlign::Right => "table-align-right",
	})
}

/// Which way the sort arrow next to a header points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArrow {
	Ascending,
	Descending,
}

impl SortArrow {
	pub fn as_str(self) -> &'static str {
		match self {
			SortArrow::Ascending => "asc",
			SortArrow::Descending => "desc",
		}
	}
}

#[component]
pub fn TableHeaderCell(
	arrow: Option<SortArrow>,
	class: Option<String>,
	col_span: Option<usize>,
	column: Option<String>,
	href: Option<String>,
	text_align: Option<TextAlign>,
) {
	let arrow = arrow.map(|arrow| {
		html! {
			<span class={classes!("sort-arrow", format!("sort-arrow-{}", arrow.as_str()))} data-direction={arrow.as_str()} />
		}
	});
	let content = match href {
		Some(href) => html! {
			<a class="table-header-cell-sort" href={href}>
				{children}
				{arrow}
			</a>
		},
		None => html! {
			<>
				{children}
				{arrow}
			</>
		},
	};
	html! {
		<th
			class={classes!("table-header-cell", text_align_class(text_align), class)}
			colspan={col_span.map(|col_span| col_span.to_string())}
			data-column={column}
		>
			{content}
		</th>
	}
}

/// A sortable header cell whose sorting can be unavailable. While disabled it shows `tooltip` on hover and renders neither the sort link nor the arrow.
#[component]
pub fn TooltipTableHeaderCell(
	arrow: Option<SortArrow>,
	class: Option<String>,
	column: Option<String>,
	disabled: bool,
	href: Option<String>,
	text_align: Option<TextAlign>,
	tooltip: String,
) {
	if disabled {
		html! {
			<th
				class={classes!("table-header-cell", "table-header-cell-disabled", text_align_class(text_align), class)}
				data-column={column}
				title={tooltip}
			>
				{children}
			</th>
		}
	} else {
		html! {
			<TableHeaderCell
				arrow={arrow}
				class={class}
				col_span={None}
				column={column}
				href={href}
				text_align={text_align}
			>
				{children}
			</TableHeaderCell>
		}
	}
}

#[component]
pub fn TableCell(
	class: Option<String>,
	col_span: Option<usize>,
	color: Option<String>,
	column: Option<String>,
	text_align: Option<TextAlign>,
) {
	let style = style! {
		"background-color" => color,
	};
	html! {
		<td
			class={classes!("table-cell", text_align_class(text_align), class)}
			colspan={col_span.map(|col_span| col_span.to_string())}
			data-column={column}
			style={style}
		>
			{children}
		</td>
	}
}
