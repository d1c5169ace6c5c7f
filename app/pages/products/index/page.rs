use super::product_list::{
	product_list, ProductListProps, AVAILABILITY, CHANNEL, PRICE, TYPE, UPDATED_AT,
};
use bazaar_app_common::{
	channels::Channel,
	list::columns::{attribute_column_value, ListColumn},
	messages::{MessageDescriptor, Messages},
	products::{GridAttribute, ProductListColumn},
	urls::{product_list_url, ProductListQuery},
};
use bazaar_app_layouts::app_layout::{AppLayout, AppLayoutInfo};
use bazaar_ui as ui;
use html::html;

pub const TITLE: MessageDescriptor = MessageDescriptor::described("7NFfmz", "Products", "header");
const SEARCH: MessageDescriptor = MessageDescriptor::new("QQTeIq", "Search Products...");
const ALL_CHANNELS: MessageDescriptor = MessageDescriptor::new("sDpcRF", "All channels");
const FILTER: MessageDescriptor = MessageDescriptor::new("5kQPEE", "Apply");
const COLUMNS: MessageDescriptor = MessageDescriptor::new("IjvlYb", "Columns");
const SAVE_COLUMNS: MessageDescriptor = MessageDescriptor::new("RmWmGa", "Save columns");
const SELECTED: MessageDescriptor = MessageDescriptor::described(
	"qu/hXD",
	"Selected {number} items",
	"number of selected products",
);
const DELETE: MessageDescriptor = MessageDescriptor::new("K3r6DQ", "Delete");
const CLEAR: MessageDescriptor = MessageDescriptor::new("rnc+6N", "Clear selection");

pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	pub channels: Vec<Channel>,
	pub list: ProductListProps,
}

pub fn render(props: Props, messages: &Messages) -> String {
	let Props {
		app_layout_info,
		channels,
		list,
	} = props;
	let filter_bar = filter_bar(&list.query, &channels, messages);
	let column_picker = column_picker(&list.columns, &list.grid_attributes, messages);
	let toolbar = bulk_toolbar(&list.query, messages);
	let html = html! {
		<AppLayout info={app_layout_info}>
			<ui::S1>
				<ui::SpaceBetween>
					<ui::H1 center={None}>{messages.format(&TITLE)}</ui::H1>
					{column_picker}
				</ui::SpaceBetween>
				<ui::Card title={None}>
					{filter_bar}
					{toolbar}
					{product_list(list, messages)}
				</ui::Card>
			</ui::S1>
		</AppLayout>
	};
	html.render_to_string()
}

/// Search and channel filters. Submitting starts again from the first page.
fn filter_bar(query: &ProductListQuery, channels: &[Channel], messages: &Messages) -> html::Node {
	let mut options = vec![ui::SelectFieldOption {
		text: messages.format(&ALL_CHANNELS),
		value: String::new(),
	}];
	options.extend(channels.iter().map(|channel| ui::SelectFieldOption {
		text: channel.name.clone(),
		value: channel.id.clone(),
	}));
	let hidden = |name: &'static str, value: Option<String>| {
		value.map(|value| html! { <input name={name} type="hidden" value={value} /> })
	};
	html! {
		<form class="filter-bar" method="get">
			{hidden("sort", query.list.sort.clone())}
			{hidden("asc", query.list.asc.map(|asc| asc.to_string()))}
			{hidden("attribute_id", query.attribute_id.clone())}
			<input
				aria-label={messages.format(&SEARCH)}
				class="filter-bar-search"
				name="query"
				placeholder={messages.format(&SEARCH)}
				type="search"
				value={query.list.query.clone()}
			/>
			<ui::SelectField
				disabled={false}
				error={None}
				label={messages.format(&CHANNEL)}
				name={"channel".to_owned()}
				options={options}
				value={query.channel.clone()}
			/>
			<ui::Button
				button_type={ui::ButtonType::Submit}
				color={None}
				disabled={None}
				form={None}
				href={None}
				id={None}
				name={None}
				value={None}
			>
				{messages.format(&FILTER)}
			</ui::Button>
		</form>
	}
}

/// Lets the user pick the visible optional columns. Posts every checked column, in table order.
fn column_picker(
	columns: &[String],
	grid_attributes: &[GridAttribute],
	messages: &Messages,
) -> html::Node {
	let static_columns = [
		(ProductListColumn::ProductType, &TYPE),
		(ProductListColumn::Availability, &AVAILABILITY),
		(ProductListColumn::Date, &UPDATED_AT),
		(ProductListColumn::Price, &PRICE),
	];
	let checkbox = |value: String, label: String| {
		let checked = columns.contains(&value);
		html! {
			<label class="column-picker-option">
				<input checked={checked} name="columns" type="checkbox" value={value} />
				{label}
			</label>
		}
	};
	let mut options = static_columns
		.iter()
		.map(|(column, label)| checkbox(column.key().to_owned(), messages.format(label)))
		.collect::<Vec<_>>();
	options.extend(grid_attributes.iter().map(|grid_attribute| {
		checkbox(
			attribute_column_value(&grid_attribute.id),
			grid_attribute.name.clone(),
		)
	}));
	html! {
		<details class="column-picker">
			<summary class="button">{messages.format(&COLUMNS)}</summary>
			<form class="column-picker-form" method="post">
				<input name="action" type="hidden" value="update_settings" />
				<input name="columns_form" type="hidden" value="true" />
				{options}
				<ui::Button
					button_type={ui::ButtonType::Submit}
					color={None}
					disabled={None}
					form={None}
					href={None}
					id={None}
					name={None}
					value={None}
				>
					{messages.format(&SAVE_COLUMNS)}
				</ui::Button>
			</form>
		</details>
	}
}

/// Shown while products are selected. Deletes the selection in one request.
fn bulk_toolbar(query: &ProductListQuery, messages: &Messages) -> Option<html::Node> {
	let selection = query.list.selection();
	if selection.is_empty() {
		return None;
	}
	let clear_href = product_list_url(&ProductListQuery {
		list: query.list.with_selection(&Default::default()),
		..query.clone()
	});
	Some(html! {
		<div class="bulk-toolbar">
			<span class="bulk-toolbar-count">
				{messages.format_with(&SELECTED, &[("number", selection.len().to_string())])}
			</span>
			<div class="bulk-toolbar-actions">
				<ui::Link class_name={None} href={Some(clear_href)} title={None}>
					{messages.format(&CLEAR)}
				</ui::Link>
				<form method="post">
					<input name="action" type="hidden" value="bulk_delete" />
					<ui::Button
						button_type={ui::ButtonType::Submit}
						color={Some("var(--red)".to_owned())}
						disabled={None}
						form={None}
						href={None}
						id={Some("bulk-delete".to_owned())}
						name={None}
						value={None}
					>
						{messages.format(&DELETE)}
					</ui::Button>
				</form>
			</div>
		</div>
	})
}
