use crate::helpers::pagination_labels;
use bazaar_app_common::{
	attributes::{Attribute, AttributeListSortField},
	list::{
		pagination::PageInfo,
		rows::{render_collection, Entity},
		settings::ROWS_NUMBER_CHOICES,
		sort::{HeaderSort, Sort},
	},
	messages::{MessageDescriptor, Messages},
	urls::{attribute_add_url, attribute_list_sort, attribute_list_url, attribute_url, ListQuery},
};
use bazaar_app_layouts::{
	app_layout::{AppLayout, AppLayoutInfo},
	detailed_content::TopNav,
};
use bazaar_ui as ui;
use html::{html, Node};

pub const TITLE: MessageDescriptor =
	MessageDescriptor::described("+xTpT1", "Attributes", "page title");
const CREATE: MessageDescriptor =
	MessageDescriptor::described("IGvQ8k", "Create attribute", "button");
const SEARCH: MessageDescriptor = MessageDescriptor::new("1jE2Gg", "Search Attributes...");
const APPLY: MessageDescriptor = MessageDescriptor::new("5kQPEE", "Apply");
const SLUG: MessageDescriptor =
	MessageDescriptor::described("oJkeS6", "Attribute Code", "attribute's slug short code label");
const NAME: MessageDescriptor =
	MessageDescriptor::described("HjUoHK", "Default Label", "attribute's label");
const VISIBLE: MessageDescriptor =
	MessageDescriptor::described("k6WDZl", "Visible", "attribute is visible");
const SEARCHABLE: MessageDescriptor =
	MessageDescriptor::described("yKuba7", "Searchable", "attribute can be searched in dashboard");
const YES: MessageDescriptor = MessageDescriptor::described("dUAYc1", "Yes", "attribute is visible");
const NO: MessageDescriptor = MessageDescriptor::described("7qSMBD", "No", "attribute is not visible");
const NO_ATTRIBUTES: MessageDescriptor = MessageDescriptor::new("ztQgD8", "No attributes found");

const NUMBER_OF_COLUMNS: usize = 4;

pub struct Props {
	pub app_layout_info: AppLayoutInfo,
	/// `None` while the attributes have not loaded.
	pub attributes: Option<Vec<Attribute>>,
	pub page_info: PageInfo,
	pub query: ListQuery,
	pub rows_number: usize,
}

pub fn render(props: Props, messages: &Messages) -> String {
	let Props {
		app_layout_info,
		attributes,
		page_info,
		query,
		rows_number,
	} = props;
	let html = html! {
		<AppLayout info={app_layout_info}>
			<ui::S1>
				<TopNav href={None} title={messages.format(&TITLE)}>
					<ui::Button
						button_type={ui::ButtonType::Button}
						color={None}
						disabled={None}
						form={None}
						href={Some(attribute_add_url())}
						id={Some("create-attribute-button".to_owned())}
						name={None}
						value={None}
					>
						{messages.format(&CREATE)}
					</ui::Button>
				</TopNav>
				<ui::Card title={None}>
					{search_bar(&query, messages)}
					{attribute_list(attributes, page_info, &query, rows_number, messages)}
				</ui::Card>
			</ui::S1>
		</AppLayout>
	};
	html.render_to_string()
}

fn search_bar(query: &ListQuery, messages: &Messages) -> Node {
	let hidden = |name: &'static str, value: Option<String>| {
		value.map(|value| html! { <input name={name} type="hidden" value={value} /> })
	};
	html! {
		<form class="filter-bar" method="get">
			{hidden("sort", query.sort.clone())}
			{hidden("asc", query.asc.map(|asc| asc.to_string()))}
			<input
				aria-label={messages.format(&SEARCH)}
				class="filter-bar-search"
				name="query"
				placeholder={messages.format(&SEARCH)}
				type="search"
				value={query.query.clone()}
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
				{messages.format(&APPLY)}
			</ui::Button>
		</form>
	}
}

fn attribute_list(
	attributes: Option<Vec<Attribute>>,
	page_info: PageInfo,
	query: &ListQuery,
	rows_number: usize,
	messages: &Messages,
) -> Node {
	let sort = attribute_list_sort(query);
	let sort_href = |sort: Sort<AttributeListSortField>| attribute_list_url(&query.with_sort(sort));
	let header_cell = |field: AttributeListSortField, label: &MessageDescriptor, text_align: Option<ui::TextAlign>| {
		let header_sort = HeaderSort::new(&sort, field, true, &sort_href, String::new);
		html! {
			<ui::TableHeaderCell
				arrow={header_sort.arrow()}
				class={None}
				col_span={None}
				column={None}
				href={header_sort.href()}
				text_align={text_align}
			>
				{messages.format(label)}
			</ui::TableHeaderCell>
		}
	};
	let yes_no = |value: bool| {
		if value {
			messages.format(&YES)
		} else {
			messages.format(&NO)
		}
	};
	let cell = |content: Option<String>, text_align: Option<ui::TextAlign>| {
		let content = match content {
			Some(content) => html! { <>{content}</> },
			None => html! { <ui::Skeleton /> },
		};
		html! {
			<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={text_align}>
				{content}
			</ui::TableCell>
		}
	};
	let rows = render_collection(
		attributes.as_deref(),
		|attribute| {
			let key = attribute.map_or("skeleton", |attribute| attribute.id()).to_owned();
			html! {
				<ui::TableRow
					color={None}
					href={attribute.map(|attribute| attribute_url(attribute.id()))}
					key={Some(key)}
					selected={None}
				>
					{cell(attribute.map(|attribute| attribute.slug.clone()), None)}
					{cell(attribute.map(|attribute| attribute.name.clone()), None)}
					{cell(
						attribute.map(|attribute| yes_no(attribute.visible_in_storefront)),
						Some(ui::TextAlign::Center),
					)}
					{cell(
						attribute.map(|attribute| yes_no(attribute.filterable_in_dashboard)),
						Some(ui::TextAlign::Center),
					)}
				</ui::TableRow>
			}
		},
		|| {
			html! {
				<ui::TableRow color={None} href={None} key={Some("empty".to_owned())} selected={None}>
					<ui::TableCell
						class={None}
						col_span={Some(NUMBER_OF_COLUMNS)}
						color={None}
						column={None}
						text_align={None}
					>
						{messages.format(&NO_ATTRIBUTES)}
					</ui::TableCell>
				</ui::TableRow>
			}
		},
	);
	let page_href = |request| attribute_list_url(&query.with_page(request));
	html! {
		<div class="attribute-list">
			<ui::Table layout={None} width={Some("100%".to_owned())}>
				<ui::TableHeader>
					<ui::TableRow color={None} href={None} key={None} selected={None}>
						{header_cell(AttributeListSortField::Slug, &SLUG, None)}
						{header_cell(AttributeListSortField::Name, &NAME, None)}
						{header_cell(AttributeListSortField::Visible, &VISIBLE, Some(ui::TextAlign::Center))}
						{header_cell(AttributeListSortField::Searchable, &SEARCHABLE, Some(ui::TextAlign::Center))}
					</ui::TableRow>
				</ui::TableHeader>
				<ui::TableFooter>
					<ui::TablePagination
						choices={ROWS_NUMBER_CHOICES.to_vec()}
						col_span={NUMBER_OF_COLUMNS}
						labels={pagination_labels(messages)}
						next_href={page_info.request_next().map(&page_href)}
						previous_href={page_info.request_previous().map(&page_href)}
						rows_number={rows_number}
					/>
				</ui::TableFooter>
				<ui::TableBody>{rows}</ui::TableBody>
			</ui::Table>
		</div>
	}
}
