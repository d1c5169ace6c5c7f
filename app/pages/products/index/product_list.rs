use crate::helpers::pagination_labels;
use bazaar_app_common::{
	channels::{channel_availability_color, channel_availability_label, ChannelListing},
	list::{
		columns::{DisplayColumns, ResolvedColumn},
		pagination::PageInfo,
		rows::{render_collection, Entity},
		settings::ROWS_NUMBER_CHOICES,
		sort::{ArrowDirection, HeaderSort, Sort},
	},
	messages::{MessageDescriptor, Messages},
	products::{GridAttribute, Product, ProductListColumn, ProductListSortField},
	urls::{product_list_url, product_url, ProductListQuery},
};
use bazaar_ui as ui;
use html::{component, html, Node};

const NAME: MessageDescriptor = MessageDescriptor::described("VQLIXd", "Name", "product");
pub const TYPE: MessageDescriptor = MessageDescriptor::described("k+HcTv", "Type", "product type");
pub const AVAILABILITY: MessageDescriptor =
	MessageDescriptor::described("+Ct3hC", "Availability", "product channels");
pub const UPDATED_AT: MessageDescriptor =
	MessageDescriptor::described("Nm6G8m", "Last updated", "product updated at");
pub const PRICE: MessageDescriptor = MessageDescriptor::described("3YHY2/", "Price", "product price");
const NO_FILTER_SELECTED: MessageDescriptor = MessageDescriptor::described(
	"ErJQNP",
	"You need to set {filterName} filter to enable sorting by this field",
	"tooltip on a disabled sortable column",
);
pub const CHANNEL: MessageDescriptor = MessageDescriptor::new("ccXLVi", "Channel");
const NO_PRODUCTS: MessageDescriptor = MessageDescriptor::new("Q1Uzbb", "No products found");
const SELECT_PRODUCT: MessageDescriptor = MessageDescriptor::new("2EqZ+x", "Select product");
const SELECT_ALL: MessageDescriptor = MessageDescriptor::new("Pe3C8D", "Select all");
const CHANNELS: MessageDescriptor = MessageDescriptor::described(
	"DBRqFZ",
	"{count} channels",
	"number of channels a product is listed in",
);
const NO_CHANNELS: MessageDescriptor = MessageDescriptor::new("Fh5qfz", "No channels");

pub struct ProductListProps {
	pub columns: Vec<String>,
	pub grid_attributes: Vec<GridAttribute>,
	pub page_info: PageInfo,
	/// `None` while the products have not loaded.
	pub products: Option<Vec<Product>>,
	pub query: ProductListQuery,
	pub rows_number: usize,
}

/// The product table. Every optional column comes from one resolved column list, so the column group, the header and every row always agree.
pub fn product_list(props: ProductListProps, messages: &Messages) -> Node {
	let ProductListProps {
		columns,
		grid_attributes,
		page_info,
		products,
		query,
		rows_number,
	} = props;
	let display_columns = DisplayColumns::new(&columns);
	let resolved = display_columns.resolve::<ProductListColumn>();
	let show_checkbox = products.as_ref().map_or(true, |products| !products.is_empty());
	let number_of_columns = 1 + show_checkbox as usize + resolved.len();
	let channel_id = query.channel.as_deref();
	let sort = query.sort();
	let selection = query.list.selection();
	let name_class = if resolved.len() > 4 {
		Some("product-list-name product-list-name-fixed".to_owned())
	} else {
		Some("product-list-name".to_owned())
	};
	let sort_href = |sort: Sort<ProductListSortField>, attribute_id: Option<&str>| {
		product_list_url(&ProductListQuery {
			list: query.list.with_sort(sort),
			attribute_id: attribute_id.map(ToOwned::to_owned),
			channel: query.channel.clone(),
		})
	};
	let hint = || {
		messages.format_with(
			&NO_FILTER_SELECTED,
			&[("filterName", messages.format(&CHANNEL))],
		)
	};
	let header_sort = |field: ProductListSortField| {
		HeaderSort::new(
			&sort,
			field,
			channel_id.is_some(),
			|sort| sort_href(sort, None),
			&hint,
		)
	};

	let col_group = html! {
		<ui::ColGroup>
			{if show_checkbox {
				Some(html! { <ui::Col class={Some("product-list-checkbox".to_owned())} column={None} /> })
			} else {
				None
			}}
			<ui::Col class={name_class.clone()} column={Some("name".to_owned())} />
			{resolved.iter().map(|column| html! {
				<ui::Col class={Some(column_class(column).to_owned())} column={Some(column.key())} />
			}).collect::<Vec<_>>()}
		</ui::ColGroup>
	};

	let loaded_ids: Vec<&str> = products
		.iter()
		.flatten()
		.map(|product| product.id())
		.collect();
	let select_all = if show_checkbox {
		let toggled = selection.toggled_all(loaded_ids.iter().copied());
		let href = product_list_url(&ProductListQuery {
			list: query.list.with_selection(&toggled),
			..query.clone()
		});
		Some(html! {
			<ui::TableHeaderCell
				arrow={None}
				class={Some("product-list-checkbox".to_owned())}
				col_span={None}
				column={None}
				href={None}
				text_align={None}
			>
				<ui::Checkbox
					checked={!loaded_ids.is_empty() && selection.is_all_selected(loaded_ids.iter().copied())}
					disabled={products.is_none()}
					href={Some(href)}
					label={messages.format(&SELECT_ALL)}
				/>
			</ui::TableHeaderCell>
		})
	} else {
		None
	};
	let name_sort = header_sort(ProductListSortField::Name);
	let header_cells = resolved
		.iter()
		.map(|column| match column {
			ResolvedColumn::Column(ProductListColumn::ProductType) => {
				let header_sort = header_sort(ProductListSortField::ProductType);
				html! {
					<ui::TableHeaderCell
						arrow={header_sort.arrow()}
						class={Some(column_class(column).to_owned())}
						col_span={None}
						column={Some(column.key())}
						href={header_sort.href()}
						text_align={None}
					>
						{messages.format(&TYPE)}
					</ui::TableHeaderCell>
				}
			}
			ResolvedColumn::Column(ProductListColumn::Availability) => {
				let header_sort = header_sort(ProductListSortField::Status);
				html! {
					<ui::TooltipTableHeaderCell
						arrow={header_sort.arrow()}
						class={Some(column_class(column).to_owned())}
						column={Some(column.key())}
						disabled={header_sort.is_disabled()}
						href={header_sort.href()}
						text_align={None}
						tooltip={header_sort.hint()}
					>
						{messages.format(&AVAILABILITY)}
					</ui::TooltipTableHeaderCell>
				}
			}
			ResolvedColumn::Attribute(attribute_id) => {
				let active = sort.sort == ProductListSortField::Attribute
					&& query.attribute_id.as_deref() == Some(*attribute_id);
				let arrow = if active {
					Some(ArrowDirection::from_asc(sort.asc).into())
				} else {
					None
				};
				let next = if active {
					sort.toggle(ProductListSortField::Attribute)
				} else {
					Sort {
						sort: ProductListSortField::Attribute,
						asc: true,
					}
				};
				let name = grid_attributes
					.iter()
					.find(|grid_attribute| grid_attribute.id == *attribute_id)
					.map(|grid_attribute| html! { <>{grid_attribute.name.clone()}</> })
					.unwrap_or_else(|| html! { <ui::Skeleton /> });
				html! {
					<ui::TableHeaderCell
						arrow={arrow}
						class={Some(column_class(column).to_owned())}
						col_span={None}
						column={Some(column.key())}
						href={Some(sort_href(next, Some(*attribute_id)))}
						text_align={None}
					>
						{name}
					</ui::TableHeaderCell>
				}
			}
			ResolvedColumn::Column(ProductListColumn::Date) => {
				let header_sort = header_sort(ProductListSortField::Date);
				html! {
					<ui::TableHeaderCell
						arrow={header_sort.arrow()}
						class={Some(column_class(column).to_owned())}
						col_span={None}
						column={Some(column.key())}
						href={header_sort.href()}
						text_align={None}
					>
						{messages.format(&UPDATED_AT)}
					</ui::TableHeaderCell>
				}
			}
			ResolvedColumn::Column(ProductListColumn::Price) => {
				let header_sort = header_sort(ProductListSortField::Price);
				html! {
					<ui::TooltipTableHeaderCell
						arrow={header_sort.arrow()}
						class={Some(column_class(column).to_owned())}
						column={Some(column.key())}
						disabled={header_sort.is_disabled()}
						href={header_sort.href()}
						text_align={Some(ui::TextAlign::Right)}
						tooltip={header_sort.hint()}
					>
						{messages.format(&PRICE)}
					</ui::TooltipTableHeaderCell>
				}
			}
		})
		.collect::<Vec<_>>();
	let header = html! {
		<ui::TableHeader>
			<ui::TableRow color={None} href={None} key={None} selected={None}>
				{select_all}
				<ui::TableHeaderCell
					arrow={name_sort.arrow()}
					class={name_class.clone()}
					col_span={None}
					column={Some("name".to_owned())}
					href={name_sort.href()}
					text_align={None}
				>
					{messages.format(&NAME)}
				</ui::TableHeaderCell>
				{header_cells}
			</ui::TableRow>
		</ui::TableHeader>
	};

	let page_href = |request| {
		product_list_url(&ProductListQuery {
			list: query.list.with_page(request),
			..query.clone()
		})
	};
	let footer = html! {
		<ui::TableFooter>
			<ui::TablePagination
				choices={ROWS_NUMBER_CHOICES.to_vec()}
				col_span={number_of_columns}
				labels={pagination_labels(messages)}
				next_href={page_info.request_next().map(&page_href)}
				previous_href={page_info.request_previous().map(&page_href)}
				rows_number={rows_number}
			/>
		</ui::TableFooter>
	};

	let rows = render_collection(
		products.as_deref(),
		|product| {
			let key = product.map(|product| product.id().to_owned());
			let selected = key
				.as_deref()
				.map_or(false, |id| selection.is_selected(id));
			let toggle_href = key.as_deref().map(|id| {
				product_list_url(&ProductListQuery {
					list: query.list.with_selection(&selection.toggled(id)),
					..query.clone()
				})
			});
			let listing = product.and_then(|product| product.channel_listing(channel_id));
			let cells = resolved
				.iter()
				.map(|column| {
					let content = match column {
						ResolvedColumn::Column(ProductListColumn::ProductType) => product
							.and_then(|product| product.product_type.as_ref())
							.map(|product_type| html! { <>{product_type.name.clone()}</> }),
						ResolvedColumn::Column(ProductListColumn::Availability) => {
							product.and_then(|product| match listing {
								Some(listing) => Some(html! {
									<ui::Pill
										color={channel_availability_color(listing)}
										label={messages.format(channel_availability_label(listing))}
									/>
								}),
								None => product
									.channel_listings
									.as_ref()
									.map(|listings| channels_availability(listings, messages)),
							})
						}
						ResolvedColumn::Attribute(attribute_id) => product
							.and_then(|product| product.attribute_text(attribute_id))
							.map(|text| html! { <>{text}</> }),
						ResolvedColumn::Column(ProductListColumn::Date) => product
							.and_then(|product| product.updated_at)
							.map(|updated_at| {
								html! {
									<time datetime={updated_at.to_rfc3339()}>
										{updated_at.format("%b %-d, %Y").to_string()}
									</time>
								}
							}),
						ResolvedColumn::Column(ProductListColumn::Price) => product
							.filter(|product| product.channel_listings.is_some())
							.map(|_| {
								let range = listing
									.and_then(|listing| listing.price_range.clone())
									.unwrap_or_default();
								html! { <>{range.to_string()}</> }
							}),
					};
					let text_align = match column {
						ResolvedColumn::Column(ProductListColumn::Price) => Some(ui::TextAlign::Right),
						_ => None,
					};
					html! {
						<ui::TableCell
							class={Some(column_class(column).to_owned())}
							col_span={None}
							color={None}
							column={Some(column.key())}
							text_align={text_align}
						>
							{content.unwrap_or_else(|| html! { <ui::Skeleton /> })}
						</ui::TableCell>
					}
				})
				.collect::<Vec<_>>();
			let name = product
				.and_then(|product| product.name.clone())
				.map(|name| html! { <span data-test-id="name">{name}</span> })
				.unwrap_or_else(|| html! { <ui::Skeleton /> });
			let thumbnail = product
				.and_then(|product| product.thumbnail.clone())
				.map(|thumbnail| html! { <img alt="" class="product-list-thumbnail" src={thumbnail} /> });
			html! {
				<ui::TableRow
					color={None}
					href={product.map(|product| product_url(product.id()))}
					key={Some(key.unwrap_or_else(|| "skeleton".to_owned()))}
					selected={Some(selected)}
				>
					<ui::TableCell
						class={Some("product-list-checkbox".to_owned())}
						col_span={None}
						color={None}
						column={None}
						text_align={None}
					>
						<ui::Checkbox
							checked={selected}
							disabled={product.is_none()}
							href={toggle_href}
							label={messages.format(&SELECT_PRODUCT)}
						/>
					</ui::TableCell>
					<ui::TableCell
						class={name_class.clone()}
						col_span={None}
						color={None}
						column={Some("name".to_owned())}
						text_align={None}
					>
						{thumbnail}
						{name}
					</ui::TableCell>
					{cells}
				</ui::TableRow>
			}
		},
		|| {
			html! {
				<ui::TableRow color={None} href={None} key={Some("empty".to_owned())} selected={None}>
					<ui::TableCell
						class={None}
						col_span={Some(number_of_columns)}
						color={None}
						column={None}
						text_align={None}
					>
						{messages.format(&NO_PRODUCTS)}
					</ui::TableCell>
				</ui::TableRow>
			}
		},
	);

	html! {
		<div class="product-list">
			<ui::Table layout={Some(ui::TableLayout::Fixed)} width={Some("100%".to_owned())}>
				{col_group}
				{header}
				{footer}
				<ui::TableBody>{rows}</ui::TableBody>
			</ui::Table>
		</div>
	}
}

fn column_class(column: &ResolvedColumn<ProductListColumn>) -> &'static str {
	match column {
		ResolvedColumn::Column(ProductListColumn::ProductType) => "product-list-type",
		ResolvedColumn::Column(ProductListColumn::Availability) => "product-list-availability",
		ResolvedColumn::Attribute(_) => "product-list-attribute",
		ResolvedColumn::Column(ProductListColumn::Date) => "product-list-date",
		ResolvedColumn::Column(ProductListColumn::Price) => "product-list-price",
	}
}

/// Availability in every channel, for when no channel filter is set.
fn channels_availability(listings: &[ChannelListing], messages: &Messages) -> Node {
	if listings.is_empty() {
		return html! {
			<ui::Pill color={ui::PillColor::Neutral} label={messages.format(&NO_CHANNELS)} />
		};
	}
	let summary = messages.format_with(&CHANNELS, &[("count", listings.len().to_string())]);
	let items = listings
		.iter()
		.map(|listing| {
			html! {
				<li class="channels-availability-item">
					<span>{listing.channel.name.clone()}</span>
					<ui::Pill
						color={channel_availability_color(listing)}
						label={messages.format(channel_availability_label(listing))}
					/>
				</li>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ChannelsAvailabilityDropdown summary={summary}>
			{items}
		</ChannelsAvailabilityDropdown>
	}
}

#[component]
fn ChannelsAvailabilityDropdown(summary: String) {
	html! {
		<details class="channels-availability">
			<summary>
				<ui::Pill color={ui::PillColor::Neutral} label={summary} />
			</summary>
			<ul class="channels-availability-list">{children}</ul>
		</details>
	}
}

#[cfg(test)]
use bazaar_app_common::{
	channels::Channel,
	list::columns::attribute_column_value,
	money::{Money, MoneyRange},
	products::{ProductAttribute, ProductType},
	urls::ListQuery,
};

#[cfg(test)]
fn product(id: &str, name: &str) -> Product {
	let channel = Channel {
		id: "default-channel".to_owned(),
		name: "Channel-USD".to_owned(),
		currency_code: "USD".to_owned(),
	};
	Product {
		id: id.to_owned(),
		name: Some(name.to_owned()),
		thumbnail: None,
		product_type: Some(ProductType {
			id: "pt".to_owned(),
			name: "T-Shirt".to_owned(),
		}),
		channel_listings: Some(vec![ChannelListing {
			channel,
			is_published: true,
			publication_date: None,
			price_range: Some(MoneyRange {
				start: Some(Money {
					amount: 1000,
					currency: "USD".to_owned(),
				}),
				stop: None,
			}),
		}]),
		attributes: Some(vec![ProductAttribute {
			attribute_id: "color".to_owned(),
			values: vec!["Red".to_owned()],
		}]),
		updated_at: None,
	}
}

#[cfg(test)]
fn render(columns: &[&str], products: Option<Vec<Product>>, query: ProductListQuery) -> String {
	let props = ProductListProps {
		columns: columns.iter().map(|column| (*column).to_owned()).collect(),
		grid_attributes: vec![GridAttribute {
			id: "color".to_owned(),
			name: "Color".to_owned(),
		}],
		page_info: PageInfo::default(),
		products,
		query,
		rows_number: 20,
	};
	product_list(props, &Messages::default()).render_to_string()
}

#[test]
fn test_columns_align() {
	let color = attribute_column_value("color");
	let subsets: Vec<Vec<&str>> = vec![
		vec![],
		vec!["price"],
		vec!["date", "productType"],
		vec!["availability", color.as_str(), "price"],
		vec!["productType", "availability", color.as_str(), "date", "price"],
	];
	for subset in subsets {
		let products = vec![product("a", "Alpha"), product("b", "Beta")];
		let html = render(&subset, Some(products), ProductListQuery::default());
		let optional = subset.len();
		// The checkbox and name columns come first.
		assert_eq!(html.matches("<col ").count(), optional + 2);
		assert_eq!(html.matches("<th ").count(), optional + 2);
		assert_eq!(html.matches("<td class=\"table-cell").count(), 2 * (optional + 2));
		for column in subset {
			let cell = format!("data-column=\"{}\"", column);
			assert_eq!(html.matches(cell.as_str()).count(), 4);
		}
	}
}

#[test]
fn test_empty_list() {
	let html = render(&["price", "date"], Some(Vec::new()), ProductListQuery::default());
	assert_eq!(html.matches("<tr class=\"table-row\"").count(), 2);
	assert!(html.contains(r#"<td class="table-cell" colspan="3">No products found</td>"#));
	assert!(!html.contains("data-test-id=\"checkbox\""));
	assert_eq!(html.matches("<col ").count(), 3);
}

#[test]
fn test_loading_row() {
	let html = render(&["price"], None, ProductListQuery::default());
	assert!(html.contains("data-key=\"skeleton\""));
	assert_eq!(html.matches("data-test-id=\"skeleton\"").count(), 2);
}

#[test]
fn test_sort_arrows() {
	let query = ProductListQuery {
		list: ListQuery {
			sort: Some("date".to_owned()),
			asc: Some(false),
			..Default::default()
		},
		..Default::default()
	};
	let html = render(&["productType", "date"], Some(vec![product("a", "Alpha")]), query);
	assert_eq!(html.matches("class=\"sort-arrow").count(), 1);
	assert!(html.contains("data-direction=\"desc\""));
	assert!(html.contains("href=\"/products/?sort=date&amp;asc=true\""));
}

#[test]
fn test_channel_sorts_disabled_without_channel() {
	let html = render(
		&["availability", "price"],
		Some(vec![product("a", "Alpha")]),
		ProductListQuery::default(),
	);
	assert_eq!(html.matches("table-header-cell-disabled").count(), 2);
	assert!(html.contains("You need to set Channel filter to enable sorting by this field"));
	assert!(!html.contains("sort=status"));
	let query = ProductListQuery {
		channel: Some("default-channel".to_owned()),
		..Default::default()
	};
	let html = render(&["availability", "price"], Some(vec![product("a", "Alpha")]), query);
	assert!(!html.contains("table-header-cell-disabled"));
	assert!(html.contains("sort=status"));
	assert!(html.contains("Published"));
	assert!(html.contains("USD 10.00"));
}

#[test]
fn test_selection_links() {
	let query = ProductListQuery {
		list: ListQuery {
			selected: Some("a".to_owned()),
			..Default::default()
		},
		..Default::default()
	};
	let html = render(&[], Some(vec![product("a", "Alpha"), product("b", "Beta")]), query);
	assert!(html.contains("table-row table-row-selected table-row-clickable"));
	assert!(html.contains("href=\"/products/?selected=a%2Cb\""));
	assert!(html.contains("href=\"/products/\""));
}
