use crate::helpers::pagination_labels;
use bazaar_app_common::{
	list::{
		pagination::PageInfo,
		rows::{render_collection, Entity},
		settings::ROWS_NUMBER_CHOICES,
		sort::{HeaderSort, Sort},
	},
	messages::{MessageDescriptor, Messages},
	orders::{Order, OrderListSortField},
	urls::{order_list_url, order_url, OrderListQuery},
};
use bazaar_ui as ui;
use html::{html, Node};

const NUMBER: MessageDescriptor = MessageDescriptor::described("ADlXx2", "No. of Order", "number of order");
const DATE: MessageDescriptor = MessageDescriptor::described("mrGPGk", "Date", "date when order was placed");
const CUSTOMER: MessageDescriptor = MessageDescriptor::described("H4pUWo", "Customer", "e-mail or full name");
const PAYMENT: MessageDescriptor = MessageDescriptor::described("4a5U6M", "Payment", "payment status");
const STATUS: MessageDescriptor = MessageDescriptor::described("Q3aqYN", "Fulfillment status", "order status");
const TOTAL: MessageDescriptor = MessageDescriptor::described("Q1N7Ge", "Total", "total order price");
const NO_ORDERS: MessageDescriptor = MessageDescriptor::new("RlfqSV", "No orders found");

const NUMBER_OF_COLUMNS: usize = 6;

pub struct OrderListProps {
	/// `None` while the orders have not loaded.
	pub orders: Option<Vec<Order>>,
	pub page_info: PageInfo,
	pub query: OrderListQuery,
	pub rows_number: usize,
}

pub fn order_list(props: OrderListProps, messages: &Messages) -> Node {
	let OrderListProps {
		orders,
		page_info,
		query,
		rows_number,
	} = props;
	let sort = query.sort();
	let sort_href = |sort: Sort<OrderListSortField>| {
		order_list_url(&OrderListQuery {
			list: query.list.with_sort(sort),
			tab: query.tab,
		})
	};
	let header_cell = |field: OrderListSortField, class: &'static str, label: &MessageDescriptor| {
		let header_sort = HeaderSort::new(&sort, field, true, &sort_href, String::new);
		html! {
			<ui::TableHeaderCell
				arrow={header_sort.arrow()}
				class={Some(class.to_owned())}
				col_span={None}
				column={None}
				href={header_sort.href()}
				text_align={None}
			>
				{messages.format(label)}
			</ui::TableHeaderCell>
		}
	};
	let header = html! {
		<ui::TableHeader>
			<ui::TableRow color={None} href={None} key={None} selected={None}>
				{header_cell(OrderListSortField::Number, "order-list-number", &NUMBER)}
				{header_cell(OrderListSortField::Date, "order-list-date", &DATE)}
				{header_cell(OrderListSortField::Customer, "order-list-customer", &CUSTOMER)}
				{header_cell(OrderListSortField::Payment, "order-list-payment", &PAYMENT)}
				{header_cell(OrderListSortField::Fulfillment, "order-list-status", &STATUS)}
				<ui::TableHeaderCell
					arrow={None}
					class={Some("order-list-total".to_owned())}
					col_span={None}
					column={None}
					href={None}
					text_align={Some(ui::TextAlign::Right)}
				>
					{messages.format(&TOTAL)}
				</ui::TableHeaderCell>
			</ui::TableRow>
		</ui::TableHeader>
	};

	let page_href = |request| {
		order_list_url(&OrderListQuery {
			list: query.list.with_page(request),
			tab: query.tab,
		})
	};
	let footer = html! {
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
	};

	let cell = |content: Option<Node>, text_align: Option<ui::TextAlign>| {
		html! {
			<ui::TableCell class={None} col_span={None} color={None} column={None} text_align={text_align}>
				{content.unwrap_or_else(|| html! { <ui::Skeleton /> })}
			</ui::TableCell>
		}
	};
	let rows = render_collection(
		orders.as_deref(),
		|order| {
			let key = order.map_or("skeleton", |order| order.id()).to_owned();
			html! {
				<ui::TableRow
					color={None}
					href={order.map(|order| order_url(order.id()))}
					key={Some(key)}
					selected={None}
				>
					{cell(order.map(|order| html! { <>{format!("#{}", order.number)}</> }), None)}
					{cell(order.map(|order| html! {
						<time datetime={order.created.to_rfc3339()}>
							{order.created.format("%b %-d, %Y").to_string()}
						</time>
					}), None)}
					{cell(order.map(|order| html! {
						<>{order.customer.clone().unwrap_or_else(|| "-".to_owned())}</>
					}), None)}
					{cell(order.map(|order| html! {
						<ui::Pill
							color={order.payment_status.color()}
							label={messages.format(&order.payment_status.label())}
						/>
					}), None)}
					{cell(order.map(|order| html! {
						<ui::Pill color={order.status.color()} label={messages.format(&order.status.label())} />
					}), None)}
					{cell(
						order.map(|order| html! { <>{order.total.to_string()}</> }),
						Some(ui::TextAlign::Right),
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
						{messages.format(&NO_ORDERS)}
					</ui::TableCell>
				</ui::TableRow>
			}
		},
	);

	html! {
		<div class="order-list">
			<ui::Table layout={None} width={Some("100%".to_owned())}>
				{header}
				{footer}
				<ui::TableBody>{rows}</ui::TableBody>
			</ui::Table>
		</div>
	}
}

#[cfg(test)]
use bazaar_app_common::{
	money::Money,
	orders::{OrderStatus, PaymentStatus},
	urls::ListQuery,
};
#[cfg(test)]
use bazaar_deps::chrono::{TimeZone, Utc};

#[cfg(test)]
fn order(id: &str, number: u64) -> Order {
	Order {
		id: id.to_owned(),
		number,
		created: Utc.with_ymd_and_hms(2021, 3, 4, 12, 0, 0).unwrap(),
		customer: None,
		payment_status: PaymentStatus::FullyCharged,
		status: OrderStatus::Unfulfilled,
		total: Money {
			amount: 4250,
			currency: "USD".to_owned(),
		},
	}
}

#[cfg(test)]
fn render(orders: Option<Vec<Order>>, query: OrderListQuery) -> String {
	let props = OrderListProps {
		orders,
		page_info: PageInfo::default(),
		query,
		rows_number: 20,
	};
	order_list(props, &Messages::default()).render_to_string()
}

#[test]
fn test_rows() {
	let html = render(Some(vec![order("a", 7), order("b", 8)]), OrderListQuery::default());
	assert_eq!(html.matches("class=\"table-row table-row-clickable\"").count(), 2);
	assert!(html.contains("#7"));
	assert!(html.contains("Mar 4, 2021"));
	assert!(html.contains("Fully paid"));
	assert!(html.contains("Unfulfilled"));
	assert!(html.contains("USD 42.50"));
	assert!(html.contains("data-href=\"/orders/a\""));
}

#[test]
fn test_empty_and_loading() {
	let html = render(Some(Vec::new()), OrderListQuery::default());
	assert!(html.contains(r#"<td class="table-cell" colspan="6">No orders found</td>"#));
	let html = render(None, OrderListQuery::default());
	assert!(html.contains("data-key=\"skeleton\""));
	assert_eq!(html.matches("data-test-id=\"skeleton\"").count(), NUMBER_OF_COLUMNS);
}

#[test]
fn test_sort_keeps_tab() {
	let query = OrderListQuery {
		list: ListQuery {
			sort: Some("customer".to_owned()),
			..Default::default()
		},
		tab: Some(1),
	};
	let html = render(Some(vec![order("a", 1)]), query);
	assert_eq!(html.matches("class=\"sort-arrow").count(), 1);
	assert!(html.contains("href=\"/orders/?sort=customer&amp;asc=false&amp;tab=1\""));
	assert!(html.contains("href=\"/orders/?sort=number&amp;asc=true&amp;tab=1\""));
}
