use super::{
	order_list::OrderListProps,
	page::{render, Props, TITLE},
};
use crate::{
	helpers::{app_layout_info, connection_args, list_settings, load, parse_query},
	Context,
};
use bazaar_app_common::{
	error::html_response,
	list::{pagination::PageInfo, settings::ListName},
	urls::OrderListQuery,
};
use bazaar_app_layouts::app_layout::Section;
use bazaar_deps::{
	http::{self, StatusCode},
	hyper,
};
use bazaar_util::error::Result;

pub async fn get(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let mut query: OrderListQuery = parse_query(&request)?;
	query.list.query = query.list.query.filter(|search| !search.is_empty());
	let settings = list_settings(&request).get(ListName::Orders);
	let limits = context.store.limits().await;
	let tabs = context.store.tabs().await;
	let orders = load(
		"orders",
		context.store.orders(
			query.list.query.as_deref(),
			query.sort(),
			&connection_args(settings.rows_number, query.list.page_request()),
		),
	)
	.await?;
	let (orders, page_info) = match orders {
		Some(connection) => (Some(connection.items), connection.page_info),
		None => (None, PageInfo::default()),
	};
	let props = Props {
		app_layout_info: app_layout_info(context, Section::Orders, context.messages.format(&TITLE)),
		limits,
		list: OrderListProps {
			orders,
			page_info,
			query,
			rows_number: settings.rows_number,
		},
		tabs,
	};
	let html = render(props, &context.messages);
	html_response(StatusCode::OK, html, Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_get() {
	let context = crate::test_context();
	let request = http::Request::builder()
		.uri("/orders/")
		.body(hyper::Body::empty())
		.unwrap();
	let response = get(&context, request).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let html = crate::body_string(response).await;
	assert!(html.contains("<title>Orders</title>"));
	assert!(html.contains("45/50 orders"));
	assert!(html.contains("All Orders"));
	assert!(!html.contains("Order limit reached"));
	assert!(html.contains("class=\"button\" id=\"create-order-button\""));
	assert_eq!(html.matches("class=\"table-row table-row-clickable\"").count(), 20);
	// Newest order first.
	assert!(html.contains("#45"));
	assert!(!html.contains("#25<"));
}

#[cfg(test)]
#[tokio::test]
async fn test_limit_reached() {
	let context = crate::test_context();
	for _ in 0..5 {
		context.store.create_order().await.unwrap();
	}
	let request = http::Request::builder()
		.uri("/orders/?query=no-such-customer")
		.body(hyper::Body::empty())
		.unwrap();
	let html = crate::body_string(get(&context, request).await.unwrap()).await;
	assert!(html.contains("50/50 orders"));
	assert!(html.contains("Order limit reached"));
	assert!(html.contains("class=\"button\" disabled id=\"create-order-button\""));
	assert!(html.contains("No orders found"));
}
