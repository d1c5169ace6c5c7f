use super::{
	page::{render, Props, TITLE},
	product_list::ProductListProps,
};
use crate::{
	helpers::{app_layout_info, connection_args, list_settings, load, parse_query},
	Context,
};
use bazaar_app_common::{
	error::html_response,
	list::{
		pagination::PageInfo,
		settings::ListName,
		sort::{can_be_sorted, Sort},
	},
	products::ProductListSortField,
	urls::ProductListQuery,
};
use bazaar_app_layouts::app_layout::Section;
use bazaar_deps::{
	http::{self, StatusCode},
	hyper, tracing,
};
use bazaar_util::error::Result;

pub async fn get(
	context: &Context,
	request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let mut query: ProductListQuery = parse_query(&request)?;
	query.channel = query.channel.filter(|channel| !channel.is_empty());
	query.list.query = query.list.query.filter(|search| !search.is_empty());
	let settings = list_settings(&request).get(ListName::Products);
	let mut sort = query.sort();
	if !can_be_sorted(sort.sort, query.channel.is_some()) {
		tracing::debug!(sort = ?sort.sort, "sort needs a channel, sorting by name");
		sort = Sort {
			sort: ProductListSortField::Name,
			asc: true,
		};
		query.list = query.list.with_sort(sort);
	}
	let channels = context.store.channels().await;
	let grid_attributes = context.store.grid_attributes().await;
	let products = load(
		"products",
		context.store.products(
			query.list.query.as_deref(),
			query.channel.as_deref(),
			sort,
			query.attribute_id.as_deref(),
			&connection_args(settings.rows_number, query.list.page_request()),
		),
	)
	.await?;
	let (products, page_info) = match products {
		Some(connection) => (Some(connection.items), connection.page_info),
		None => (None, PageInfo::default()),
	};
	let props = Props {
		app_layout_info: app_layout_info(
			context,
			Section::Products,
			context.messages.format(&TITLE),
		),
		channels,
		list: ProductListProps {
			columns: settings.columns,
			grid_attributes,
			page_info,
			products,
			query,
			rows_number: settings.rows_number,
		},
	};
	let html = render(props, &context.messages);
	html_response(StatusCode::OK, html, Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_get() {
	let context = crate::test_context();
	let request = http::Request::builder()
		.uri("/products/?sort=price&asc=false")
		.body(hyper::Body::empty())
		.unwrap();
	let response = get(&context, request).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let html = crate::body_string(response).await;
	assert!(html.contains("<title>Products</title>"));
	assert!(html.contains("demo-banner"));
	assert_eq!(html.matches("class=\"table-row table-row-clickable\"").count(), 20);
	assert!(html.contains("data-test-id=\"next\" href=\"/products/?sort=name&amp;asc=true&amp;after="));
}
