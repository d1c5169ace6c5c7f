use super::page::{render, Props, TITLE};
use crate::{
	helpers::{app_layout_info, connection_args, list_settings, load, parse_query},
	Context,
};
use bazaar_app_common::{
	error::html_response,
	list::{pagination::PageInfo, settings::ListName},
	urls::{attribute_list_sort, ListQuery},
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
	let mut query: ListQuery = parse_query(&request)?;
	query.query = query.query.filter(|search| !search.is_empty());
	let settings = list_settings(&request).get(ListName::Attributes);
	let attributes = load(
		"attributes",
		context.store.attributes(
			query.query.as_deref(),
			attribute_list_sort(&query),
			&connection_args(settings.rows_number, query.page_request()),
		),
	)
	.await?;
	let (attributes, page_info) = match attributes {
		Some(connection) => (Some(connection.items), connection.page_info),
		None => (None, PageInfo::default()),
	};
	let props = Props {
		app_layout_info: app_layout_info(context, Section::Attributes, context.messages.format(&TITLE)),
		attributes,
		page_info,
		query,
		rows_number: settings.rows_number,
	};
	let html = render(props, &context.messages);
	html_response(StatusCode::OK, html, Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_get() {
	let context = crate::test_context();
	let request = http::Request::builder()
		.uri("/attributes/?sort=slug&asc=false")
		.body(hyper::Body::empty())
		.unwrap();
	let html = crate::body_string(get(&context, request).await.unwrap()).await;
	assert!(html.contains("<title>Attributes</title>"));
	assert_eq!(html.matches("class=\"table-row table-row-clickable\"").count(), 6);
	let weight = html.find(">weight<").unwrap();
	let color = html.find(">color<").unwrap();
	assert!(weight < color);
	assert!(html.contains("href=\"/attributes/add\""));
	let request = http::Request::builder()
		.uri("/attributes/?query=zzz")
		.body(hyper::Body::empty())
		.unwrap();
	let html = crate::body_string(get(&context, request).await.unwrap()).await;
	assert!(html.contains("No attributes found"));
}
