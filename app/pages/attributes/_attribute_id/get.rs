use super::super::attribute_page::{render, AttributePageFormData, Props, ValuesProps};
use crate::{
	helpers::{app_layout_info, connection_args, list_settings, load, parse_query},
	Context,
};
use bazaar_app_common::{
	attributes::Attribute,
	error::{html_response, Error},
	form::session::FormSession,
	list::{pagination::PageInfo, settings::ListName},
	urls::ListQuery,
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
	attribute_id: &str,
) -> Result<http::Response<hyper::Body>> {
	let attribute = context
		.store
		.attribute(attribute_id)
		.await
		.ok_or(Error::NotFound)?;
	let session = FormSession::new(AttributePageFormData::initial(Some(&attribute)));
	respond(context, &request, attribute, session, None, StatusCode::OK).await
}

/// Renders the edit page for `session` with the page of values the query asks for. Failed submissions render again with their errors.
pub(super) async fn respond(
	context: &Context,
	request: &http::Request<hyper::Body>,
	attribute: Attribute,
	session: FormSession<AttributePageFormData>,
	value_error: Option<String>,
	status: StatusCode,
) -> Result<http::Response<hyper::Body>> {
	let query: ListQuery = parse_query(request)?;
	let settings = list_settings(request).get(ListName::AttributeValues);
	let values = load(
		"attribute values",
		context.store.attribute_values(
			&attribute.id,
			&connection_args(settings.rows_number, query.page_request()),
		),
	)
	.await?;
	let (values, page_info) = match values {
		Some(connection) => (Some(connection.items), connection.page_info),
		None => (None, PageInfo::default()),
	};
	let props = Props {
		app_layout_info: app_layout_info(context, Section::Attributes, attribute.name.clone()),
		values: Some(ValuesProps {
			attribute_id: attribute.id.clone(),
			page_info,
			query,
			rows_number: settings.rows_number,
			values,
		}),
		attribute: Some(attribute),
		session,
		value_error,
	};
	let html = render(props, &context.messages);
	html_response(status, html, Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_get() {
	use crate::store::encode_id;
	let context = crate::test_context();
	let id = encode_id("Attribute", 6);
	let request = http::Request::builder()
		.uri(format!("/attributes/{}", id))
		.body(hyper::Body::empty())
		.unwrap();
	let response = get(&context, request, &id).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let html = crate::body_string(response).await;
	assert!(html.contains("<title>Size</title>"));
	assert!(html.contains("id=\"savebar-delete\""));
	assert!(html.contains("<select class=\"form-select\" disabled id=\"input_type\""));
	assert!(html.contains("id=\"add-value\""));
	assert_eq!(html.matches("class=\"hidden-form\" id=\"update-value-").count(), 6);
	let request = http::Request::builder()
		.uri("/attributes/missing")
		.body(hyper::Body::empty())
		.unwrap();
	assert!(get(&context, request, "missing").await.is_err());
}
