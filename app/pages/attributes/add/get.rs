use super::super::attribute_page::{render, AttributePageFormData, Props, CREATE_TITLE};
use crate::{helpers::app_layout_info, Context};
use bazaar_app_common::{error::html_response, form::session::FormSession};
use bazaar_app_layouts::app_layout::Section;
use bazaar_deps::{
	http::{self, StatusCode},
	hyper,
};
use bazaar_util::error::Result;

pub async fn get(
	context: &Context,
	_request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let session = FormSession::new(AttributePageFormData::initial(None));
	respond(context, session, StatusCode::OK)
}

/// Renders the create page for `session`. A failed submission renders again with its errors.
pub(super) fn respond(
	context: &Context,
	session: FormSession<AttributePageFormData>,
	status: StatusCode,
) -> Result<http::Response<hyper::Body>> {
	let props = Props {
		app_layout_info: app_layout_info(
			context,
			Section::Attributes,
			context.messages.format(&CREATE_TITLE),
		),
		attribute: None,
		session,
		value_error: None,
		values: None,
	};
	let html = render(props, &context.messages);
	html_response(status, html, Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_get() {
	let context = crate::test_context();
	let request = http::Request::builder()
		.uri("/attributes/add")
		.body(hyper::Body::empty())
		.unwrap();
	let html = crate::body_string(get(&context, request).await.unwrap()).await;
	assert!(html.contains("<title>Create New Attribute</title>"));
	assert!(html.contains("<option selected value=\"DROPDOWN\">"));
	assert!(html.contains("<input checked class=\"form-checkbox-field\""));
}
