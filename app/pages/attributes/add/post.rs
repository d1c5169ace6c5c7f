use super::{
	super::attribute_page::{apply_form, handle_submit, posted_initial, KNOWN_FIELDS},
	get::respond,
};
use crate::{
	helpers::{form_value, parse_form_pairs},
	Context,
};
use bazaar_app_common::{
	error::{redirect, Error},
	form::{metadata::MetadataChangeTrigger, session::FormSession},
	urls::attribute_url,
};
use bazaar_deps::{
	http::{self, StatusCode},
	hyper, tracing,
};
use bazaar_util::error::Result;

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let pairs = parse_form_pairs(&mut request).await?;
	if form_value(&pairs, "action") != Some("submit") {
		return Err(Error::BadRequest.into());
	}
	let mut session = FormSession::new(posted_initial(None, &pairs));
	let mut trigger = MetadataChangeTrigger::default();
	apply_form(&mut session, &mut trigger, true, &pairs, &context.messages);
	let input = match session.submit(|data| handle_submit(data, true, &trigger)) {
		Ok(input) => input,
		Err(error) => {
			tracing::debug!(%error, "attribute not submitted");
			return respond(context, session, StatusCode::BAD_REQUEST);
		}
	};
	match context.store.create_attribute(input).await {
		Ok(attribute) => {
			session.succeed();
			redirect(&attribute_url(&attribute.id), Vec::new())
		}
		Err(errors) => {
			session.fail(errors, &KNOWN_FIELDS);
			respond(context, session, StatusCode::BAD_REQUEST)
		}
	}
}

#[cfg(test)]
fn request(body: &'static str) -> http::Request<hyper::Body> {
	http::Request::builder()
		.method("POST")
		.uri("/attributes/add")
		.body(hyper::Body::from(body))
		.unwrap()
}

#[cfg(test)]
#[tokio::test]
async fn test_create() {
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let response = post(
		&context,
		request("action=submit&name=Red+T-Shirt&slug=&input_type=DROPDOWN&attribute_type=PRODUCT_TYPE"),
	)
	.await
	.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	let location = response.headers()[header::LOCATION].to_str().unwrap().to_owned();
	let id = location.trim_start_matches("/attributes/");
	let attribute = context.store.attribute(id).await.unwrap();
	assert_eq!(attribute.slug, "red-t-shirt");
	assert!(!attribute.value_required);
}

#[cfg(test)]
#[tokio::test]
async fn test_create_errors() {
	let context = crate::test_context();
	let response = post(&context, request("action=submit&name=&input_type=DROPDOWN"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let html = crate::body_string(response).await;
	assert!(html.contains("This field is required"));
	let response = post(&context, request("action=submit&name=Colour&slug=color&input_type=DROPDOWN"))
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let html = crate::body_string(response).await;
	assert!(html.contains("value=\"Colour\""));
	assert!(html.contains("form-text-field-error"));
	assert!(post(&context, request("action=delete")).await.is_err());
}
