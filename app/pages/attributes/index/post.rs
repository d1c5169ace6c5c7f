use crate::{
	helpers::{cookie_domain, list_settings, parse_form, parse_query, parse_rows_number},
	Context,
};
use bazaar_app_common::{
	error::{redirect, Error},
	list::{pagination::change_rows_number, settings::ListName},
	urls::{attribute_list_url, ListQuery},
};
use bazaar_deps::{http, hyper};
use bazaar_util::error::Result;

#[derive(serde::Deserialize)]
struct Form {
	action: String,
	rows_number: String,
}

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let query: ListQuery = parse_query(&request)?;
	let form: Form = parse_form(&mut request).await?;
	if form.action != "update_settings" {
		return Err(Error::BadRequest.into());
	}
	let mut settings = list_settings(&request);
	change_rows_number(&mut settings, ListName::Attributes, parse_rows_number(&form.rows_number)?);
	redirect(
		&attribute_list_url(&query.first_page()),
		settings.set_cookie_headers(cookie_domain(context)),
	)
}

#[cfg(test)]
#[tokio::test]
async fn test_update_settings() {
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let request = http::Request::builder()
		.method("POST")
		.uri("/attributes/?sort=name&before=abc")
		.body(hyper::Body::from("action=update_settings&rows_number=50"))
		.unwrap();
	let response = post(&context, request).await.unwrap();
	assert_eq!(response.headers()[header::LOCATION], "/attributes/?sort=name");
	let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
	assert!(cookie.starts_with("bazaar-list-settings-attributes="));
	let request = http::Request::builder()
		.method("POST")
		.uri("/attributes/")
		.body(hyper::Body::from("action=update_settings&rows_number=1000"))
		.unwrap();
	assert!(post(&context, request).await.is_err());
}
