use bazaar_deps::{
	http::{self, header, StatusCode},
	hyper,
};
use bazaar_util::error::Result;
use derive_more::{Display, Error};

/// Failures that end a request early. The router turns these into their status code.
#[derive(Display, Debug, Error, PartialEq, Eq)]
pub enum Error {
	BadRequest,
	NotFound,
	ServiceUnavailable,
}

pub fn bad_request() -> http::Response<hyper::Body> {
	status_response(StatusCode::BAD_REQUEST, "bad request")
}

pub fn not_found() -> http::Response<hyper::Body> {
	status_response(StatusCode::NOT_FOUND, "not found")
}

pub fn service_unavailable() -> http::Response<hyper::Body> {
	status_response(StatusCode::SERVICE_UNAVAILABLE, "service unavailable")
}

fn status_response(status: StatusCode, body: &'static str) -> http::Response<hyper::Body> {
	let mut response = http::Response::new(hyper::Body::from(body));
	*response.status_mut() = status;
	response
}

/// A `303 See Other` to `location`, with any cookies the request changed.
pub fn redirect(location: &str, set_cookies: Vec<String>) -> Result<http::Response<hyper::Body>> {
	let mut response = http::Response::builder()
		.status(StatusCode::SEE_OTHER)
		.header(header::LOCATION, location);
	for set_cookie in set_cookies {
		response = response.header(header::SET_COOKIE, set_cookie);
	}
	Ok(response.body(hyper::Body::empty())?)
}

pub fn html_response(
	status: StatusCode,
	html: String,
	set_cookies: Vec<String>,
) -> Result<http::Response<hyper::Body>> {
	let mut response = http::Response::builder()
		.status(status)
		.header(header::CONTENT_TYPE, "text/html; charset=utf-8");
	for set_cookie in set_cookies {
		response = response.header(header::SET_COOKIE, set_cookie);
	}
	Ok(response.body(hyper::Body::from(html))?)
}

#[test]
fn test_redirect() {
	let response = redirect("/products/", vec!["a=b; Path=/".to_owned()]).unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION], "/products/");
	assert_eq!(response.headers()[header::SET_COOKIE], "a=b; Path=/");
	assert_eq!(bad_request().status(), StatusCode::BAD_REQUEST);
}
