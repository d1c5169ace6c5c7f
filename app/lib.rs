use self::store::Store;
use bazaar_app_common::{
	error::{bad_request, not_found, redirect, service_unavailable, Error},
	messages::Messages,
};
use bazaar_deps::{
	http::{self, header, Method, StatusCode},
	hyper, tokio, tracing,
};
use bazaar_util::error::Result;
use std::{path::PathBuf, sync::Arc};

mod helpers;
mod pages;
pub mod store;

pub struct Options {
	pub cookie_domain: Option<String>,
	pub demo_mode: bool,
	pub graphql_url: String,
	pub host: std::net::IpAddr,
	pub locale_file: Option<PathBuf>,
	pub port: u16,
	pub storefront_url: String,
}

pub struct Context {
	pub options: Options,
	pub messages: Messages,
	pub store: Store,
}

impl Context {
	pub fn new(options: Options) -> Result<Context> {
		let messages = match &options.locale_file {
			Some(locale_file) => Messages::from_file(locale_file)?,
			None => Messages::default(),
		};
		Ok(Context {
			options,
			messages,
			store: Store::new(),
		})
	}
}

const STYLES: &str = include_str!("styles.css");

pub async fn handle(
	context: Arc<Context>,
	request: http::Request<hyper::Body>,
) -> http::Response<hyper::Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path_components: Vec<_> = uri.path().split('/').skip(1).collect();
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &[""]) => redirect("/products/", Vec::new()),
		(&Method::GET, &["health"]) => health(),
		(&Method::GET, &["styles.css"]) => styles(),
		(&Method::GET, &["products", ""]) => self::pages::products::index::get(&context, request).await,
		(&Method::POST, &["products", ""]) => {
			self::pages::products::index::post(&context, request).await
		}
		(&Method::GET, &["orders", ""]) => self::pages::orders::index::get(&context, request).await,
		(&Method::POST, &["orders", ""]) => self::pages::orders::index::post(&context, request).await,
		(&Method::GET, &["orders", "settings"]) => {
			self::pages::orders::settings::get(&context, request).await
		}
		(&Method::POST, &["orders", "settings"]) => {
			self::pages::orders::settings::post(&context, request).await
		}
		(&Method::GET, &["attributes", ""]) => {
			self::pages::attributes::index::get(&context, request).await
		}
		(&Method::POST, &["attributes", ""]) => {
			self::pages::attributes::index::post(&context, request).await
		}
		(&Method::GET, &["attributes", "add"]) => {
			self::pages::attributes::add::get(&context, request).await
		}
		(&Method::POST, &["attributes", "add"]) => {
			self::pages::attributes::add::post(&context, request).await
		}
		(&Method::GET, &["attributes", attribute_id]) => {
			self::pages::attributes::_attribute_id::get(&context, request, attribute_id).await
		}
		(&Method::POST, &["attributes", attribute_id]) => {
			self::pages::attributes::_attribute_id::post(&context, request, attribute_id).await
		}
		_ => Err(Error::NotFound.into()),
	};
	match result {
		Ok(response) => response,
		Err(error) => match error.downcast_ref::<Error>() {
			Some(Error::BadRequest) => bad_request(),
			Some(Error::NotFound) => not_found(),
			Some(Error::ServiceUnavailable) => service_unavailable(),
			None => {
				tracing::error!(%method, path = uri.path(), %error, "request failed");
				let mut response = http::Response::new(hyper::Body::from("internal server error"));
				*response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
				response
			}
		},
	}
}

fn health() -> Result<http::Response<hyper::Body>> {
	Ok(http::Response::builder()
		.status(StatusCode::OK)
		.body(hyper::Body::empty())?)
}

fn styles() -> Result<http::Response<hyper::Body>> {
	Ok(http::Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "text/css; charset=utf-8")
		.body(hyper::Body::from(STYLES))?)
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run_inner(options))
}

async fn run_inner(options: Options) -> Result<()> {
	let host = options.host;
	let port = options.port;
	if options.demo_mode {
		tracing::info!(storefront_url = %options.storefront_url, "demo mode");
	}
	let context = Context::new(options)?;
	bazaar_util::serve::serve(host, port, context, handle).await?;
	Ok(())
}

#[cfg(test)]
pub(crate) fn test_context() -> Arc<Context> {
	Arc::new(Context {
		options: Options {
			cookie_domain: None,
			demo_mode: true,
			graphql_url: "https://demo.example.com/graphql/".to_owned(),
			host: std::net::IpAddr::from([127, 0, 0, 1]),
			locale_file: None,
			port: 8080,
			storefront_url: "https://demo.example.com/".to_owned(),
		},
		messages: Messages::default(),
		store: Store::new(),
	})
}

#[cfg(test)]
pub(crate) async fn body_string(response: http::Response<hyper::Body>) -> String {
	let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[cfg(test)]
#[tokio::test]
async fn test_routes() {
	let context = test_context();
	let request = |method: Method, uri: &str| {
		http::Request::builder()
			.method(method)
			.uri(uri)
			.body(hyper::Body::empty())
			.unwrap()
	};
	let response = handle(context.clone(), request(Method::GET, "/")).await;
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION], "/products/");
	let response = handle(context.clone(), request(Method::GET, "/health")).await;
	assert_eq!(response.status(), StatusCode::OK);
	let response = handle(context.clone(), request(Method::GET, "/nowhere")).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let response = handle(context.clone(), request(Method::GET, "/attributes/missing")).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let response = handle(context, request(Method::GET, "/products/?asc=maybe")).await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
