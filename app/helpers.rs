use crate::{
	store::{Connection, ConnectionArgs, StoreError},
	Context,
};
use bazaar_app_common::{
	cookies::parse_cookies,
	error::Error,
	list::{
		pagination::PageRequest,
		settings::{ListSettingsCookies, ROWS_NUMBER_CHOICES},
	},
	messages::{MessageDescriptor, Messages},
};
use bazaar_app_layouts::app_layout::{get_app_layout_info, AppLayoutInfo, Section};
use bazaar_deps::{
	http::{self, header},
	hyper, serde_urlencoded, tokio, tracing, url,
};
use bazaar_ui as ui;
use bazaar_util::error::Result;
use std::{future::Future, time::Duration};

/// How long a page waits for a list before rendering it as still loading.
const LOAD_TIMEOUT: Duration = Duration::from_secs(2);

pub fn parse_query<T>(request: &http::Request<hyper::Body>) -> Result<T>
where
	T: serde::de::DeserializeOwned,
{
	let query = request.uri().query().unwrap_or("");
	serde_urlencoded::from_str(query).map_err(|error| {
		tracing::debug!(%error, query, "rejected query");
		Error::BadRequest.into()
	})
}

pub async fn parse_form<T>(request: &mut http::Request<hyper::Body>) -> Result<T>
where
	T: serde::de::DeserializeOwned,
{
	let data = hyper::body::to_bytes(request.body_mut())
		.await
		.map_err(|_| Error::BadRequest)?;
	serde_urlencoded::from_bytes(&data).map_err(|error| {
		tracing::debug!(%error, "rejected form");
		Error::BadRequest.into()
	})
}

/// The form body as name/value pairs, for forms that repeat a name.
pub async fn parse_form_pairs(
	request: &mut http::Request<hyper::Body>,
) -> Result<Vec<(String, String)>> {
	let data = hyper::body::to_bytes(request.body_mut())
		.await
		.map_err(|_| Error::BadRequest)?;
	Ok(url::form_urlencoded::parse(&data).into_owned().collect())
}

pub fn form_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
	pairs
		.iter()
		.find(|(key, _)| key == name)
		.map(|(_, value)| value.as_str())
}

pub fn list_settings(request: &http::Request<hyper::Body>) -> ListSettingsCookies {
	let cookies = request
		.headers()
		.get(header::COOKIE)
		.and_then(|cookies| cookies.to_str().ok())
		.and_then(|cookies| parse_cookies(cookies).ok())
		.unwrap_or_default();
	ListSettingsCookies::from_cookies(&cookies)
}

pub fn connection_args(rows_number: usize, request: Option<PageRequest>) -> ConnectionArgs {
	ConnectionArgs {
		first: rows_number,
		request,
	}
}

/// Waits for a list. A list that does not arrive in time is `None` and renders as loading. A bad cursor is the client's fault.
pub async fn load<T>(
	list: &'static str,
	query: impl Future<Output = std::result::Result<Connection<T>, StoreError>>,
) -> Result<Option<Connection<T>>> {
	match tokio::time::timeout(LOAD_TIMEOUT, query).await {
		Ok(Ok(connection)) => Ok(Some(connection)),
		Ok(Err(StoreError::InvalidCursor)) => Err(Error::BadRequest.into()),
		Ok(Err(StoreError::NotFound)) => Err(Error::NotFound.into()),
		Ok(Err(error)) => Err(error.into()),
		Err(_) => {
			tracing::warn!(list, "list did not load in time");
			Ok(None)
		}
	}
}

pub fn app_layout_info(context: &Context, section: Section, title: String) -> AppLayoutInfo {
	let demo_banner = if context.options.demo_mode {
		Some((
			context.options.storefront_url.clone(),
			context.options.graphql_url.clone(),
		))
	} else {
		None
	};
	get_app_layout_info(&context.messages, section, title, demo_banner)
}

pub fn cookie_domain(context: &Context) -> Option<&str> {
	context.options.cookie_domain.as_deref()
}

const PREVIOUS: MessageDescriptor = MessageDescriptor::new("CZd1ln", "Previous");
const NEXT: MessageDescriptor = MessageDescriptor::new("XRXNxa", "Next");
const ROWS: MessageDescriptor = MessageDescriptor::new("4q5F0d", "No of rows:");

pub fn pagination_labels(messages: &Messages) -> ui::PaginationLabels {
	ui::PaginationLabels {
		next: messages.format(&NEXT),
		previous: messages.format(&PREVIOUS),
		rows: messages.format(&ROWS),
	}
}

const CANCEL: MessageDescriptor = MessageDescriptor::described("47FYwb", "Cancel", "button");
const DELETE: MessageDescriptor = MessageDescriptor::described("Tmv3yF", "Delete", "button");
const SAVE: MessageDescriptor = MessageDescriptor::described("RaycYK", "Save", "button");

pub fn savebar_labels(messages: &Messages) -> ui::SavebarLabels {
	ui::SavebarLabels {
		cancel: messages.format(&CANCEL),
		delete: messages.format(&DELETE),
		save: messages.format(&SAVE),
	}
}

/// Parses a number a form submitted as text.
pub fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T> {
	value.trim().parse().map_err(|_| Error::BadRequest.into())
}

/// Parses a page size picked from the rows selector. Only the offered choices are accepted.
pub fn parse_rows_number(value: &str) -> Result<usize> {
	let rows_number = parse_number(value)?;
	if !ROWS_NUMBER_CHOICES.contains(&rows_number) {
		tracing::debug!(rows_number, "rejected rows number");
		return Err(Error::BadRequest.into());
	}
	Ok(rows_number)
}

#[test]
fn test_list_settings_from_request() {
	use bazaar_app_common::list::settings::{ListName, ListSettings};
	let request = http::Request::builder()
		.header(header::COOKIE, "other=1; bazaar-list-settings-orders=%%%")
		.body(hyper::Body::empty())
		.unwrap();
	let settings = list_settings(&request);
	assert_eq!(settings.get(ListName::Orders), ListSettings::default_for(ListName::Orders));
	assert!(parse_number::<usize>("x").is_err());
	assert_eq!(parse_number::<usize>(" 30 ").unwrap(), 30);
}

#[test]
fn test_parse_rows_number() {
	assert_eq!(parse_rows_number("50").unwrap(), 50);
	assert!(parse_rows_number("0").is_err());
	assert!(parse_rows_number("7").is_err());
	assert!(parse_rows_number("18446744073709551615").is_err());
}
