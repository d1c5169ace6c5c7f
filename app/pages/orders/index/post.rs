use crate::{
	helpers::{cookie_domain, list_settings, parse_form, parse_number, parse_query, parse_rows_number},
	store::StoreError,
	Context,
};
use bazaar_app_common::{
	error::{redirect, Error},
	list::{pagination::change_rows_number, settings::ListName},
	urls::{order_list_url, order_settings_url, OrderListQuery},
};
use bazaar_deps::{http, hyper, serde_urlencoded, tracing};
use bazaar_util::error::Result;

#[derive(serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Action {
	CreateOrder,
	OpenSettings,
	UpdateSettings { rows_number: String },
	SaveTab { name: String },
	DeleteTab { tab: String },
}

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let query: OrderListQuery = parse_query(&request)?;
	let action: Action = parse_form(&mut request).await?;
	match action {
		Action::CreateOrder => match context.store.create_order().await {
			Ok(_) => redirect(&order_list_url(&OrderListQuery::default()), Vec::new()),
			Err(StoreError::LimitReached) => {
				tracing::warn!("order limit reached");
				Err(Error::BadRequest.into())
			}
			Err(error) => Err(error.into()),
		},
		Action::OpenSettings => redirect(&order_settings_url(), Vec::new()),
		Action::UpdateSettings { rows_number } => {
			let mut settings = list_settings(&request);
			change_rows_number(&mut settings, ListName::Orders, parse_rows_number(&rows_number)?);
			let location = order_list_url(&OrderListQuery {
				list: query.list.first_page(),
				..query
			});
			redirect(&location, settings.set_cookie_headers(cookie_domain(context)))
		}
		Action::SaveTab { name } => {
			let name = name.trim();
			if name.is_empty() {
				return Err(Error::BadRequest.into());
			}
			let list = query.list.first_page();
			let saved_query = serde_urlencoded::to_string(&list)?;
			let tab = context.store.save_tab(name.to_owned(), saved_query).await;
			let location = order_list_url(&OrderListQuery {
				list,
				tab: Some(tab),
			});
			redirect(&location, Vec::new())
		}
		Action::DeleteTab { tab } => {
			context
				.store
				.delete_tab(parse_number(&tab)?)
				.await
				.map_err(|_| Error::NotFound)?;
			redirect(&order_list_url(&OrderListQuery::default()), Vec::new())
		}
	}
}

#[cfg(test)]
fn post_request(uri: &str, body: &'static str) -> http::Request<hyper::Body> {
	http::Request::builder()
		.method("POST")
		.uri(uri)
		.body(hyper::Body::from(body))
		.unwrap()
}

#[cfg(test)]
#[tokio::test]
async fn test_create_order() {
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let response = post(&context, post_request("/orders/", "action=create_order"))
		.await
		.unwrap();
	assert_eq!(response.headers()[header::LOCATION], "/orders/");
	assert_eq!(context.store.limits().await.current_usage.orders, Some(46));
	for _ in 0..4 {
		post(&context, post_request("/orders/", "action=create_order"))
			.await
			.unwrap();
	}
	assert!(post(&context, post_request("/orders/", "action=create_order"))
		.await
		.is_err());
}

#[cfg(test)]
#[tokio::test]
async fn test_tabs() {
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let response = post(
		&context,
		post_request("/orders/?sort=customer&query=smith&after=abc", "action=save_tab&name=Smiths"),
	)
	.await
	.unwrap();
	assert_eq!(
		response.headers()[header::LOCATION],
		"/orders/?sort=customer&query=smith&tab=1"
	);
	let tabs = context.store.tabs().await;
	assert_eq!(tabs.len(), 1);
	assert_eq!(tabs[0].query, "sort=customer&query=smith");
	assert!(post(&context, post_request("/orders/", "action=save_tab&name=+"))
		.await
		.is_err());
	let response = post(&context, post_request("/orders/?tab=1", "action=delete_tab&tab=1"))
		.await
		.unwrap();
	assert_eq!(response.headers()[header::LOCATION], "/orders/");
	assert!(context.store.tabs().await.is_empty());
	assert!(post(&context, post_request("/orders/", "action=delete_tab&tab=1"))
		.await
		.is_err());
}

#[cfg(test)]
#[tokio::test]
async fn test_unknown_action() {
	let context = crate::test_context();
	assert!(post(&context, post_request("/orders/", "action=explode"))
		.await
		.is_err());
	let response = post(&context, post_request("/orders/", "action=open_settings"))
		.await
		.unwrap();
	assert_eq!(
		response.headers()[bazaar_deps::http::header::LOCATION],
		"/orders/settings"
	);
}
