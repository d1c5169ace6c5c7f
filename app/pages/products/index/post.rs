use crate::{
	helpers::{
		cookie_domain, form_value, list_settings, parse_form_pairs, parse_query, parse_rows_number,
	},
	Context,
};
use bazaar_app_common::{
	error::{redirect, Error},
	list::{
		pagination::change_rows_number,
		settings::{ListName, ListSettingsUpdate, UpdateListSettings},
	},
	urls::{product_list_url, ProductListQuery},
};
use bazaar_deps::{http, hyper, tracing};
use bazaar_util::error::Result;

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let query: ProductListQuery = parse_query(&request)?;
	let pairs = parse_form_pairs(&mut request).await?;
	match form_value(&pairs, "action") {
		Some("update_settings") => {
			let mut settings = list_settings(&request);
			if let Some(rows_number) = form_value(&pairs, "rows_number") {
				change_rows_number(&mut settings, ListName::Products, parse_rows_number(rows_number)?);
			}
			if form_value(&pairs, "columns_form").is_some() {
				let columns = pairs
					.iter()
					.filter(|(key, _)| key == "columns")
					.map(|(_, value)| value.clone())
					.collect();
				settings.update_list_settings(ListName::Products, ListSettingsUpdate::Columns(columns));
			}
			let location = product_list_url(&ProductListQuery {
				list: query.list.first_page(),
				..query
			});
			redirect(&location, settings.set_cookie_headers(cookie_domain(context)))
		}
		Some("bulk_delete") => {
			let selection = query.list.selection();
			if selection.is_empty() {
				return Err(Error::BadRequest.into());
			}
			context.store.delete_products(selection.ids()).await;
			let location = product_list_url(&ProductListQuery {
				list: query.list.first_page(),
				..query
			});
			redirect(&location, Vec::new())
		}
		action => {
			tracing::debug!(?action, "unknown product list action");
			Err(Error::BadRequest.into())
		}
	}
}

#[cfg(test)]
#[tokio::test]
async fn test_update_settings() {
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let request = http::Request::builder()
		.method("POST")
		.uri("/products/?sort=date&after=abc")
		.body(hyper::Body::from(
			"action=update_settings&columns_form=true&columns=price&columns=attribute%3AQXR0cmlidXRlOjE",
		))
		.unwrap();
	let response = post(&context, request).await.unwrap();
	assert_eq!(response.headers()[header::LOCATION], "/products/?sort=date");
	let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
	assert!(cookie.starts_with("bazaar-list-settings-products="));
	let request = http::Request::builder()
		.method("POST")
		.uri("/products/")
		.body(hyper::Body::from("action=update_settings&rows_number=many"))
		.unwrap();
	assert!(post(&context, request).await.is_err());
	let request = http::Request::builder()
		.method("POST")
		.uri("/products/")
		.body(hyper::Body::from("action=update_settings&rows_number=18446744073709551615"))
		.unwrap();
	assert!(post(&context, request).await.is_err());
}

#[cfg(test)]
#[tokio::test]
async fn test_bulk_delete() {
	use crate::store::encode_id;
	let context = crate::test_context();
	let first = encode_id("Product", 23);
	let second = encode_id("Product", 24);
	let request = http::Request::builder()
		.method("POST")
		.uri(format!("/products/?selected={}%2C{}", first, second))
		.body(hyper::Body::from("action=bulk_delete"))
		.unwrap();
	post(&context, request).await.unwrap();
	assert_eq!(context.store.delete_products(&[first, second]).await, 0);
}
