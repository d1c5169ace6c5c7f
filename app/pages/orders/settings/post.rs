use crate::{helpers::parse_form, Context};
use bazaar_app_common::{
	error::{redirect, Error},
	orders::OrderSettings,
	urls::order_settings_url,
};
use bazaar_deps::{http, hyper};
use bazaar_util::error::Result;

/// Unchecked boxes are left out of the form, so every switch defaults to off.
#[derive(serde::Deserialize)]
struct Form {
	action: String,
	#[serde(default)]
	automatically_confirm_all_new_orders: bool,
	#[serde(default)]
	automatically_fulfill_non_shippable_gift_card: bool,
}

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
) -> Result<http::Response<hyper::Body>> {
	let form: Form = parse_form(&mut request).await?;
	if form.action != "submit" {
		return Err(Error::BadRequest.into());
	}
	context
		.store
		.update_order_settings(OrderSettings {
			automatically_confirm_all_new_orders: form.automatically_confirm_all_new_orders,
			automatically_fulfill_non_shippable_gift_card: form
				.automatically_fulfill_non_shippable_gift_card,
		})
		.await;
	redirect(&order_settings_url(), Vec::new())
}

#[cfg(test)]
#[tokio::test]
async fn test_update_settings() {
	use super::get;
	let context = crate::test_context();
	let request = http::Request::builder()
		.method("POST")
		.uri("/orders/settings")
		.body(hyper::Body::from("action=submit&automatically_confirm_all_new_orders=true"))
		.unwrap();
	post(&context, request).await.unwrap();
	let settings = context.store.order_settings().await;
	assert!(settings.automatically_confirm_all_new_orders);
	assert!(!settings.automatically_fulfill_non_shippable_gift_card);
	let request = http::Request::builder()
		.uri("/orders/settings")
		.body(hyper::Body::empty())
		.unwrap();
	let html = crate::body_string(get(&context, request).await.unwrap()).await;
	assert!(html.contains("<title>Order settings</title>"));
	assert_eq!(html.matches("<input checked class=\"form-checkbox-field\"").count(), 1);
}
