use super::{
	super::attribute_page::{
		apply_form, handle_submit, posted_initial, AttributePageFormData, KNOWN_FIELDS,
	},
	get::respond,
};
use crate::{
	helpers::{
		cookie_domain, form_value, list_settings, parse_form_pairs, parse_number, parse_query,
		parse_rows_number,
	},
	Context,
};
use bazaar_app_common::{
	attributes::Attribute,
	error::{redirect, Error},
	form::{
		metadata::MetadataChangeTrigger,
		session::{FieldError, FieldErrorCode, FormSession},
	},
	list::{pagination::change_rows_number, settings::ListName},
	urls::{attribute_list_url, attribute_values_url, ListQuery},
};
use bazaar_deps::{
	http::{self, StatusCode},
	hyper, tracing,
};
use bazaar_util::error::Result;

pub async fn post(
	context: &Context,
	mut request: http::Request<hyper::Body>,
	attribute_id: &str,
) -> Result<http::Response<hyper::Body>> {
	let attribute = context
		.store
		.attribute(attribute_id)
		.await
		.ok_or(Error::NotFound)?;
	let query: ListQuery = parse_query(&request)?;
	let pairs = parse_form_pairs(&mut request).await?;
	let value_id = || form_value(&pairs, "value_id").ok_or(Error::BadRequest);
	let back = attribute_values_url(&attribute.id, &query);
	match form_value(&pairs, "action") {
		Some("submit") => {
			let mut session = FormSession::new(posted_initial(Some(&attribute), &pairs));
			let mut trigger = MetadataChangeTrigger::default();
			apply_form(&mut session, &mut trigger, false, &pairs, &context.messages);
			let input = match session.submit(|data| handle_submit(data, false, &trigger)) {
				Ok(input) => input,
				Err(error) => {
					tracing::debug!(%error, "attribute not submitted");
					return respond(context, &request, attribute, session, None, StatusCode::BAD_REQUEST)
						.await;
				}
			};
			match context.store.update_attribute(&attribute.id, input).await {
				Ok(_) => {
					session.succeed();
					redirect(&back, Vec::new())
				}
				Err(errors) => {
					session.fail(errors, &KNOWN_FIELDS);
					respond(context, &request, attribute, session, None, StatusCode::BAD_REQUEST).await
				}
			}
		}
		Some("delete") => {
			context
				.store
				.delete_attribute(&attribute.id)
				.await
				.map_err(|_| Error::NotFound)?;
			redirect(&attribute_list_url(&ListQuery::default()), Vec::new())
		}
		Some("add_value") => {
			let name = form_value(&pairs, "value").unwrap_or("");
			match context.store.add_value(&attribute.id, name).await {
				Ok(_) => redirect(&back, Vec::new()),
				Err(errors) => value_rejected(context, &request, attribute, errors).await,
			}
		}
		Some("delete_value") => {
			context
				.store
				.delete_value(&attribute.id, value_id()?)
				.await
				.map_err(|_| Error::NotFound)?;
			redirect(&back, Vec::new())
		}
		Some("move_value") => {
			let offset = parse_number(form_value(&pairs, "offset").unwrap_or(""))?;
			context
				.store
				.move_value(&attribute.id, value_id()?, offset)
				.await
				.map_err(|_| Error::NotFound)?;
			redirect(&back, Vec::new())
		}
		Some("update_value") => {
			let name = form_value(&pairs, "name").unwrap_or("");
			if name.trim().is_empty() {
				return Err(Error::BadRequest.into());
			}
			match context.store.update_value(&attribute.id, value_id()?, name).await {
				Ok(_) => redirect(&back, Vec::new()),
				Err(errors) if errors.iter().any(|error| error.code == FieldErrorCode::NotFound) => {
					Err(Error::NotFound.into())
				}
				Err(errors) => value_rejected(context, &request, attribute, errors).await,
			}
		}
		Some("update_settings") => {
			let rows_number = form_value(&pairs, "rows_number").ok_or(Error::BadRequest)?;
			let mut settings = list_settings(&request);
			change_rows_number(&mut settings, ListName::AttributeValues, parse_rows_number(rows_number)?);
			let location = attribute_values_url(&attribute.id, &query.first_page());
			redirect(&location, settings.set_cookie_headers(cookie_domain(context)))
		}
		action => {
			tracing::debug!(?action, "unknown attribute action");
			Err(Error::BadRequest.into())
		}
	}
}

/// Renders the page again with the first error of a rejected value change under the values card.
async fn value_rejected(
	context: &Context,
	request: &http::Request<hyper::Body>,
	attribute: Attribute,
	errors: Vec<FieldError>,
) -> Result<http::Response<hyper::Body>> {
	let value_error = errors.into_iter().next().map(|error| error.message);
	let session = FormSession::new(AttributePageFormData::initial(Some(&attribute)));
	respond(context, request, attribute, session, value_error, StatusCode::BAD_REQUEST).await
}

#[cfg(test)]
fn request(id: &str, body: impl Into<String>) -> http::Request<hyper::Body> {
	http::Request::builder()
		.method("POST")
		.uri(format!("/attributes/{}", id))
		.body(hyper::Body::from(body.into()))
		.unwrap()
}

#[cfg(test)]
#[tokio::test]
async fn test_submit_keeps_metadata_edited_elsewhere() {
	use super::super::attribute_page::handle_submit;
	use crate::store::encode_id;
	use bazaar_app_common::form::metadata::{MetadataInput, MetadataSection};
	let context = crate::test_context();
	let id = encode_id("Attribute", 1);
	let before = context.store.attribute(&id).await.unwrap();
	// The page was rendered with no metadata, then someone else added some.
	let mut data = AttributePageFormData::initial(Some(&before));
	data.metadata.metadata = vec![MetadataInput {
		key: "source".to_owned(),
		value: "elsewhere".to_owned(),
	}];
	let mut trigger = MetadataChangeTrigger::default();
	trigger.change(MetadataSection::Public);
	context
		.store
		.update_attribute(&id, handle_submit(&data, false, &trigger))
		.await
		.unwrap();
	let response = post(
		&context,
		request(
			&id,
			"action=submit&name=Colour&slug=color&metadata=&metadata_initial=&private_metadata=x%3A+1&private_metadata_initial=&storefront_search_position=2",
		),
		&id,
	)
	.await
	.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[http::header::LOCATION], format!("/attributes/{}", id));
	let after = context.store.attribute(&id).await.unwrap();
	assert_eq!(after.name, "Colour");
	assert_eq!(after.storefront_search_position, 2);
	assert_eq!(after.input_type, before.input_type);
	assert_eq!(after.metadata, data.metadata.metadata);
	assert_eq!(after.private_metadata.len(), 1);
	assert_eq!(after.private_metadata[0].key, "x");
}

#[cfg(test)]
#[tokio::test]
async fn test_failed_submit_keeps_opened_metadata() {
	use super::super::attribute_page::handle_submit;
	use crate::store::encode_id;
	use bazaar_app_common::form::metadata::{MetadataInput, MetadataSection};
	let context = crate::test_context();
	let id = encode_id("Attribute", 1);
	let opened = context.store.attribute(&id).await.unwrap();
	assert!(opened.metadata.is_empty());
	// The page was opened with no metadata, then someone else added some.
	let mut data = AttributePageFormData::initial(Some(&opened));
	data.metadata.metadata = vec![MetadataInput {
		key: "source".to_owned(),
		value: "elsewhere".to_owned(),
	}];
	let mut trigger = MetadataChangeTrigger::default();
	trigger.change(MetadataSection::Public);
	context
		.store
		.update_attribute(&id, handle_submit(&data, false, &trigger))
		.await
		.unwrap();
	let response = post(
		&context,
		request(
			&id,
			"action=submit&name=Color&slug=size&metadata=&metadata_initial=&private_metadata=&private_metadata_initial=",
		),
		&id,
	)
	.await
	.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let html = crate::body_string(response).await;
	assert!(html.contains(r#"name="metadata_initial" type="hidden" value="""#));
	assert!(!html.contains("source: elsewhere"));
	let response = post(
		&context,
		request(
			&id,
			"action=submit&name=Color&slug=color&metadata=&metadata_initial=&private_metadata=&private_metadata_initial=",
		),
		&id,
	)
	.await
	.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	let after = context.store.attribute(&id).await.unwrap();
	assert_eq!(after.metadata, data.metadata.metadata);
}

#[cfg(test)]
#[tokio::test]
async fn test_submit_unique_slug() {
	use crate::store::encode_id;
	let context = crate::test_context();
	let id = encode_id("Attribute", 1);
	let response = post(&context, request(&id, "action=submit&name=Color&slug=size"), &id)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let html = crate::body_string(response).await;
	assert!(html.contains("Attribute with this Slug already exists."));
	assert_eq!(context.store.attribute(&id).await.unwrap().slug, "color");
}

#[cfg(test)]
#[tokio::test]
async fn test_values() {
	use crate::store::{encode_id, ConnectionArgs};
	let context = crate::test_context();
	let id = encode_id("Attribute", 1);
	let args = ConnectionArgs {
		first: 20,
		request: None,
	};
	let values = context.store.attribute_values(&id, &args).await.unwrap().items;
	let count = values.len();
	let response = post(&context, request(&id, "action=add_value&value=Teal"), &id)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	let response = post(&context, request(&id, "action=add_value&value=Teal"), &id)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	let html = crate::body_string(response).await;
	assert!(html.contains("Attribute value with this name already exists."));
	let values = context.store.attribute_values(&id, &args).await.unwrap().items;
	assert_eq!(values.len(), count + 1);
	let teal = values[count].id.clone();
	post(&context, request(&id, format!("action=move_value&value_id={}&offset=-10", teal)), &id).await.unwrap();
	let values = context.store.attribute_values(&id, &args).await.unwrap().items;
	assert_eq!(values[0].id, teal);
	let rename = format!("action=update_value&value_id={}&name=RED", teal);
	let response = post(&context, request(&id, rename), &id).await.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert!(crate::body_string(response).await.contains("Attribute value with this name already exists."));
	assert!(post(&context, request(&id, "action=update_value&value_id=nope&name=Navy"), &id)
		.await
		.is_err());
	post(&context, request(&id, format!("action=update_value&value_id={}&name=Sea+Green", teal)), &id).await.unwrap();
	let values = context.store.attribute_values(&id, &args).await.unwrap().items;
	assert_eq!(values[0].slug, "sea-green");
	post(&context, request(&id, format!("action=delete_value&value_id={}", teal)), &id).await.unwrap();
	let values = context.store.attribute_values(&id, &args).await.unwrap().items;
	assert_eq!(values.len(), count);
	assert!(post(&context, request(&id, "action=delete_value&value_id=nope"), &id)
		.await
		.is_err());
}

#[cfg(test)]
#[tokio::test]
async fn test_delete() {
	use crate::store::encode_id;
	use bazaar_deps::http::header;
	let context = crate::test_context();
	let id = encode_id("Attribute", 13);
	let response = post(&context, request(&id, "action=delete"), &id).await.unwrap();
	assert_eq!(response.headers()[header::LOCATION], "/attributes/");
	assert!(context.store.attribute(&id).await.is_none());
	assert!(post(&context, request(&id, "action=delete"), &id).await.is_err());
}
