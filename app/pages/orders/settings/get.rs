use super::page::{render, Props, TITLE};
use crate::{helpers::app_layout_info, Context};
use bazaar_app_common::error::html_response;
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
	let settings = context.store.order_settings().await;
	let props = Props {
		app_layout_info: app_layout_info(context, Section::Orders, context.messages.format(&TITLE)),
		settings,
	};
	let html = render(props, &context.messages);
	html_response(StatusCode::OK, html, Vec::new())
}
