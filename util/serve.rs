use bazaar_deps::{
	backtrace::Backtrace,
	futures::FutureExt,
	http, hyper, tokio,
	tracing::{error, info},
};
use std::{
	cell::RefCell, convert::Infallible, future::Future, panic::AssertUnwindSafe, sync::Arc,
	time::Instant,
};

/// Serves `request_handler` on `host:port` until the server stops. Each request is logged with its status. A panic inside the handler is logged with its backtrace and answered with a 500.
pub async fn serve<C, H, F>(
	host: std::net::IpAddr,
	port: u16,
	request_handler_context: C,
	request_handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send,
{
	// Holds the panic message and backtrace of the request running on this task, if it panicked.
	tokio::task_local! {
		static PANIC_MESSAGE_AND_BACKTRACE: RefCell<Option<(String, Backtrace)>>;
	}
	async fn service<C, H, F>(
		request_handler: Arc<H>,
		request_handler_context: Arc<C>,
		request: http::Request<hyper::Body>,
	) -> Result<http::Response<hyper::Body>, Infallible>
	where
		C: Send + Sync + 'static,
		H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
		F: Future<Output = http::Response<hyper::Body>> + Send,
	{
		let start = Instant::now();
		let method = request.method().clone();
		let path = request.uri().path().to_owned();
		let result = AssertUnwindSafe(request_handler(request_handler_context, request))
			.catch_unwind()
			.await;
		let response = result.unwrap_or_else(|_| {
			let message = PANIC_MESSAGE_AND_BACKTRACE
				.try_with(|panic_message_and_backtrace| {
					panic_message_and_backtrace
						.borrow()
						.as_ref()
						.map(|(message, backtrace)| format!("{}\n{:?}", message, backtrace))
				})
				.ok()
				.flatten()
				.unwrap_or_else(|| "unknown panic".to_owned());
			error!(%method, %path, "{}", message);
			let mut response = http::Response::new(hyper::Body::from("internal server error"));
			*response.status_mut() = http::StatusCode::INTERNAL_SERVER_ERROR;
			response
		});
		info!(
			%method,
			%path,
			status = response.status().as_u16(),
			elapsed_ms = start.elapsed().as_millis() as u64,
			"request"
		);
		Ok(response)
	}
	// Record the panic message and backtrace of a panicking request so the service can report it.
	let hook = std::panic::take_hook();
	std::panic::set_hook(Box::new(|panic_info| {
		let value = (panic_info.to_string(), Backtrace::new());
		let _ = PANIC_MESSAGE_AND_BACKTRACE.try_with(|panic_message_and_backtrace| {
			panic_message_and_backtrace.borrow_mut().replace(value);
		});
	}));
	let request_handler = Arc::new(request_handler);
	let request_handler_context = Arc::new(request_handler_context);
	let service = hyper::service::make_service_fn(|_| {
		let request_handler = request_handler.clone();
		let request_handler_context = request_handler_context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let request_handler = request_handler.clone();
				let request_handler_context = request_handler_context.clone();
				PANIC_MESSAGE_AND_BACKTRACE.scope(RefCell::new(None), async move {
					service(request_handler, request_handler_context, request).await
				})
			}))
		}
	});
	let addr = std::net::SocketAddr::new(host, port);
	let server = hyper::Server::try_bind(&addr)?;
	info!(%addr, "serving");
	let result = server.serve(service).await;
	std::panic::set_hook(hook);
	result
}
