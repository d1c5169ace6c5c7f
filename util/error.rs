pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Builds an ad-hoc error from a message, in the style of `format!`.
#[macro_export]
macro_rules! err {
	($msg:literal $(,)?) => {
		$crate::error::Error::from(format!($msg))
	};
	($err:expr $(,)?) => {
		$crate::error::Error::from($err)
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::Error::from(format!($fmt, $($arg)*))
	};
}

#[test]
fn test_err() {
	let name = "products";
	let error = err!("unknown list {}", name);
	assert_eq!(error.to_string(), "unknown list products");
	let error = err!("no rows");
	assert_eq!(error.to_string(), "no rows");
	let result: Result<()> = Err(err!(std::fmt::Error));
	assert!(result.is_err());
}
