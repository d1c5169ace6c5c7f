use std::collections::BTreeMap;

/// Cookies stay for a year.
const MAX_AGE: u64 = 60 * 60 * 24 * 365;

pub fn parse_cookies(cookies_str: &str) -> Result<BTreeMap<&str, &str>, ()> {
	cookies_str
		.split(';')
		.map(|cookie| cookie.trim())
		.filter(|cookie| !cookie.is_empty())
		.map(|cookie| {
			let mut components = cookie.splitn(2, '=');
			let key = match components.next() {
				Some(key) => key,
				None => return Err(()),
			};
			let value = match components.next() {
				Some(value) => value,
				None => return Err(()),
			};
			Ok((key, value))
		})
		.collect()
}

pub fn set_cookie_header(name: &str, value: &str, domain: Option<&str>) -> String {
	let mut header = format!(
		"{}={}; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
		name, value, MAX_AGE
	);
	if let Some(domain) = domain {
		header.push_str("; Domain=");
		header.push_str(domain);
	}
	header
}

#[test]
fn test_parse_cookies() {
	let cookies = parse_cookies("a=1; b=eyJ4IjoxfQ==").unwrap();
	assert_eq!(cookies.get("a"), Some(&"1"));
	assert_eq!(cookies.get("b"), Some(&"eyJ4IjoxfQ=="));
	assert!(parse_cookies("a").is_err());
}

#[test]
fn test_set_cookie_header() {
	assert_eq!(
		set_cookie_header("a", "1", Some("example.com")),
		"a=1; Path=/; Max-Age=31536000; SameSite=Lax; HttpOnly; Domain=example.com"
	);
}
