use crate::cookies::set_cookie_header;
use bazaar_deps::{base64, serde_json, tracing};
use std::collections::BTreeMap;

/// The page size choices offered under every list.
pub const ROWS_NUMBER_CHOICES: [usize; 5] = [10, 20, 30, 50, 100];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListName {
	Attributes,
	AttributeValues,
	Orders,
	Products,
}

impl ListName {
	pub const ALL: [ListName; 4] = [
		ListName::Attributes,
		ListName::AttributeValues,
		ListName::Orders,
		ListName::Products,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			ListName::Attributes => "attributes",
			ListName::AttributeValues => "attribute-values",
			ListName::Orders => "orders",
			ListName::Products => "products",
		}
	}

	pub fn cookie_name(self) -> String {
		format!("bazaar-list-settings-{}", self.as_str())
	}
}

/// How one list is displayed: its page size and its visible optional columns.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSettings {
	pub rows_number: usize,
	pub columns: Vec<String>,
}

impl ListSettings {
	pub fn default_for(list: ListName) -> ListSettings {
		let columns: &[&str] = match list {
			ListName::Products => &["availability", "price", "productType", "date"],
			ListName::Attributes | ListName::AttributeValues | ListName::Orders => &[],
		};
		ListSettings {
			rows_number: 20,
			columns: columns.iter().map(|column| (*column).to_owned()).collect(),
		}
	}

	pub fn apply(&mut self, update: ListSettingsUpdate) {
		match update {
			ListSettingsUpdate::RowNumber(rows_number) => self.rows_number = rows_number,
			ListSettingsUpdate::Columns(columns) => self.columns = columns,
		}
	}
}

/// A partial change to one list's settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListSettingsUpdate {
	RowNumber(usize),
	Columns(Vec<String>),
}

/// Whatever persists list settings. Lists never keep their own copy, they hand every change to this.
pub trait UpdateListSettings {
	fn update_list_settings(&mut self, list: ListName, update: ListSettingsUpdate);
}

/// List settings carried in cookies, one cookie per list holding base64 encoded JSON.
#[derive(Clone, Debug, Default)]
pub struct ListSettingsCookies {
	settings: BTreeMap<ListName, ListSettings>,
	changed: Vec<ListName>,
}

impl ListSettingsCookies {
	/// Reads the settings of every list from the request cookies. A missing or malformed cookie means the list's defaults, and so does a page size that is not one of the choices.
	pub fn from_cookies(cookies: &BTreeMap<&str, &str>) -> ListSettingsCookies {
		let mut settings = BTreeMap::new();
		for list in ListName::ALL.iter().copied() {
			let cookie_name = list.cookie_name();
			if let Some(value) = cookies.get(cookie_name.as_str()) {
				match decode(value) {
					Some(mut list_settings) => {
						if !ROWS_NUMBER_CHOICES.contains(&list_settings.rows_number) {
							list_settings.rows_number = ListSettings::default_for(list).rows_number;
						}
						settings.insert(list, list_settings);
					}
					None => tracing::warn!(list = list.as_str(), "ignoring malformed list settings cookie"),
				}
			}
		}
		ListSettingsCookies {
			settings,
			changed: Vec::new(),
		}
	}

	pub fn get(&self, list: ListName) -> ListSettings {
		self.settings
			.get(&list)
			.cloned()
			.unwrap_or_else(|| ListSettings::default_for(list))
	}

	/// `Set-Cookie` values for the lists that changed.
	pub fn set_cookie_headers(&self, domain: Option<&str>) -> Vec<String> {
		self.changed
			.iter()
			.filter_map(|list| {
				let settings = self.settings.get(list)?;
				let value = serde_json::to_vec(settings).ok()?;
				let value = base64::encode_config(value, base64::URL_SAFE_NO_PAD);
				Some(set_cookie_header(&list.cookie_name(), &value, domain))
			})
			.collect()
	}
}

impl UpdateListSettings for ListSettingsCookies {
	fn update_list_settings(&mut self, list: ListName, update: ListSettingsUpdate) {
		let mut settings = self.get(list);
		settings.apply(update);
		self.settings.insert(list, settings);
		if !self.changed.contains(&list) {
			self.changed.push(list);
		}
	}
}

fn decode(value: &str) -> Option<ListSettings> {
	let value = base64::decode_config(value, base64::URL_SAFE_NO_PAD).ok()?;
	serde_json::from_slice(&value).ok()
}

#[test]
fn test_cookie_round_trip() {
	let mut cookies = ListSettingsCookies::default();
	assert_eq!(cookies.get(ListName::Orders).rows_number, 20);
	cookies.update_list_settings(ListName::Products, ListSettingsUpdate::RowNumber(50));
	let headers = cookies.set_cookie_headers(None);
	assert_eq!(headers.len(), 1);
	let cookie = headers[0].split(';').next().unwrap();
	let (name, value) = cookie.split_at(cookie.find('=').unwrap());
	let mut request_cookies = BTreeMap::new();
	request_cookies.insert(name, &value[1..]);
	let restored = ListSettingsCookies::from_cookies(&request_cookies);
	let settings = restored.get(ListName::Products);
	assert_eq!(settings.rows_number, 50);
	assert_eq!(
		settings.columns,
		ListSettings::default_for(ListName::Products).columns
	);
}

#[test]
fn test_malformed_cookie_uses_defaults() {
	let mut request_cookies = BTreeMap::new();
	request_cookies.insert("bazaar-list-settings-orders", "not base64!");
	let cookies = ListSettingsCookies::from_cookies(&request_cookies);
	assert_eq!(
		cookies.get(ListName::Orders),
		ListSettings::default_for(ListName::Orders)
	);
}

#[test]
fn test_cookie_rows_number_outside_choices() {
	let value = base64::encode_config(
		br#"{"rowsNumber":18446744073709551615,"columns":["price"]}"#,
		base64::URL_SAFE_NO_PAD,
	);
	let mut request_cookies = BTreeMap::new();
	request_cookies.insert("bazaar-list-settings-products", value.as_str());
	let settings = ListSettingsCookies::from_cookies(&request_cookies).get(ListName::Products);
	assert_eq!(settings.rows_number, 20);
	assert_eq!(settings.columns, vec!["price".to_owned()]);
}
