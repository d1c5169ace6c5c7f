use crate::{
	attributes::AttributeListSortField,
	list::{
		pagination::PageRequest,
		selection::Selection,
		sort::{Sort, SortField},
	},
	orders::OrderListSortField,
	products::ProductListSortField,
};
use bazaar_deps::serde_urlencoded;

fn with_query<Q: serde::Serialize>(path: &str, query: &Q) -> String {
	match serde_urlencoded::to_string(query) {
		Ok(query) if !query.is_empty() => format!("{}?{}", path, query),
		_ => path.to_owned(),
	}
}

/// Page queries flatten `ListQuery`, which hands every value over as a string, so non-string values are parsed here.
fn deserialize_optional_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: serde::Deserializer<'de>,
	T: std::str::FromStr,
	T::Err: std::fmt::Display,
{
	let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
	value
		.map(|value| value.parse().map_err(serde::de::Error::custom))
		.transpose()
}

/// Query parameters every list page shares.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListQuery {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sort: Option<String>,
	#[serde(
		default,
		deserialize_with = "deserialize_optional_parsed",
		skip_serializing_if = "Option::is_none"
	)]
	pub asc: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub after: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub before: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub selected: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
}

impl ListQuery {
	/// The requested sort, or `default` when the query names none or an unknown field.
	pub fn sort_or<F: SortField>(&self, default: Sort<F>) -> Sort<F> {
		match self.sort.as_deref().and_then(F::parse) {
			Some(sort) => Sort {
				sort,
				asc: self.asc.unwrap_or(true),
			},
			None => default,
		}
	}

	pub fn with_sort<F: SortField>(&self, sort: Sort<F>) -> ListQuery {
		ListQuery {
			sort: Some(sort.sort.as_str().to_owned()),
			asc: Some(sort.asc),
			after: None,
			before: None,
			..self.clone()
		}
	}

	pub fn page_request(&self) -> Option<PageRequest> {
		PageRequest::from_query(self.after.as_deref(), self.before.as_deref())
	}

	pub fn with_page(&self, request: PageRequest) -> ListQuery {
		let (after, before) = request.query();
		ListQuery {
			after,
			before,
			..self.clone()
		}
	}

	pub fn selection(&self) -> Selection {
		Selection::from_query(self.selected.as_deref())
	}

	pub fn with_selection(&self, selection: &Selection) -> ListQuery {
		ListQuery {
			selected: selection.to_query(),
			..self.clone()
		}
	}

	/// The same list, back on its first page.
	pub fn first_page(&self) -> ListQuery {
		ListQuery {
			after: None,
			before: None,
			selected: None,
			..self.clone()
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProductListQuery {
	#[serde(flatten)]
	pub list: ListQuery,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attribute_id: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
}

impl ProductListQuery {
	pub fn sort(&self) -> Sort<ProductListSortField> {
		self.list.sort_or(Sort {
			sort: ProductListSortField::Name,
			asc: true,
		})
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderListQuery {
	#[serde(flatten)]
	pub list: ListQuery,
	#[serde(
		default,
		deserialize_with = "deserialize_optional_parsed",
		skip_serializing_if = "Option::is_none"
	)]
	pub tab: Option<usize>,
}

impl OrderListQuery {
	pub fn sort(&self) -> Sort<OrderListSortField> {
		self.list.sort_or(Sort {
			sort: OrderListSortField::Number,
			asc: false,
		})
	}
}

pub fn attribute_list_sort(query: &ListQuery) -> Sort<AttributeListSortField> {
	query.sort_or(Sort {
		sort: AttributeListSortField::Name,
		asc: true,
	})
}

pub fn product_list_url(query: &ProductListQuery) -> String {
	with_query("/products/", query)
}

pub fn product_url(id: &str) -> String {
	format!("/products/{}", id)
}

pub fn order_list_url(query: &OrderListQuery) -> String {
	with_query("/orders/", query)
}

pub fn order_url(id: &str) -> String {
	format!("/orders/{}", id)
}

pub fn order_settings_url() -> String {
	"/orders/settings".to_owned()
}

pub fn attribute_list_url(query: &ListQuery) -> String {
	with_query("/attributes/", query)
}

pub fn attribute_add_url() -> String {
	"/attributes/add".to_owned()
}

pub fn attribute_url(id: &str) -> String {
	format!("/attributes/{}", id)
}

/// The attribute page showing a page of its values.
pub fn attribute_values_url(id: &str, query: &ListQuery) -> String {
	with_query(&attribute_url(id), query)
}

#[test]
fn test_list_urls() {
	assert_eq!(product_list_url(&ProductListQuery::default()), "/products/");
	let query = ProductListQuery {
		list: ListQuery {
			after: Some("YXJyYXljb25uZWN0aW9uOjE5".to_owned()),
			..Default::default()
		},
		channel: Some("default-channel".to_owned()),
		attribute_id: None,
	};
	let sorted = ProductListQuery {
		list: query.list.with_sort(Sort {
			sort: ProductListSortField::Price,
			asc: false,
		}),
		..query.clone()
	};
	assert_eq!(
		product_list_url(&sorted),
		"/products/?sort=price&asc=false&channel=default-channel"
	);
	assert_eq!(
		sorted.sort(),
		Sort {
			sort: ProductListSortField::Price,
			asc: false
		}
	);
	assert_eq!(
		query.list.page_request(),
		Some(PageRequest::After("YXJyYXljb25uZWN0aW9uOjE5".to_owned()))
	);
}

#[test]
fn test_parse_list_query() {
	let query: ProductListQuery =
		serde_urlencoded::from_str("sort=status&asc=false&selected=a%2Cb&channel=c").unwrap();
	assert_eq!(query.list.selection().ids(), &["a", "b"]);
	assert_eq!(query.channel.as_deref(), Some("c"));
	assert_eq!(query.sort().sort, ProductListSortField::Status);
	let query: ProductListQuery = serde_urlencoded::from_str("sort=bogus").unwrap();
	assert_eq!(query.sort().sort, ProductListSortField::Name);
	let query: OrderListQuery = serde_urlencoded::from_str("tab=2&asc=true").unwrap();
	assert_eq!(query.tab, Some(2));
	assert_eq!(query.list.asc, Some(true));
	assert!(serde_urlencoded::from_str::<OrderListQuery>("asc=maybe").is_err());
}
