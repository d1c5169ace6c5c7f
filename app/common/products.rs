use crate::{
	channels::ChannelListing,
	list::{
		columns::{ColumnSlot, ListColumn},
		rows::Entity,
		sort::SortField,
	},
};
use bazaar_deps::chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductType {
	pub id: String,
	pub name: String,
}

/// The values one product has for one attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductAttribute {
	pub attribute_id: String,
	pub values: Vec<String>,
}

/// An attribute that can be shown as a product list column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridAttribute {
	pub id: String,
	pub name: String,
}

/// A product as the product list shows it. Fields the backend has not resolved are `None` and render as placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
	pub id: String,
	pub name: Option<String>,
	pub thumbnail: Option<String>,
	pub product_type: Option<ProductType>,
	pub channel_listings: Option<Vec<ChannelListing>>,
	pub attributes: Option<Vec<ProductAttribute>>,
	pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Product {
	fn id(&self) -> &str {
		&self.id
	}
}

impl Product {
	pub fn channel_listing(&self, channel_id: Option<&str>) -> Option<&ChannelListing> {
		let channel_id = channel_id?;
		self.channel_listings
			.as_ref()?
			.iter()
			.find(|listing| listing.channel.id == channel_id)
	}

	/// The text of an attribute cell. `None` while the product's attributes are unresolved.
	pub fn attribute_text(&self, attribute_id: &str) -> Option<String> {
		let attributes = self.attributes.as_ref()?;
		let text = attributes
			.iter()
			.find(|attribute| attribute.attribute_id == attribute_id)
			.map(|attribute| attribute.values.join(", "))
			.filter(|text| !text.is_empty())
			.unwrap_or_else(|| "-".to_owned());
		Some(text)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductListColumn {
	ProductType,
	Availability,
	Date,
	Price,
}

impl ListColumn for ProductListColumn {
	fn key(self) -> &'static str {
		match self {
			ProductListColumn::ProductType => "productType",
			ProductListColumn::Availability => "availability",
			ProductListColumn::Date => "date",
			ProductListColumn::Price => "price",
		}
	}

	fn layout() -> &'static [ColumnSlot<Self>] {
		&[
			ColumnSlot::Column(ProductListColumn::ProductType),
			ColumnSlot::Column(ProductListColumn::Availability),
			ColumnSlot::Attributes,
			ColumnSlot::Column(ProductListColumn::Date),
			ColumnSlot::Column(ProductListColumn::Price),
		]
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductListSortField {
	Name,
	ProductType,
	Status,
	Attribute,
	Date,
	Price,
}

impl SortField for ProductListSortField {
	fn as_str(self) -> &'static str {
		match self {
			ProductListSortField::Name => "name",
			ProductListSortField::ProductType => "productType",
			ProductListSortField::Status => "status",
			ProductListSortField::Attribute => "attribute",
			ProductListSortField::Date => "date",
			ProductListSortField::Price => "price",
		}
	}

	fn parse(value: &str) -> Option<Self> {
		match value {
			"name" => Some(ProductListSortField::Name),
			"productType" => Some(ProductListSortField::ProductType),
			"status" => Some(ProductListSortField::Status),
			"attribute" => Some(ProductListSortField::Attribute),
			"date" => Some(ProductListSortField::Date),
			"price" => Some(ProductListSortField::Price),
			_ => None,
		}
	}

	fn requires_channel(self) -> bool {
		matches!(
			self,
			ProductListSortField::Status | ProductListSortField::Price
		)
	}
}

#[test]
fn test_attribute_text() {
	let mut product = Product {
		id: "UHJvZHVjdDox".to_owned(),
		name: Some("Red T-Shirt".to_owned()),
		thumbnail: None,
		product_type: None,
		channel_listings: None,
		attributes: None,
		updated_at: None,
	};
	assert_eq!(product.attribute_text("a"), None);
	product.attributes = Some(vec![ProductAttribute {
		attribute_id: "a".to_owned(),
		values: vec!["S".to_owned(), "M".to_owned()],
	}]);
	assert_eq!(product.attribute_text("a").as_deref(), Some("S, M"));
	assert_eq!(product.attribute_text("b").as_deref(), Some("-"));
	assert!(product.channel_listing(Some("c")).is_none());
}
