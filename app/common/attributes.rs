use crate::{
	form::metadata::MetadataInput,
	list::{rows::Entity, sort::SortField},
};

/// Declares an enum whose variants have a wire name and a label.
macro_rules! attribute_enum {
	($(#[$meta:meta])* $name:ident { $($variant:ident => ($value:literal, $label:literal)),* $(,)? }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
		pub enum $name {
			$($variant),*
		}

		impl $name {
			pub const ALL: &'static [$name] = &[$($name::$variant),*];

			pub fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $value),*
				}
			}

			pub fn label(self) -> &'static str {
				match self {
					$($name::$variant => $label),*
				}
			}

			pub fn parse(value: &str) -> Option<$name> {
				match value {
					$($value => Some($name::$variant),)*
					_ => None,
				}
			}
		}
	};
}

attribute_enum!(
	/// What kind of entity an attribute describes.
	AttributeType {
		ProductType => ("PRODUCT_TYPE", "Product Attribute"),
		PageType => ("PAGE_TYPE", "Content Attribute"),
	}
);

attribute_enum!(
	AttributeInputType {
		Dropdown => ("DROPDOWN", "Dropdown"),
		Multiselect => ("MULTISELECT", "Multiple Select"),
		File => ("FILE", "File"),
		Reference => ("REFERENCE", "References"),
		Numeric => ("NUMERIC", "Numeric"),
		RichText => ("RICH_TEXT", "Rich Text"),
		PlainText => ("PLAIN_TEXT", "Plain Text"),
		Swatch => ("SWATCH", "Swatch"),
		Boolean => ("BOOLEAN", "Boolean"),
		Date => ("DATE", "Date"),
		DateTime => ("DATE_TIME", "Date Time"),
	}
);

attribute_enum!(
	/// What a reference attribute points to.
	AttributeEntityType {
		Page => ("PAGE", "Pages"),
		Product => ("PRODUCT", "Products"),
		ProductVariant => ("PRODUCT_VARIANT", "Product Variants"),
	}
);

attribute_enum!(
	MeasurementUnit {
		Cm => ("CM", "cm"),
		M => ("M", "m"),
		Km => ("KM", "km"),
		G => ("G", "g"),
		Kg => ("KG", "kg"),
		Lb => ("LB", "lb"),
		Oz => ("OZ", "oz"),
		Ml => ("ML", "ml"),
		L => ("LITER", "l"),
		SqCm => ("SQ_CM", "cm²"),
		SqM => ("SQ_M", "m²"),
	}
);

/// Input types whose values are a managed list rather than free input.
pub const ATTRIBUTE_TYPES_WITH_DEDICATED_VALUES: [AttributeInputType; 3] = [
	AttributeInputType::Dropdown,
	AttributeInputType::Multiselect,
	AttributeInputType::Swatch,
];

impl AttributeInputType {
	pub fn has_dedicated_values(self) -> bool {
		ATTRIBUTE_TYPES_WITH_DEDICATED_VALUES.contains(&self)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
	pub id: String,
	pub name: String,
	pub slug: String,
	pub attribute_type: AttributeType,
	pub input_type: Option<AttributeInputType>,
	pub entity_type: Option<AttributeEntityType>,
	pub value_required: bool,
	pub visible_in_storefront: bool,
	pub filterable_in_storefront: bool,
	pub filterable_in_dashboard: bool,
	pub available_in_grid: bool,
	pub storefront_search_position: i32,
	pub unit: Option<MeasurementUnit>,
	pub metadata: Vec<MetadataInput>,
	pub private_metadata: Vec<MetadataInput>,
}

impl Entity for Attribute {
	fn id(&self) -> &str {
		&self.id
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeValue {
	pub id: String,
	pub name: String,
	pub slug: String,
}

impl Entity for AttributeValue {
	fn id(&self) -> &str {
		&self.id
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeListSortField {
	Name,
	Slug,
	Visible,
	Searchable,
}

impl SortField for AttributeListSortField {
	fn as_str(self) -> &'static str {
		match self {
			AttributeListSortField::Name => "name",
			AttributeListSortField::Slug => "slug",
			AttributeListSortField::Visible => "visible",
			AttributeListSortField::Searchable => "searchable",
		}
	}

	fn parse(value: &str) -> Option<Self> {
		match value {
			"name" => Some(AttributeListSortField::Name),
			"slug" => Some(AttributeListSortField::Slug),
			"visible" => Some(AttributeListSortField::Visible),
			"searchable" => Some(AttributeListSortField::Searchable),
			_ => None,
		}
	}
}

#[test]
fn test_dedicated_values() {
	assert!(AttributeInputType::Swatch.has_dedicated_values());
	assert!(!AttributeInputType::Numeric.has_dedicated_values());
	assert_eq!(
		AttributeInputType::parse("DATE_TIME"),
		Some(AttributeInputType::DateTime)
	);
	assert_eq!(AttributeInputType::parse("date_time"), None);
	assert_eq!(AttributeType::ALL.len(), 2);
	assert_eq!(MeasurementUnit::L.as_str(), "LITER");
}
